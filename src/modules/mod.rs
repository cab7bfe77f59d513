pub mod navigation;
pub mod roles;
pub mod session;
pub mod site;
