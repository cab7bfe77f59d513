//! # Ministry Config
//!
//! Configuration types for the Ministry API, loaded from environment variables:
//!
//! - [`session`]: Session cookie name, optional signing secret and lifetime
//! - [`guard`]: Protected path prefix and redirect targets of the route guard
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listen addresses for the API and metrics servers
//!
//! # Example
//!
//! ```ignore
//! use ministry_config::{CorsConfig, GuardConfig, ServerConfig, SessionConfig};
//!
//! let session_config = SessionConfig::from_env();
//! let guard_config = GuardConfig::from_env();
//! ```

pub mod cors;
pub mod guard;
pub mod server;
pub mod session;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use guard::GuardConfig;
pub use server::ServerConfig;
pub use session::SessionConfig;
