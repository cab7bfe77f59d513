//! # Ministry API
//!
//! Session, permission and route-guard layer of the ministry administration
//! dashboard (children, monitors, activities, cotisations, expenses, worship
//! reports, rooms, photos and videos, users and roles).
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── ministry-core/    # AppError, permission registry
//! ├── ministry-config/  # Session, guard, CORS and server configuration
//! ├── ministry-models/  # Roles, session user, API DTOs
//! ├── ministry-auth/    # Session codec, resolver, guard decision
//! └── ministry-cli/     # Operator CLI
//! src/
//! ├── middleware/       # Session loading, route guard, extractors
//! └── modules/          # session, roles, navigation, site
//! ```
//!
//! ## Roles
//!
//! | Role           | Label                 | Permissions            |
//! |----------------|-----------------------|------------------------|
//! | `admin`        | Administrateur        | everything             |
//! | `super_admin`  | Super administrateur  | everything             |
//! | `coordination` | Coordination          | explicit list          |
//! | `chef_salle`   | Chef de salle         | explicit list          |
//! | `moniteur`     | Moniteur              | explicit list          |
//! | `financier`    | Financier             | explicit list          |
//! | `parent`       | Parent                | explicit list          |
//! | `enfant`       | Enfant                | explicit list          |
//!
//! ## Session Cookie
//!
//! The `auth_user` cookie carries the user record written at login. By
//! default it is plain JSON and is trusted as-is, which makes every check in
//! this service a convenience rather than a security boundary. Setting
//! `SESSION_SIGNING_SECRET` switches to signed tokens that are verified on
//! every request.
//!
//! ## Environment Variables
//!
//! ```bash
//! AUTH_COOKIE_NAME=auth_user
//! SESSION_SIGNING_SECRET=change-me
//! GUARD_PROTECTED_PREFIX=/dashboard
//! GUARD_LOGIN_PATH=/login
//! SERVER_ADDR=0.0.0.0:8000
//! METRICS_ADDR=0.0.0.0:9090
//! ```

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use ministry_auth;
pub use ministry_config;
pub use ministry_core;
pub use ministry_models;
