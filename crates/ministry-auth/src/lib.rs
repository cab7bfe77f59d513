//! # Ministry Auth
//!
//! Everything that decides who the caller is and what they may do:
//!
//! - [`session`]: The resolved [`Session`] and its permission checks
//! - [`access`]: Resolver functions over an optional session
//! - [`codec`]: Reading and issuing the session cookie value
//! - [`guard`]: The dashboard route guard decision
//!
//! The route guard and the fine-grained checks share [`access`], so the
//! coarse dashboard gate can never disagree with what a super role is
//! granted elsewhere.
//!
//! # Example
//!
//! ```ignore
//! use ministry_auth::{SessionCodec, access};
//! use ministry_config::SessionConfig;
//! use ministry_core::permissions;
//!
//! let codec = SessionCodec::new(&SessionConfig::from_env());
//! let session = codec.current_user(Some(r#"{"role":"moniteur","permissions":["activites.create"]}"#));
//!
//! assert!(access::can(session.as_ref(), permissions::ACTIVITES_CREATE));
//! assert!(!access::can(session.as_ref(), permissions::USERS_CREATE));
//! ```

pub mod access;
pub mod codec;
pub mod guard;
pub mod session;

// Re-export commonly used types at crate root
pub use codec::{SessionCodec, SessionLoad};
pub use guard::{GuardDecision, GuardState, evaluate_guard};
pub use session::Session;
