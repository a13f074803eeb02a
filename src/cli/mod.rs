//! # CLI Module
//!
//! User-facing command implementations. Each command builds its
//! components from the injected [`Config`](crate::config::Config) and
//! delegates to the library layers:
//!
//! - [`auth`] - One-time Spotify account linking via the
//!   authorization-code flow and the local callback server.
//! - [`generate`] - Generates suggestions from preferences and runs the
//!   materialization pipeline.
//!
//! Error kinds from the pipeline are converted into colored user-facing
//! messages here and nowhere else.

mod auth;
mod generate;

pub use auth::auth;
pub use generate::generate;
