//! Sprout Server - e-learning commerce backend
//!
//! # Architecture overview
//!
//! - **Authentication** (`auth`): JWT issuance/validation, Argon2
//!   credential hashing, per-request authentication middleware and a
//!   declarative authorization policy table
//! - **Store** (`db`): in-memory repositories for the commerce
//!   entities
//! - **HTTP API** (`api`): RESTful routes and handlers
//!
//! # Module structure
//!
//! ```text
//! sprout-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT, credentials, principal, policy
//! ├── db/            # store + repositories
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # errors, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export common types
pub use auth::{AuthorizationPolicy, CurrentUser, JwtConfig, JwtService};
pub use core::{Config, Server, ServerState};
pub use db::Store;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - structured events on the `security` target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
