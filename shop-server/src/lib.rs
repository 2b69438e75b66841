//! Storefront server
//!
//! HTTP API for the storefront: order lifecycle, catalog reads, settings,
//! bank slip upload and order confirmation dispatch.
//!
//! # Module structure
//!
//! ```text
//! shop-server/src/
//! ├── core/       # configuration, state, server startup
//! ├── api/        # HTTP routes and handlers
//! ├── db/         # embedded SurrealDB: row models and repositories
//! ├── services/   # order confirmation notifications
//! └── utils/      # logger, time helpers
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use api::build_app;
pub use core::{Config, Server, ServerState};
pub use services::{BrevoNotifier, NoopNotifier, Notifier, NotifyError};
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load the environment and initialize logging
pub fn setup_environment() {
    dotenv::dotenv().ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
   _____ __                  ____                 __
  / ___// /_____  ________  / __/________  ____  / /_
  \__ \/ __/ __ \/ ___/ _ \/ /_/ ___/ __ \/ __ \/ __/
 ___/ / /_/ /_/ / /  /  __/ __/ /  / /_/ / / / / /_
/____/\__/\____/_/   \___/_/ /_/   \____/_/ /_/\__/
    "#
    );
}
