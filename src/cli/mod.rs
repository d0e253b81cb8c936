//! CLI commands
//!
//! Command implementations for the `codejson` binary.

mod auth;
mod generate;
mod import;
mod progress;
mod style;
mod submit;

pub use auth::run_auth;
pub use generate::run_generate;
pub use import::run_import;
pub use progress::CliNotifier;
pub use submit::run_submit;
