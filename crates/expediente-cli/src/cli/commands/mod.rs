//! CLI command handlers. Each command is in its own file.

mod inspect;
mod resolve;
mod run;

pub use inspect::run_inspect;
pub use resolve::run_resolve;
pub use run::run_batch;
