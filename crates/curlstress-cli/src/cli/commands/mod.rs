//! CLI command handlers, one file per command.

mod curl;
mod probe;

pub use curl::run_curl;
pub use probe::run_probe;

#[cfg(test)]
pub(crate) use curl::urls_file;
