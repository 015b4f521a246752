pub mod config;
pub mod logging;

pub mod error;
pub mod probe;
pub mod report;
pub mod runner;
pub mod size;
pub mod url_list;
