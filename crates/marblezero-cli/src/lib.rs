pub mod config;
pub mod history;
pub mod ingest;
pub mod logging;
pub mod output;
pub mod paths;
