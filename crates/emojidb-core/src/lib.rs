pub mod config;
pub mod logging;

pub mod client;
pub mod console;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod query;
pub mod table;
