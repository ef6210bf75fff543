pub mod config;
pub mod logging;

pub mod fetch;
pub mod pipeline;
pub mod placeholder;
pub mod query;
pub mod report;
pub mod resolver;
pub mod storage;
