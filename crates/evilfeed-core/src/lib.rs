pub mod config;
pub mod logging;

pub mod blocklist;
pub mod feed;
pub mod fetch;
pub mod pipeline;
pub mod retry;
pub mod writer;
