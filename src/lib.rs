pub mod config;
pub mod dataset;
pub mod dedup;
pub mod error;
pub mod logging;
pub mod match_rewrite;
pub mod pipeline;
pub mod rankings;
pub mod reference;
pub mod reference_tables;
pub mod report;
pub mod resolver;
pub mod store;
pub mod team_records;
