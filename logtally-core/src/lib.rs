pub mod aggregate;
pub mod cli;
pub mod conf;
pub mod logging;
pub mod matcher;
pub mod pipeline;
pub mod report;
pub mod scan;
pub mod stats;
pub mod time;
