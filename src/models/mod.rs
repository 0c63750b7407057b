//! Data models

pub mod report;
pub mod workload;

pub use report::*;
pub use workload::*;
