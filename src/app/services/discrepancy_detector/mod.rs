//! Event/process time discrepancy detection
//!
//! A discrepancy is a row whose event time is strictly later than its process
//! time: the client claims something happened after the server had already
//! handled it. Rows are reported in series order, which is file order.

pub mod detector;
pub mod report;

pub use detector::{DiscrepancyDetector, detect_discrepancies};
pub use report::{Discrepancy, DiscrepancyReport};
