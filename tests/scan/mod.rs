//! Streaming pre-scanner tests

pub mod tests_scan;
