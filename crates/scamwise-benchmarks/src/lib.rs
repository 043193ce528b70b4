//! # scamwise-benchmarks
//!
//! Hosts latency smoke tests for the classifier. See `tests/nfr_smoke.rs`.
