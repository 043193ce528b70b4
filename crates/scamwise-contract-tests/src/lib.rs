//! # scamwise-contract-tests
//!
//! Hosts schema conformance tests for the JSON verdict contract under
//! `contracts/`. See `tests/contract_validation.rs`.
