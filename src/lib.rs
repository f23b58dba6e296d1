//! src/lib.rs
pub mod configuration;
pub mod domain;
pub mod error;
pub mod outcome;
pub mod registration;
pub mod telemetry;
