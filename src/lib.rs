//! Library crate for port-probe exposing reusable modules.
pub mod orchestrator;
pub mod ports;
pub mod report;
pub mod scanner;
pub mod targets;
pub mod types;
