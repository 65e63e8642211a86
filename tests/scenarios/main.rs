//! Display Name Scenario Tests
//!
//! End-to-end resolution over a simulated discovery of the scenario class
//! tree: built-in styles, inherited configuration, custom strategies,
//! explicit labels and nested classes.

#[path = "../common/mod.rs"]
mod common;

mod parallel_assembly;
