//! CLI library components for the HappyLibsWordGen demo.

pub mod cli;
pub mod demo;
pub mod logging;
