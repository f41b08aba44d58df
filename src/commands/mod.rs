//! Command implementations for the NBA shot chart CLI

pub mod chart;
pub mod reference;
