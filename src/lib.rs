//! Keypad calculator: an input accumulator over a sanitizing, formatting
//! wrapper around fasteval.

pub mod app;
pub mod calculator;
pub mod config;
pub mod keypad;
