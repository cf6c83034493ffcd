// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod progress;
pub mod record;
pub mod runner;
pub mod specs;

pub use record::Record;
pub use runner::{run, RunSummary};
