// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod builder;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod model;
pub mod progress;
pub mod runner;
pub mod specs;
pub mod store;

pub use config::{Config, ImageMode};
pub use error::{Error, Result};
pub use model::{Category, Party, PoliticianRecord};
