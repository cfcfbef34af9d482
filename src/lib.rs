// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod core;
pub mod scrape;

pub mod crawl;
pub mod csv;
pub mod dataset;
pub mod dates;
pub mod error;
pub mod outcome;
pub mod params;
pub mod store;
pub mod teams;

pub use error::{Error, Result};
