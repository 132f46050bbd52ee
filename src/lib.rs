// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod specs;

pub mod file;
pub mod groups;
pub mod progress;
pub mod scrape;

pub use error::Error;
