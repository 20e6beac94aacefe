//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod directory;
pub mod locales;
pub mod run;
pub mod script;
