//! Core library for `pipes` — find pipenv environments and the projects they
//! belong to.
//!
//! Provides environment discovery, interpreter lookup, version probing,
//! project directory links, and configuration.

pub mod config;
pub mod environment;
pub mod error;
pub mod link;
pub mod locate;
pub mod marker;
pub mod name;
pub mod process;
pub mod session;
pub mod version;
