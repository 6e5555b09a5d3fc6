//! Storage infrastructure: configuration file loading.
//!
//! The `config` sub-module reads the engine's TOML file and turns it into
//! the settings the dispatcher is built from.  A missing file is not an
//! error; every setting has a default.

pub mod config;
