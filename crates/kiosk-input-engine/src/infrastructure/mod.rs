//! Infrastructure layer for the injection engine.
//!
//! Contains the adapters the application layer is wired to: hosts, the
//! process runner, config loading, and the console script parser.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `kiosk_input_core`, but MUST NOT be imported by the `application` layer
//! outside of tests.
//!
//! # Sub-modules
//!
//! - **`host`** – `AccessibilityHost` implementations.  The `SimulatedHost`
//!   keeps a UI tree in memory, records every effect, and counts node handles.
//!
//! - **`shell`** – `ProcessRunner`, which starts `input keyevent` on a
//!   background thread for the shell fallback.
//!
//! - **`storage`** – TOML configuration with defaults for every field.
//!
//! - **`script`** – Parses `key` / `text` / `action` / `remote` lines for
//!   the replay console.

pub mod host;
pub mod script;
pub mod shell;
pub mod storage;
