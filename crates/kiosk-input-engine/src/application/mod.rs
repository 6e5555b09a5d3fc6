//! Application layer of the injection engine.
//!
//! # What lives here?
//!
//! - **`host`** – The [`AccessibilityHost`](host::AccessibilityHost) trait:
//!   the only way the engine reaches the OS.  Implementations live in the
//!   infrastructure layer.
//!
//! - **`ui_tree`** – Scoped handles and one-shot tree snapshots over the
//!   foreground app's UI hierarchy.
//!
//! - **`strategy`** / **`strategies`** – The probing interface and the
//!   concrete ways of delivering a command.
//!
//! - **`dispatcher`** – Runs a command down the ordered strategy chain.
//!
//! - **`ui_thread`** – The single thread all UI work is marshalled onto.
//!
//! - **`session`** – The process-wide registry callers go through.

pub mod dispatcher;
pub mod host;
pub mod session;
pub mod strategies;
pub mod strategy;
pub mod ui_thread;
pub mod ui_tree;
