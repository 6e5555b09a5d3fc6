//! # kiosk-input-core
//!
//! Shared vocabulary for the kiosk input injection engine: the command types
//! callers send, the key code tables, and the pure geometry the spatial
//! navigator runs on.
//!
//! This crate has zero dependencies on OS APIs, UI trees, or threads.
//!
//! # Architecture overview (for beginners)
//!
//! A kiosk device shows one foreground application full-screen.  Operators
//! still need to drive it remotely: press "down" on a TV-style remote, type a
//! search term, go back.  The engine (in `kiosk-input-engine`) turns those
//! requests into whatever the foreground app will accept.  This crate defines
//! the shared pieces:
//!
//! - **`command`** – What a caller can ask for: a key press, literal text, or
//!   a named action, plus the remote-button vocabulary of the HTTP API.
//!
//! - **`keymap`** – Raw OS key codes and the virtual keyboard map that turns a
//!   key into the character it types.
//!
//! - **`domain`** – Geometry, element flags, capability floors, global action
//!   tables, and the directional scoring used for D-pad navigation.

pub mod command;
pub mod domain;
pub mod keymap;

// Re-export the most-used types at the crate root so callers can write
// `kiosk_input_core::Command` instead of `kiosk_input_core::command::Command`.
pub use command::{ActionKind, Command, Modifiers, RemoteButton};
pub use domain::capability::CapabilityLevel;
pub use domain::geometry::{Direction, DisplaySize, Point, Rect};
pub use domain::node::{FocusKind, NodeAction, NodeFlags, NodeInfo};
pub use domain::system::GlobalAction;
pub use keymap::KeyCode;
