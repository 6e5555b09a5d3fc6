//! kiosk-input-engine library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does the engine do? (for beginners)
//!
//! A kiosk runs one third-party app full-screen.  Operators drive it
//! remotely by sending commands: "press down", "type this", "go back".  The
//! app was never written to accept such commands, so the engine tries, in
//! order, every mechanism the OS offers until one works:
//!
//! 1. System-wide actions (back, home, recents, media toggle).
//! 2. The OS's cooperative input channel, when a field is focused.
//! 3. Moving focus and clicking through the accessibility tree, scrolling
//!    lists, or playing a touch gesture.
//! 4. Rewriting the focused text field's contents.
//! 5. Spawning the platform's `input keyevent` tool.
//!
//! Callers never see which one worked, only whether one did.
//!
//! # Entry points
//!
//! ```ignore
//! use kiosk_input_engine::application::session::registry;
//!
//! // When the OS grants the capability:
//! registry().install(host, dispatcher)?;
//!
//! // From any thread:
//! registry().send_key(KeyCode::DPAD_DOWN, Modifiers::NONE);
//! registry().send_text("news");
//! registry().perform_action(ActionKind::Back);
//! ```

/// Application layer: host seam, UI tree, strategies, dispatcher, session.
pub mod application;

/// Infrastructure layer: simulated host, process runner, config, scripts.
pub mod infrastructure;
