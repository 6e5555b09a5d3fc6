//! The concrete injection strategies, in the order the dispatcher tries them.
//!
//! - **`global_action`** – back/home/recents/media through the OS.
//! - **`direct_input`** – the cooperative key/text channel.
//! - **`spatial_navigator`** – D-pad focus moves and Select through the UI
//!   tree, with scroll and gesture fallbacks.
//! - **`text_field`** – typing by rewriting the focused field's text.
//! - **`shell_fallback`** – spawning `input keyevent`.
//!
//! `gesture` is not a strategy of its own; the navigator uses it.

pub mod direct_input;
pub mod gesture;
pub mod global_action;
pub mod shell_fallback;
pub mod spatial_navigator;
pub mod text_field;

pub use direct_input::DirectInputStrategy;
pub use gesture::{GestureSynthesizer, GestureTiming};
pub use global_action::GlobalActionStrategy;
pub use shell_fallback::{CommandRunner, ShellFallbackStrategy};
pub use spatial_navigator::SpatialNavigator;
pub use text_field::TextFieldEditor;
