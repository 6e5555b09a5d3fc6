//! Implementations of [`AccessibilityHost`](crate::application::host::AccessibilityHost).
//!
//! Only the simulated host ships in this crate.  Device builds link a
//! platform host that forwards each trait method to the OS accessibility
//! service; it follows the same handle rules the simulated host enforces.

pub mod simulated;
