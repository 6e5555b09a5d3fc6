//! Domain entities for the kiosk input engine.
//!
//! This module contains pure logic with no OS dependencies.
//!
//! # What is "domain" here? (for beginners)
//!
//! The engine ultimately drives a live operating system: it reads another
//! app's UI tree, moves focus, plays back touch gestures.  None of that lives
//! here.  This layer only holds the vocabulary and the arithmetic:
//!
//! - what a rectangle or a direction is (`geometry`),
//! - what an element looks like and what can be done to it (`node`),
//! - which OS features exist at which capability level (`capability`),
//! - which keys map to system-wide actions (`system`),
//! - how to pick the element "to the left of" another one (`spatial`).
//!
//! Because nothing here touches the OS, all of it can be unit-tested on any
//! machine.

pub mod capability;
pub mod geometry;
pub mod node;
pub mod spatial;
pub mod system;
