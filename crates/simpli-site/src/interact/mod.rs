//! Interaction polish: nav shadow, mobile menu, scroll reveal, and
//! same-page anchor scrolling.
//!
//! Each utility is stateless apart from DOM classes (the reveal tracker
//! only counts) and safe to run again on every event.

pub mod anchor;
pub mod mobile_menu;
pub mod nav_scroll;
pub mod reveal;

pub use anchor::AnchorAction;
pub use reveal::{RevealOptions, RevealTracker};
