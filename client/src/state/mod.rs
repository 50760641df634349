//! Component-local UI state.
//!
//! DESIGN
//! ======
//! Each model is a plain struct with explicit mutators. Components wrap them
//! in `RwSignal`s they own; nothing here is shared across the page.

pub mod carousel;
pub mod contact;
pub mod menu;
