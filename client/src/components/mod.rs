//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! One component per page section plus shared primitives (`icon`, `reveal`).
//! Components read the static `content` records and own any local `state`
//! they need.

pub mod about;
pub mod contact_section;
pub mod feature_grid;
pub mod gallery_carousel;
pub mod hero;
pub mod hs_code_table;
pub mod icon;
pub mod product_grid;
pub mod reveal;
pub mod site_footer;
pub mod site_header;
