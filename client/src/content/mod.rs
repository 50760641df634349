//! Static site content.
//!
//! DESIGN
//! ======
//! Every list the page renders is a `&'static` slice fixed at build time, so
//! components only borrow records and never own copies of the copy text.

pub mod catalog;
pub mod company;
pub mod gallery;
pub mod offices;
