//! Helper functions shared by the page generators

mod date;
mod list;

pub use date::*;
pub use list::*;
