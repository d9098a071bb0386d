//! Argument specification model: the persisted document and its entries.

pub mod document;
pub mod entry;

pub use document::SpecDocument;
pub use entry::{ArgumentEntry, Description};
