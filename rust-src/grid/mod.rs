//! The grid editor core.

mod dataset;
mod editor;
mod error;

pub use dataset::{Dataset, TransposedRow};
pub use editor::{GridEditor, RowKey, ViewMode};
pub use error::GridError;
