//! Drafts, their picks and traded picks.

mod api;
mod model;

pub use model::{Draft, DraftMetadata, DraftPick, DraftPickMetadata, DraftSettings};
