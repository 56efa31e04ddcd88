//! User accounts and the leagues/drafts a user belongs to.

mod api;
mod model;

pub use model::User;
