//! Domain entities - the core business objects.

mod category;
mod post;

pub use category::{CATEGORIES, DEFAULT_CATEGORY, is_known_category};
pub use post::{
    DEFAULT_AUTHOR, DEFAULT_TITLE, Post, PostChanges, PostDraft, newest_first,
};
