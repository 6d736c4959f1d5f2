//! Favorites domain models.
//!
//! The favorites document is the single mutable JSON file in the remote
//! repository that holds the user's saved papers and notes.

mod model;

pub use model::{
    FavoritePaper, FavoritesDocument, MAX_MESSAGE_TITLE_CHARS, add_message, remove_message,
    update_note_message,
};
