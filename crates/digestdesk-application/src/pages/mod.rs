//! Page controllers.
//!
//! Each page owns the handlers of one screen: it takes validated input,
//! calls the stores, and returns a result or a [`DeskError`]. Presenting
//! errors and asking for confirmation is left to the front-end.
//!
//! [`DeskError`]: digestdesk_core::DeskError

mod digest_page;
mod favorites_page;
mod list_page;
mod query;

pub use digest_page::{DigestPage, SaveOutcome};
pub use favorites_page::{FavoritesPage, NO_FAVORITES_MESSAGE};
pub use list_page::ListPage;
pub use query::DigestQuery;

use digestdesk_core::DeskError;
use digestdesk_core::error::Result;

use crate::favorites_store::FavoritesStore;

pub(crate) const NO_CREDENTIAL_MESSAGE: &str =
    "Please set your GitHub token first (digestdesk token set)";

/// Fails with `Unauthenticated` unless the store could persist a change.
/// Runs before any mutation so that no network call is made without one.
pub(crate) async fn require_credential(favorites: &FavoritesStore) -> Result<()> {
    if favorites.can_persist().await {
        Ok(())
    } else {
        Err(DeskError::unauthenticated(NO_CREDENTIAL_MESSAGE))
    }
}
