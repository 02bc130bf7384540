//! Route definitions for the master-data screens.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{catalog, forms, listing, reference, submit};
use crate::state::AppState;

/// Entity routes mounted at `/entities`.
///
/// ```text
/// GET    /                       -> list_entities
/// GET    /{entity}               -> list_records
/// POST   /{entity}               -> create_record
/// GET    /{entity}/schema        -> get_schema
/// GET    /{entity}/options       -> get_options
/// GET    /{entity}/new           -> new_form
/// PUT    /{entity}/{id}          -> update_record
/// GET    /{entity}/{id}/edit     -> edit_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_entities))
        .route(
            "/{entity}",
            get(listing::list_records).post(submit::create_record),
        )
        .route("/{entity}/schema", get(catalog::get_schema))
        .route("/{entity}/options", get(reference::get_options))
        .route("/{entity}/new", get(forms::new_form))
        .route("/{entity}/{id}", put(submit::update_record))
        .route("/{entity}/{id}/edit", get(forms::edit_form))
}
