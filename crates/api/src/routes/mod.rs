pub mod entities;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /entities                                   entity catalog
/// /entities/{entity}                          list (GET), create (POST)
/// /entities/{entity}/schema                   field descriptors
/// /entities/{entity}/options                  reference options
/// /entities/{entity}/new                      add form
/// /entities/{entity}/{id}                     update (PUT)
/// /entities/{entity}/{id}/edit                update form
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Master-data screens.
        .nest("/entities", entities::router())
}
