use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

pub mod affirmations;
pub mod categories;
pub mod health;
pub mod inspirations;
pub mod journal;
pub mod listing;
pub mod quotes;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .merge(health::router())
        .merge(categories::router())
        .merge(quotes::router())
        .merge(affirmations::router())
        .merge(journal::router())
        .merge(inspirations::router());

    Router::new()
        .nest("/api", api)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
