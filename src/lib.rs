use std::sync::Arc;

#[macro_use]
extern crate lazy_static;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{app::env::Envy, wordclouds::renderer::WordcloudRenderer};

pub mod app;
pub mod wordclouds;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub renderer: Arc<dyn WordcloudRenderer>,
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(app::controller::get_root))
        .route("/health", get(app::controller::health_check))
        .route(
            "/generate-wordcloud",
            post(wordclouds::controller::generate_wordcloud),
        )
        .layer(cors)
        .with_state(state)
}
