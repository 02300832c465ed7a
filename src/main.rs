use std::{env, net::SocketAddr, sync::Arc};

use wordcloud_api::{
    app,
    app::env::Envy,
    wordclouds::renderer::{ImageRenderer, WordcloudRenderer},
    AppState,
};

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    let renderer = ImageRenderer::new().expect("failed to load embedded font");

    let state = AppState {
        envy: Arc::new(envy),
        renderer: Arc::new(renderer) as Arc<dyn WordcloudRenderer>,
    };

    // app
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app(state).into_make_service())
        .await
        .unwrap();
}
