use crate::app_context::AppContext;
use crate::cli::ServeArgs;
use crate::resize::codec::ImageCodec;
use crate::{health, http::cors, http::middleware, resize, ui};
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};

pub fn new<C>(args: &ServeArgs, app_context: AppContext<C>) -> Router
where
    C: ImageCodec,
{
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let api_routes = Router::new()
        .route(
            "/resize",
            post(resize::handlers::resize::<C>).fallback(resize::handlers::method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(args.max_upload_size));
    let ui_routes = Router::new()
        .route(
            "/",
            get(ui::handlers::index).post(ui::handlers::submit::<C>),
        )
        .route("/static/ui.js", get(ui::handlers::script))
        .layer(DefaultBodyLimit::max(args.max_upload_size));

    Router::new()
        .merge(ui_routes)
        .nest("/health", health_routes)
        .nest("/api", api_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(middleware::tracing))
}
