use crate::cli::ServeArgs;
use http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

pub fn layer(args: &ServeArgs) -> CorsLayer {
    let origins = args
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin `{}`.", origin);
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([
            header::USER_AGENT,
            header::REFERER,
            header::ORIGIN,
            header::ACCESS_CONTROL_REQUEST_METHOD,
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("sec-fetch-mode"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .expose_headers([header::CONTENT_DISPOSITION])
}
