// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, categories, editor},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, patch, post, put},
};
use std::{path::PathBuf, time::Duration};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Uploads are capped at 2 MiB by validation; leave headroom for the
/// multipart envelope so oversize files reach the validator.
const IMAGE_BODY_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    pub media_root: PathBuf,
    pub media_mount: String,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            media_root: PathBuf::from("./storage/public"),
            media_mount: "/media".into(),
        }
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState, options: RouterOptions) -> Router {
    let editor_routes = Router::new()
        .route("/", post(editor::open_session))
        .route(
            "/{token}",
            get(editor::get_session).delete(editor::discard_session),
        )
        .route("/{token}/fields", patch(editor::set_field))
        .route(
            "/{token}/image",
            put(editor::upload_image).layer(DefaultBodyLimit::max(IMAGE_BODY_LIMIT)),
        )
        .route("/{token}/validate/{path}", post(editor::validate_field))
        .route(
            "/{token}/category",
            post(editor::open_category).delete(editor::close_category),
        )
        .route("/{token}/category/save", post(editor::save_category))
        .route("/{token}/save", post(editor::save));

    let mount = format!("/{}", options.media_mount.trim_matches('/'));
    let media = ServeDir::new(options.media_root);

    let router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/articles", get(articles::list_articles))
        .route(
            "/api/v1/articles/{article}",
            get(articles::get_article_by_slug).delete(articles::delete_article),
        )
        .route("/api/v1/categories", get(categories::list_categories))
        .nest("/api/v1/editor/sessions", editor_routes);
    let router = if mount == "/" {
        router.fallback_service(media)
    } else {
        router.nest_service(&mount, media)
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
