// tests/support/helpers.rs
use std::sync::Arc;

use axum::body;
use axum::http::StatusCode;
use serde_json::Value;

use article_desk::application::editor::{ArticleEditSession, EditorDependencies};
use article_desk::application::services::ApplicationServices;
use article_desk::domain::user::UserId;
use article_desk::infrastructure::util::DefaultSlugGenerator;
use article_desk::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};

use super::mocks::{FixedClock, InMemoryArticles, InMemoryCategories, InMemoryImages};

pub const ACTOR_ID: i64 = 1;

/// In-memory stores plus the dependency bundle wired to them.
pub struct Harness {
    pub articles: Arc<InMemoryArticles>,
    pub categories: Arc<InMemoryCategories>,
    pub images: Arc<InMemoryImages>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            articles: Arc::new(InMemoryArticles::new()),
            categories: Arc::new(InMemoryCategories::new()),
            images: Arc::new(InMemoryImages::new()),
        }
    }

    pub fn deps(&self) -> EditorDependencies {
        EditorDependencies {
            article_read: self.articles.clone(),
            article_write: self.articles.clone(),
            categories: self.categories.clone(),
            images: self.images.clone(),
            slugger: Arc::new(DefaultSlugGenerator),
            clock: Arc::new(FixedClock),
        }
    }

    pub fn actor(&self) -> UserId {
        UserId::new(ACTOR_ID).unwrap()
    }

    pub fn create_session(&self) -> ArticleEditSession {
        ArticleEditSession::open(self.deps(), self.actor(), None)
    }

    pub fn edit_session(&self, article: &article_desk::domain::article::Article) -> ArticleEditSession {
        ArticleEditSession::open(self.deps(), self.actor(), Some(article))
    }

    pub fn services(&self) -> ApplicationServices {
        ApplicationServices::new(self.deps())
    }

    pub fn http_state(&self) -> HttpState {
        HttpState::new(Arc::new(self.services()))
    }

    pub fn router(&self) -> axum::Router {
        router_for(self.http_state())
    }
}

/// Router over a caller-held state, so tests can inspect the session registry.
pub fn router_for(state: HttpState) -> axum::Router {
    build_router(state, RouterOptions::default())
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let (_, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
