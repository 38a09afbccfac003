// src/presentation/http/controllers/editor.rs
//! Endpoints driving an article editing session. Each request mutates the
//! session addressed by `{token}` and answers with its fresh snapshot.
use crate::application::{
    commands::articles::OpenEditorCommand,
    dto::{
        ArticleDto, AuthenticatedUser, CategoryDto, Confirmation, EditorSessionDto,
        ValidationErrorsDto,
    },
    editor::{CategoryOutcome, FieldPath, FieldValue, SaveOutcome},
};
use crate::domain::media::ImageUpload;
use crate::presentation::http::error::{
    ErrorResponse, HttpError, HttpResult, IntoHttpResult, unprocessable,
};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::sessions::SharedSession;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Multipart field carrying the uploaded image.
const IMAGE_FIELD: &str = "image";

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OpenSessionRequest {
    /// Existing article to edit; omit to create a new one.
    #[serde(default)]
    pub article_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetFieldRequest {
    /// Field path such as `title` or `new_category.name`.
    pub path: String,
    /// String, integer or null.
    #[schema(value_type = Object)]
    pub value: serde_json::Value,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryCreatedResponse {
    pub category: CategoryDto,
    pub session: EditorSessionDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleSavedResponse {
    pub confirmation: Confirmation,
    pub article: ArticleDto,
}

async fn load_session(
    state: &HttpState,
    user: &AuthenticatedUser,
    token: Uuid,
) -> HttpResult<SharedSession> {
    state
        .sessions
        .get(token, user.id)
        .await
        .ok_or_else(|| HttpError::new(StatusCode::NOT_FOUND, "editing session not found"))
}

fn parse_path(raw: &str) -> HttpResult<FieldPath> {
    raw.parse::<FieldPath>()
        .map_err(|err| HttpError::new(StatusCode::BAD_REQUEST, err.to_string()))
}

fn field_value(path: FieldPath, value: serde_json::Value) -> HttpResult<FieldValue> {
    use serde_json::Value;

    match value {
        Value::Null => Ok(FieldValue::Null),
        Value::String(text) => Ok(FieldValue::Text(text)),
        Value::Number(number) => number.as_i64().map(FieldValue::Integer).ok_or_else(|| {
            HttpError::new(
                StatusCode::BAD_REQUEST,
                format!("invalid value for {path}: expected an integer"),
            )
        }),
        _ => Err(HttpError::new(
            StatusCode::BAD_REQUEST,
            format!("invalid value for {path}: expected a string, integer or null"),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/editor/sessions",
    request_body = OpenSessionRequest,
    responses(
        (status = 201, description = "Session opened.", body = EditorSessionDto),
        (status = 401, description = "Missing x-user-id header.", body = ErrorResponse),
        (status = 404, description = "Article not found.", body = ErrorResponse)
    ),
    tag = "Editor"
)]
pub async fn open_session(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    payload: Option<Json<OpenSessionRequest>>,
) -> HttpResult<(StatusCode, Json<EditorSessionDto>)> {
    let Json(payload) = payload.unwrap_or_default();
    let session = state
        .services
        .article_commands
        .open_editor(
            &user,
            OpenEditorCommand {
                article_id: payload.article_id,
            },
        )
        .await
        .into_http()?;

    let (token, session) = state.sessions.insert(session).await;
    let session = session.lock().await;
    Ok((
        StatusCode::CREATED,
        Json(EditorSessionDto::from_session(token.to_string(), &session)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/editor/sessions/{token}",
    params(("token" = String, Path, description = "Session token")),
    responses(
        (status = 200, description = "Current session state.", body = EditorSessionDto),
        (status = 404, description = "Unknown session.", body = ErrorResponse)
    ),
    tag = "Editor"
)]
pub async fn get_session(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(token): Path<Uuid>,
) -> HttpResult<Json<EditorSessionDto>> {
    let session = load_session(&state, &user, token).await?;
    let session = session.lock().await;
    Ok(Json(EditorSessionDto::from_session(token.to_string(), &session)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/editor/sessions/{token}",
    params(("token" = String, Path, description = "Session token")),
    responses(
        (status = 204, description = "Session discarded; unsaved changes are dropped."),
        (status = 404, description = "Unknown session.", body = ErrorResponse)
    ),
    tag = "Editor"
)]
pub async fn discard_session(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(token): Path<Uuid>,
) -> HttpResult<StatusCode> {
    load_session(&state, &user, token).await?;
    state.sessions.remove(token).await;
    tracing::debug!(%token, actor = %user.id, "editing session discarded");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch,
    path = "/api/v1/editor/sessions/{token}/fields",
    params(("token" = String, Path, description = "Session token")),
    request_body = SetFieldRequest,
    responses(
        (status = 200, description = "Field updated and re-validated.", body = EditorSessionDto),
        (status = 400, description = "Unknown path or wrong value type.", body = ErrorResponse),
        (status = 404, description = "Unknown session.", body = ErrorResponse)
    ),
    tag = "Editor"
)]
pub async fn set_field(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(token): Path<Uuid>,
    Json(payload): Json<SetFieldRequest>,
) -> HttpResult<Json<EditorSessionDto>> {
    let path = parse_path(&payload.path)?;
    let value = field_value(path, payload.value)?;

    let session = load_session(&state, &user, token).await?;
    let mut session = session.lock().await;
    session.set_field(path, value).await?;
    Ok(Json(EditorSessionDto::from_session(token.to_string(), &session)))
}

#[utoipa::path(
    put,
    path = "/api/v1/editor/sessions/{token}/image",
    params(("token" = String, Path, description = "Session token")),
    request_body(content_type = "multipart/form-data", description = "File in the `image` field"),
    responses(
        (status = 200, description = "Upload staged and validated.", body = EditorSessionDto),
        (status = 400, description = "Missing or unreadable upload.", body = ErrorResponse),
        (status = 404, description = "Unknown session.", body = ErrorResponse)
    ),
    tag = "Editor"
)]
pub async fn upload_image(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(token): Path<Uuid>,
    mut multipart: Multipart,
) -> HttpResult<Json<EditorSessionDto>> {
    let bad_upload = |err: axum::extract::multipart::MultipartError| {
        HttpError::new(StatusCode::BAD_REQUEST, format!("invalid upload: {err}"))
    };

    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(bad_upload)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(bad_upload)?;
        upload = Some(ImageUpload::new(file_name, content_type, bytes));
        break;
    }
    let upload = upload.ok_or_else(|| {
        HttpError::new(StatusCode::BAD_REQUEST, "missing multipart field `image`")
    })?;

    let session = load_session(&state, &user, token).await?;
    let mut session = session.lock().await;
    session
        .set_field(FieldPath::Image, FieldValue::Image(upload))
        .await?;
    Ok(Json(EditorSessionDto::from_session(token.to_string(), &session)))
}

#[utoipa::path(
    post,
    path = "/api/v1/editor/sessions/{token}/validate/{path}",
    params(
        ("token" = String, Path, description = "Session token"),
        ("path" = String, Path, description = "Field path")
    ),
    responses(
        (status = 200, description = "Field re-validated.", body = EditorSessionDto),
        (status = 400, description = "Unknown field path.", body = ErrorResponse)
    ),
    tag = "Editor"
)]
pub async fn validate_field(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((token, raw_path)): Path<(Uuid, String)>,
) -> HttpResult<Json<EditorSessionDto>> {
    let path = parse_path(&raw_path)?;
    let session = load_session(&state, &user, token).await?;
    let mut session = session.lock().await;
    session.validate_field(path).await?;
    Ok(Json(EditorSessionDto::from_session(token.to_string(), &session)))
}

#[utoipa::path(
    post,
    path = "/api/v1/editor/sessions/{token}/category",
    params(("token" = String, Path, description = "Session token")),
    responses(
        (status = 200, description = "Category form opened.", body = EditorSessionDto)
    ),
    tag = "Editor"
)]
pub async fn open_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(token): Path<Uuid>,
) -> HttpResult<Json<EditorSessionDto>> {
    let session = load_session(&state, &user, token).await?;
    let mut session = session.lock().await;
    session.open_category_subflow()?;
    Ok(Json(EditorSessionDto::from_session(token.to_string(), &session)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/editor/sessions/{token}/category",
    params(("token" = String, Path, description = "Session token")),
    responses(
        (status = 200, description = "Category form discarded.", body = EditorSessionDto)
    ),
    tag = "Editor"
)]
pub async fn close_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(token): Path<Uuid>,
) -> HttpResult<Json<EditorSessionDto>> {
    let session = load_session(&state, &user, token).await?;
    let mut session = session.lock().await;
    session.close_category_subflow()?;
    Ok(Json(EditorSessionDto::from_session(token.to_string(), &session)))
}

#[utoipa::path(
    post,
    path = "/api/v1/editor/sessions/{token}/category/save",
    params(("token" = String, Path, description = "Session token")),
    responses(
        (status = 201, description = "Category created and selected.", body = CategoryCreatedResponse),
        (status = 409, description = "Category form is not open.", body = ErrorResponse),
        (status = 422, description = "Category form is invalid.", body = ValidationErrorsDto)
    ),
    tag = "Editor"
)]
pub async fn save_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(token): Path<Uuid>,
) -> HttpResult<Response> {
    let session = load_session(&state, &user, token).await?;
    let mut session = session.lock().await;

    match session.save_category_subflow().await? {
        CategoryOutcome::Created(category) => {
            let body = CategoryCreatedResponse {
                category: CategoryDto::from(category),
                session: EditorSessionDto::from_session(token.to_string(), &session),
            };
            Ok((StatusCode::CREATED, Json(body)).into_response())
        }
        CategoryOutcome::Invalid(errors) => Ok(unprocessable(&errors)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/editor/sessions/{token}/save",
    params(("token" = String, Path, description = "Session token")),
    responses(
        (status = 200, description = "Article saved; the session is closed.", body = ArticleSavedResponse),
        (status = 409, description = "Session already committed.", body = ErrorResponse),
        (status = 422, description = "Form is invalid.", body = ValidationErrorsDto),
        (status = 503, description = "Storage unavailable; the session stays open.", body = ErrorResponse)
    ),
    tag = "Editor"
)]
pub async fn save(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(token): Path<Uuid>,
) -> HttpResult<Response> {
    let session = load_session(&state, &user, token).await?;
    let mut session = session.lock().await;

    match session.save().await? {
        SaveOutcome::Saved {
            article,
            confirmation,
        } => {
            state.sessions.remove(token).await;
            let images = state.services.images();
            let body = ArticleSavedResponse {
                confirmation,
                article: ArticleDto::from_article(*article, images.as_ref()),
            };
            Ok(Json(body).into_response())
        }
        SaveOutcome::Invalid(errors) => Ok(unprocessable(&errors)),
    }
}
