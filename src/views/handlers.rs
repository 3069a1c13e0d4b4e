use super::{CommandRequest, CreatedView, OpenRequest, ViewError};
use crate::{
    AppState,
    detail::{DetailView, RenderedView, ViewCommand},
    locale::Locale,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

fn request_locale(app_state: &AppState, lang: Option<&str>) -> Locale {
    let default = app_state.config.default_locale();
    lang.map(|lang| Locale::from_language(lang, default))
        .unwrap_or(default)
}

/// Mounts a new detail view and loads its first record before answering.
pub async fn create_view_handler(
    State(app_state): State<AppState>,
    Json(request): Json<OpenRequest>,
) -> impl IntoResponse {
    let locale = request_locale(&app_state, request.lang.as_deref());
    let view = DetailView::new(
        app_state.source.clone(),
        app_state.config.asset_host(),
        app_state.keyboard.clone(),
    );

    view.load(request.id.as_deref(), locale).await;
    let view_id = app_state.views.insert(view).await;
    info!("Mounted detail view {} for {:?}", view_id, request.id);

    (StatusCode::CREATED, Json(CreatedView { view_id }))
}

pub async fn get_view_handler(
    State(app_state): State<AppState>,
    Path(view_id): Path<String>,
) -> Result<Json<RenderedView>, ViewError> {
    let view = app_state.views.get(&view_id).await?;
    Ok(Json(view.render().await))
}

/// Route change inside an existing view.
pub async fn navigate_handler(
    State(app_state): State<AppState>,
    Path(view_id): Path<String>,
    Json(request): Json<OpenRequest>,
) -> Result<Json<RenderedView>, ViewError> {
    let view = app_state.views.get(&view_id).await?;
    let locale = request_locale(&app_state, request.lang.as_deref());

    view.load(request.id.as_deref(), locale).await;
    Ok(Json(view.render().await))
}

pub async fn command_handler(
    State(app_state): State<AppState>,
    Path(view_id): Path<String>,
    Json(request): Json<CommandRequest>,
) -> Result<Json<RenderedView>, ViewError> {
    let view = app_state.views.get(&view_id).await?;

    match ViewCommand::from(request) {
        ViewCommand::Retry => {
            view.retry().await;
        }
        command => view.command(command).await,
    }

    Ok(Json(view.render().await))
}

pub async fn delete_view_handler(
    State(app_state): State<AppState>,
    Path(view_id): Path<String>,
) -> Result<StatusCode, ViewError> {
    let view = app_state.views.remove(&view_id).await?;
    view.unmount().await;
    info!("Unmounted detail view {}", view_id);
    Ok(StatusCode::NO_CONTENT)
}
