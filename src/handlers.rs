use crate::errors::AppError;
use crate::models::{
    is_color_token, EntriesResponse, Mood, MoodRequest, ResetResponse, UpsertResponse, ViewResponse,
};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tokio::task::block_in_place;

/// Form posts land here with `unsaved` set when the change was not kept.
const UNSAVED_REDIRECT: &str = "/?unsaved=1";

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    #[serde(default)]
    pub unsaved: Option<String>,
}

pub async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Html<String> {
    let tracker = state.tracker.lock().await;
    let notice = query
        .unsaved
        .is_some()
        .then_some("Your last change could not be saved.");
    Html(render_index(&tracker.view(today()), notice))
}

pub async fn get_view(State(state): State<AppState>) -> Json<ViewResponse> {
    let tracker = state.tracker.lock().await;
    Json(tracker.view(today()))
}

pub async fn get_entries(State(state): State<AppState>) -> Json<EntriesResponse> {
    let tracker = state.tracker.lock().await;
    Json(EntriesResponse {
        entries: tracker.log().entries().to_vec(),
    })
}

pub async fn log_mood(
    State(state): State<AppState>,
    Json(payload): Json<MoodRequest>,
) -> Result<Json<UpsertResponse>, AppError> {
    let mood: Mood = payload.mood.trim().parse()?;
    let color = match payload.color.map(|color| color.trim().to_string()) {
        Some(color) if color.is_empty() => mood.color().to_string(),
        Some(color) if is_color_token(&color) => color,
        Some(color) => return Err(AppError::bad_request(format!("invalid color '{color}'"))),
        None => mood.color().to_string(),
    };

    let mut tracker = state.tracker.lock().await;
    // Storage writes block.
    let saved = block_in_place(|| tracker.upsert(mood, color, today()));

    Ok(Json(UpsertResponse {
        entry: saved.value,
        warning: saved.warning.map(|warning| warning.to_string()),
    }))
}

pub async fn log_mood_form(
    State(state): State<AppState>,
    Path(mood): Path<String>,
) -> Result<Redirect, AppError> {
    let mood: Mood = mood.parse()?;
    let mut tracker = state.tracker.lock().await;
    let saved = block_in_place(|| tracker.upsert(mood, mood.color(), today()));
    Ok(redirect_home(saved.warning.is_some()))
}

pub async fn reset(State(state): State<AppState>) -> Json<ResetResponse> {
    let date = today();
    let mut tracker = state.tracker.lock().await;
    let saved = block_in_place(|| tracker.reset());

    Json(ResetResponse {
        view: tracker.view(date),
        warning: saved.warning.map(|warning| warning.to_string()),
    })
}

pub async fn reset_form(State(state): State<AppState>) -> Redirect {
    let mut tracker = state.tracker.lock().await;
    let saved = block_in_place(|| tracker.reset());
    redirect_home(saved.warning.is_some())
}

fn redirect_home(unsaved: bool) -> Redirect {
    if unsaved {
        Redirect::to(UNSAVED_REDIRECT)
    } else {
        Redirect::to("/")
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
