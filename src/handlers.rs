use crate::calendar::MonthCalendar;
use crate::errors::AppError;
use crate::events::{toggle_with_events, LedgerEvent};
use crate::ledger::current_streak;
use crate::models::{
    BadgesResponse, CalendarResponse, Goals, Preferences, PreferencesPatch, StatsResponse,
    SummaryResponse, ToggleRequest, ToggleResponse,
};
use crate::state::AppState;
use crate::stats::{build_badges, build_calendar, build_stats, build_summary};
use crate::storage::persist_preferences;
use axum::{extract::State, Json};
use chrono::Local;
use tracing::{error, info};

pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, AppError> {
    let calendar = today_calendar();
    let prefs = state.preferences().await;
    let ledger = state.ledger_for(&calendar).await;
    Ok(Json(build_summary(&ledger.days, &prefs, &calendar)))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let calendar = today_calendar();
    let ledger = state.ledger_for(&calendar).await;
    Ok(Json(build_stats(&ledger.days, &calendar)))
}

pub async fn get_badges(State(state): State<AppState>) -> Result<Json<BadgesResponse>, AppError> {
    let calendar = today_calendar();
    let prefs = state.preferences().await;
    let ledger = state.ledger_for(&calendar).await;
    Ok(Json(build_badges(&ledger.days, &prefs, &calendar)))
}

pub async fn get_calendar(State(state): State<AppState>) -> Result<Json<CalendarResponse>, AppError> {
    let calendar = today_calendar();
    let ledger = state.ledger_for(&calendar).await;
    Ok(Json(build_calendar(&ledger.days, &calendar)))
}

pub async fn toggle_day(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let calendar = today_calendar();
    if !calendar.is_in_month(payload.day) {
        return Err(AppError::bad_request(format!(
            "day must be between 1 and {}",
            calendar.days_in_month
        )));
    }

    let goals = state.preferences().await.goals;
    let mut ledger = state.ledger_for(&calendar).await;
    let outcome = toggle_with_events(payload.day, &ledger.days, &goals, &calendar);
    ledger.days = outcome.days;

    for event in &outcome.events {
        publish(event);
    }

    Ok(Json(ToggleResponse {
        day: payload.day,
        completed: ledger.days.contains(&payload.day),
        changed: outcome.changed,
        events: outcome.events,
        current_streak: current_streak(&ledger.days, calendar.today),
    }))
}

pub async fn get_goals(State(state): State<AppState>) -> Result<Json<Goals>, AppError> {
    Ok(Json(state.preferences().await.goals))
}

pub async fn put_goals(
    State(state): State<AppState>,
    Json(goals): Json<Goals>,
) -> Result<Json<Goals>, AppError> {
    if !goals.is_valid() {
        return Err(AppError::bad_request("goals must be at least 1"));
    }

    update_preferences(&state, |prefs| prefs.goals = goals).await?;
    info!(
        weekly_goal = goals.weekly_goal,
        monthly_goal = goals.monthly_goal,
        "goals updated"
    );
    Ok(Json(goals))
}

pub async fn get_preferences(State(state): State<AppState>) -> Result<Json<Preferences>, AppError> {
    Ok(Json(state.preferences().await))
}

pub async fn patch_preferences(
    State(state): State<AppState>,
    Json(patch): Json<PreferencesPatch>,
) -> Result<Json<Preferences>, AppError> {
    let habit_name = match patch.habit_name {
        Some(name) if name.trim().is_empty() => {
            return Err(AppError::bad_request("habit_name must not be empty"));
        }
        other => other.map(|name| name.trim().to_string()),
    };
    let email = match patch.email.map(|email| email.trim().to_string()) {
        Some(email) if email.is_empty() => Some(None),
        Some(email) if !email.contains('@') => {
            return Err(AppError::bad_request("email must contain '@'"));
        }
        other => other.map(Some),
    };

    let prefs = update_preferences(&state, |prefs| {
        if let Some(name) = habit_name {
            prefs.habit_name = name;
        }
        if let Some(email) = email {
            prefs.email = email;
        }
        if let Some(granted) = patch.notifications_granted {
            prefs.notifications_granted = granted;
        }
    })
    .await?;

    Ok(Json(prefs))
}

async fn update_preferences(
    state: &AppState,
    apply: impl FnOnce(&mut Preferences),
) -> Result<Preferences, AppError> {
    let mut prefs = state.prefs.lock().await;
    let mut updated = prefs.clone();
    apply(&mut updated);

    if let Err(err) = persist_preferences(&state.prefs_path, &updated).await {
        error!("failed to persist preferences: {err}");
        return Err(err);
    }

    *prefs = updated.clone();
    Ok(updated)
}

fn publish(event: &LedgerEvent) {
    match event {
        LedgerEvent::DayCompleted { day } => info!(day, "day completed"),
        LedgerEvent::DayCleared { day } => info!(day, "day cleared"),
        LedgerEvent::BadgeUnlocked { id } => info!(badge = %id, "badge unlocked"),
    }
}

fn today_calendar() -> MonthCalendar {
    MonthCalendar::for_date(Local::now().date_naive())
}
