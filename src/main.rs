use chrono::Local;
use habit_ledger::{load_preferences, resolve_prefs_path, router, AppState, MonthCalendar};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let prefs_path = resolve_prefs_path()?;
    if let Some(parent) = prefs_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let prefs = load_preferences(&prefs_path).await;
    info!(habit = %prefs.habit_name, path = %prefs_path.display(), "preferences loaded");

    let calendar = MonthCalendar::for_date(Local::now().date_naive());
    let app = router(AppState::new(prefs_path, prefs, &calendar));

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
