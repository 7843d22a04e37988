use crate::errors::AppError;
use crate::models::{Goals, Preferences};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{debug, error};

pub fn resolve_prefs_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("HABIT_PREFS_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/preferences.json"))
}

pub async fn load_preferences(path: &Path) -> Preferences {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<Preferences>(&bytes) {
            Ok(mut prefs) => {
                if !prefs.goals.is_valid() {
                    error!(
                        weekly_goal = prefs.goals.weekly_goal,
                        monthly_goal = prefs.goals.monthly_goal,
                        "stored goals must be at least 1, using default goals"
                    );
                    prefs.goals = Goals::default();
                }
                prefs
            }
            Err(err) => {
                error!("failed to parse preferences file: {err}");
                Preferences::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!("no preferences at {}, using defaults", path.display());
            Preferences::default()
        }
        Err(err) => {
            error!("failed to read preferences file: {err}");
            Preferences::default()
        }
    }
}

pub async fn persist_preferences(path: &Path, prefs: &Preferences) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(prefs).map_err(AppError::internal)?;
    fs::write(path, payload).await?;
    Ok(())
}
