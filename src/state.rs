use crate::calendar::MonthCalendar;
use crate::ledger::MonthLedger;
use crate::models::Preferences;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub prefs_path: PathBuf,
    pub prefs: Arc<Mutex<Preferences>>,
    pub ledger: Arc<Mutex<MonthLedger>>,
}

impl AppState {
    pub fn new(prefs_path: PathBuf, prefs: Preferences, calendar: &MonthCalendar) -> Self {
        Self {
            prefs_path,
            prefs: Arc::new(Mutex::new(prefs)),
            ledger: Arc::new(Mutex::new(MonthLedger::new(calendar))),
        }
    }

    /// Locks the ledger after moving it into the calendar's month.
    pub async fn ledger_for(&self, calendar: &MonthCalendar) -> MutexGuard<'_, MonthLedger> {
        let mut ledger = self.ledger.lock().await;
        if ledger.roll_to(calendar) {
            info!(
                year = calendar.year,
                month = calendar.month,
                "new month, completed days reset"
            );
        }
        ledger
    }

    pub async fn preferences(&self) -> Preferences {
        self.prefs.lock().await.clone()
    }
}
