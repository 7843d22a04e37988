pub mod app;
pub mod badges;
pub mod calendar;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod stats;
pub mod storage;
pub mod state;

pub use app::router;
pub use calendar::MonthCalendar;
pub use state::AppState;
pub use storage::{load_preferences, resolve_prefs_path};
