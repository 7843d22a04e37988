use crate::events::LedgerEvent;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HABIT_NAME: &str = "Daily Exercise";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goals {
    pub weekly_goal: u32,
    pub monthly_goal: u32,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            weekly_goal: 5,
            monthly_goal: 20,
        }
    }
}

impl Goals {
    pub fn is_valid(&self) -> bool {
        self.weekly_goal >= 1 && self.monthly_goal >= 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub habit_name: String,
    pub goals: Goals,
    pub email: Option<String>,
    pub notifications_granted: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            habit_name: DEFAULT_HABIT_NAME.to_string(),
            goals: Goals::default(),
            email: None,
            notifications_granted: false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PreferencesPatch {
    pub habit_name: Option<String>,
    pub email: Option<String>,
    pub notifications_granted: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub day: u32,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub day: u32,
    pub completed: bool,
    pub changed: bool,
    pub events: Vec<LedgerEvent>,
    pub current_streak: u32,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub habit_name: String,
    pub year: i32,
    pub month: u32,
    pub today: u32,
    pub days_in_month: u32,
    pub completed_days: Vec<u32>,
    pub total_completed: u32,
    pub missed_days: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub completion_rate: u32,
    pub current_week_completions: u32,
    pub goals: Goals,
    pub weekly_progress: u32,
    pub monthly_progress: u32,
    pub badges_unlocked: usize,
    pub badges_total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayStat {
    pub weekday: u32,
    pub label: &'static str,
    pub completed: u32,
    pub total: u32,
    pub rate: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekTrend {
    pub week: u32,
    pub completed: u32,
    pub total: u32,
    pub rate: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyPatterns {
    pub best_day: WeekdayStat,
    pub worst_day: Option<WeekdayStat>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub day_of_week: Vec<WeekdayStat>,
    pub weekly_trend: Vec<WeekTrend>,
    pub patterns: WeeklyPatterns,
    pub average_weekly_rate: u32,
    pub weeks_tracked: usize,
}

#[derive(Debug, Serialize)]
pub struct BadgeStatus {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
}

#[derive(Debug, Serialize)]
pub struct BadgesResponse {
    pub unlocked: usize,
    pub total: usize,
    pub badges: Vec<BadgeStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    Blank,
    Completed,
    Open,
    Future,
}

#[derive(Debug, Serialize)]
pub struct CalendarCell {
    pub day: Option<u32>,
    pub state: CellState,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub today: u32,
    pub weekday_labels: [&'static str; 7],
    pub cells: Vec<CalendarCell>,
}
