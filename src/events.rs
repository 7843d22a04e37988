//! Signals raised by a toggle for whatever celebrates or notifies downstream.

use crate::badges::badge_states;
use crate::calendar::MonthCalendar;
use crate::ledger::{toggle, CompletedDays};
use crate::models::Goals;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LedgerEvent {
    DayCompleted { day: u32 },
    DayCleared { day: u32 },
    BadgeUnlocked { id: String },
}

#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    pub days: CompletedDays,
    pub changed: bool,
    pub events: Vec<LedgerEvent>,
}

/// Applies a toggle and reports what it changed: the day transition first,
/// then every badge that was locked before and is unlocked now.
pub fn toggle_with_events(
    day: u32,
    days: &CompletedDays,
    goals: &Goals,
    calendar: &MonthCalendar,
) -> ToggleOutcome {
    let next = toggle(day, days, calendar.today);
    if next == *days {
        return ToggleOutcome {
            days: next,
            changed: false,
            events: Vec::new(),
        };
    }

    let mut events = vec![if next.contains(&day) {
        LedgerEvent::DayCompleted { day }
    } else {
        LedgerEvent::DayCleared { day }
    }];

    let before = badge_states(days, goals, calendar);
    let after = badge_states(&next, goals, calendar);
    events.extend(
        before
            .iter()
            .zip(&after)
            .filter(|((_, was), (_, now))| !was && *now)
            .map(|(_, (badge, _))| LedgerEvent::BadgeUnlocked {
                id: badge.id.to_string(),
            }),
    );

    ToggleOutcome {
        days: next,
        changed: true,
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn january(today: u32) -> MonthCalendar {
        MonthCalendar::for_date(NaiveDate::from_ymd_opt(2026, 1, today).unwrap())
    }

    #[test]
    fn first_completion_unlocks_first_step() {
        let outcome = toggle_with_events(3, &CompletedDays::new(), &Goals::default(), &january(10));
        assert!(outcome.changed);
        assert_eq!(
            outcome.events,
            vec![
                LedgerEvent::DayCompleted { day: 3 },
                LedgerEvent::BadgeUnlocked {
                    id: "first-step".to_string()
                },
            ]
        );
    }

    #[test]
    fn clearing_a_day_unlocks_nothing() {
        let days: CompletedDays = [1, 2, 3].into_iter().collect();
        let outcome = toggle_with_events(2, &days, &Goals::default(), &january(10));
        assert_eq!(outcome.days, [1, 3].into_iter().collect::<CompletedDays>());
        assert_eq!(outcome.events, vec![LedgerEvent::DayCleared { day: 2 }]);
    }

    #[test]
    fn future_day_is_silent() {
        let days: CompletedDays = [1].into_iter().collect();
        let outcome = toggle_with_events(11, &days, &Goals::default(), &january(10));
        assert!(!outcome.changed);
        assert!(outcome.events.is_empty());
        assert_eq!(outcome.days, days);
    }

    #[test]
    fn seventh_day_in_a_row_unlocks_week_warrior() {
        // Wednesday the 7th: the week window is 4..=10.
        let cal = january(7);
        let goals = Goals {
            weekly_goal: 4,
            monthly_goal: 20,
        };
        let days: CompletedDays = (1..=6).collect();
        let outcome = toggle_with_events(7, &days, &goals, &cal);
        assert_eq!(
            outcome.events,
            vec![
                LedgerEvent::DayCompleted { day: 7 },
                LedgerEvent::BadgeUnlocked {
                    id: "week-warrior".to_string()
                },
                LedgerEvent::BadgeUnlocked {
                    id: "goal-crusher".to_string()
                },
            ]
        );
    }

    #[test]
    fn events_serialize_with_tag() {
        let json = serde_json::to_value(LedgerEvent::DayCompleted { day: 4 }).unwrap();
        assert_eq!(json, serde_json::json!({ "event": "day_completed", "day": 4 }));
    }
}
