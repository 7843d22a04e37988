use crate::calendar::MonthCalendar;
use crate::ledger::{current_week_completions, longest_streak, CompletedDays};
use crate::models::Goals;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    Weekly,
    Monthly,
}

/// What a badge requires. `Unknown` absorbs kinds this build does not
/// understand; such badges stay locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "requirement", rename_all = "snake_case")]
pub enum BadgeKind {
    Streak(u32),
    Total(u32),
    Goal(GoalKind),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    #[serde(flatten)]
    pub kind: BadgeKind,
}

pub const CATALOG: [Badge; 8] = [
    Badge {
        id: "first-step",
        name: "First Step",
        description: "Complete your first day",
        icon: "🎯",
        kind: BadgeKind::Total(1),
    },
    Badge {
        id: "week-warrior",
        name: "Week Warrior",
        description: "7-day streak",
        icon: "🔥",
        kind: BadgeKind::Streak(7),
    },
    Badge {
        id: "consistency-king",
        name: "Consistency King",
        description: "14-day streak",
        icon: "👑",
        kind: BadgeKind::Streak(14),
    },
    Badge {
        id: "unstoppable",
        name: "Unstoppable",
        description: "21-day streak",
        icon: "💎",
        kind: BadgeKind::Streak(21),
    },
    Badge {
        id: "legend",
        name: "Legend",
        description: "30-day streak",
        icon: "🏆",
        kind: BadgeKind::Streak(30),
    },
    Badge {
        id: "ten-club",
        name: "Ten Club",
        description: "Complete 10 days total",
        icon: "⭐",
        kind: BadgeKind::Total(10),
    },
    Badge {
        id: "goal-crusher",
        name: "Goal Crusher",
        description: "Reach weekly goal",
        icon: "💪",
        kind: BadgeKind::Goal(GoalKind::Weekly),
    },
    Badge {
        id: "month-master",
        name: "Month Master",
        description: "Reach monthly goal",
        icon: "🎊",
        kind: BadgeKind::Goal(GoalKind::Monthly),
    },
];

pub fn is_badge_unlocked(
    badge: &Badge,
    days: &CompletedDays,
    longest_streak: u32,
    goals: &Goals,
    calendar: &MonthCalendar,
) -> bool {
    let total = days.len() as u32;
    match badge.kind {
        BadgeKind::Streak(threshold) => longest_streak >= threshold,
        BadgeKind::Total(threshold) => total >= threshold,
        BadgeKind::Goal(GoalKind::Weekly) => {
            current_week_completions(days, calendar) >= goals.weekly_goal
        }
        BadgeKind::Goal(GoalKind::Monthly) => total >= goals.monthly_goal,
        BadgeKind::Unknown => false,
    }
}

/// Unlock state of every catalog badge, in catalog order.
pub fn badge_states(
    days: &CompletedDays,
    goals: &Goals,
    calendar: &MonthCalendar,
) -> Vec<(&'static Badge, bool)> {
    let longest = longest_streak(days);
    CATALOG
        .iter()
        .map(|badge| (badge, is_badge_unlocked(badge, days, longest, goals, calendar)))
        .collect()
}

pub fn unlocked_badges(
    days: &CompletedDays,
    goals: &Goals,
    calendar: &MonthCalendar,
) -> Vec<&'static Badge> {
    badge_states(days, goals, calendar)
        .into_iter()
        .filter_map(|(badge, unlocked)| unlocked.then_some(badge))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn find_badge(id: &str) -> Option<&'static Badge> {
        CATALOG.iter().find(|badge| badge.id == id)
    }

    fn january(today: u32) -> MonthCalendar {
        MonthCalendar::for_date(NaiveDate::from_ymd_opt(2026, 1, today).unwrap())
    }

    fn unlocked(id: &str, days: &CompletedDays, goals: &Goals, calendar: &MonthCalendar) -> bool {
        let badge = find_badge(id).expect("badge in catalog");
        is_badge_unlocked(badge, days, longest_streak(days), goals, calendar)
    }

    #[test]
    fn catalog_ids_are_unique() {
        for (index, badge) in CATALOG.iter().enumerate() {
            assert!(CATALOG[index + 1..].iter().all(|other| other.id != badge.id));
        }
    }

    #[test]
    fn empty_ledger_unlocks_nothing() {
        let days = CompletedDays::new();
        assert!(unlocked_badges(&days, &Goals::default(), &january(10)).is_empty());
    }

    #[test]
    fn ten_club_needs_exactly_ten_days() {
        let cal = january(20);
        let goals = Goals::default();
        let nine: CompletedDays = [1, 3, 5, 7, 9, 11, 13, 15, 17].into_iter().collect();
        let mut ten = nine.clone();
        ten.insert(19);

        assert!(!unlocked("ten-club", &nine, &goals, &cal));
        assert!(unlocked("ten-club", &ten, &goals, &cal));
        assert!(unlocked("first-step", &nine, &goals, &cal));
    }

    #[test]
    fn goal_crusher_counts_current_week() {
        // Friday the 16th: the week window is 11..=17.
        let cal = january(16);
        let goals = Goals {
            weekly_goal: 5,
            monthly_goal: 20,
        };
        let mostly_last_week: CompletedDays = [6, 7, 8, 9, 10, 11, 12, 13].into_iter().collect();
        let four_in_week: CompletedDays = [10, 11, 12, 13, 14].into_iter().collect();
        let five_in_week: CompletedDays = [11, 12, 13, 14, 15].into_iter().collect();

        assert!(!unlocked("goal-crusher", &mostly_last_week, &goals, &cal));
        assert!(!unlocked("goal-crusher", &four_in_week, &goals, &cal));
        assert!(unlocked("goal-crusher", &five_in_week, &goals, &cal));
    }

    #[test]
    fn month_master_follows_monthly_goal() {
        let cal = january(10);
        let goals = Goals {
            weekly_goal: 5,
            monthly_goal: 3,
        };
        let days: CompletedDays = [2, 5, 9].into_iter().collect();
        assert!(unlocked("month-master", &days, &goals, &cal));
        assert!(!unlocked("month-master", &days, &Goals::default(), &cal));
    }

    #[test]
    fn streak_badges_use_longest_streak() {
        let cal = january(31);
        let days: CompletedDays = (1..=14).collect();
        let ids: Vec<&str> = unlocked_badges(&days, &Goals::default(), &cal)
            .into_iter()
            .map(|badge| badge.id)
            .collect();
        assert_eq!(ids, ["first-step", "week-warrior", "consistency-king", "ten-club"]);
    }

    #[test]
    fn unknown_kind_stays_locked() {
        let kind: BadgeKind = serde_json::from_str(r#"{"kind":"mystery"}"#).unwrap();
        assert_eq!(kind, BadgeKind::Unknown);

        let badge = Badge {
            id: "mystery",
            name: "Mystery",
            description: "",
            icon: "",
            kind,
        };
        let days: CompletedDays = (1..=31).collect();
        assert!(!is_badge_unlocked(&badge, &days, 31, &Goals::default(), &january(31)));
    }

    #[test]
    fn kinds_serialize_with_requirement() {
        let json = serde_json::to_value(find_badge("goal-crusher").unwrap()).unwrap();
        assert_eq!(json["kind"], "goal");
        assert_eq!(json["requirement"], "weekly");
        let json = serde_json::to_value(find_badge("legend").unwrap()).unwrap();
        assert_eq!(json["kind"], "streak");
        assert_eq!(json["requirement"], 30);
    }
}
