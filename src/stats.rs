use crate::badges::{badge_states, CATALOG};
use crate::calendar::{MonthCalendar, WEEKDAY_LABELS};
use crate::ledger::{
    average_weekly_rate, completion_rate, current_streak, current_week_completions,
    day_of_week_stats, goal_progress, longest_streak, missed_days, weekly_patterns, weekly_trend,
    CompletedDays,
};
use crate::models::{
    BadgeStatus, BadgesResponse, CalendarCell, CalendarResponse, CellState, Preferences,
    StatsResponse, SummaryResponse,
};

pub fn build_summary(
    days: &CompletedDays,
    prefs: &Preferences,
    calendar: &MonthCalendar,
) -> SummaryResponse {
    let goals = prefs.goals;
    let total_completed = days.len() as u32;
    let week_completions = current_week_completions(days, calendar);
    let badges_unlocked = badge_states(days, &goals, calendar)
        .iter()
        .filter(|(_, unlocked)| *unlocked)
        .count();

    SummaryResponse {
        habit_name: prefs.habit_name.clone(),
        year: calendar.year,
        month: calendar.month,
        today: calendar.today,
        days_in_month: calendar.days_in_month,
        completed_days: days.iter().copied().collect(),
        total_completed,
        missed_days: missed_days(days, calendar.today),
        current_streak: current_streak(days, calendar.today),
        longest_streak: longest_streak(days),
        completion_rate: completion_rate(days, calendar.today),
        current_week_completions: week_completions,
        goals,
        weekly_progress: goal_progress(week_completions, goals.weekly_goal),
        monthly_progress: goal_progress(total_completed, goals.monthly_goal),
        badges_unlocked,
        badges_total: CATALOG.len(),
    }
}

pub fn build_stats(days: &CompletedDays, calendar: &MonthCalendar) -> StatsResponse {
    let day_of_week = day_of_week_stats(days, calendar);
    let patterns = weekly_patterns(&day_of_week);
    let weekly_trend = weekly_trend(days, calendar);

    StatsResponse {
        average_weekly_rate: average_weekly_rate(&weekly_trend),
        weeks_tracked: weekly_trend.len(),
        day_of_week: day_of_week.to_vec(),
        weekly_trend,
        patterns,
    }
}

pub fn build_badges(
    days: &CompletedDays,
    prefs: &Preferences,
    calendar: &MonthCalendar,
) -> BadgesResponse {
    let badges: Vec<BadgeStatus> = badge_states(days, &prefs.goals, calendar)
        .into_iter()
        .map(|(badge, unlocked)| BadgeStatus {
            id: badge.id,
            name: badge.name,
            description: badge.description,
            icon: badge.icon,
            unlocked,
        })
        .collect();

    BadgesResponse {
        unlocked: badges.iter().filter(|badge| badge.unlocked).count(),
        total: badges.len(),
        badges,
    }
}

pub fn build_calendar(days: &CompletedDays, calendar: &MonthCalendar) -> CalendarResponse {
    let cells = calendar
        .grid()
        .into_iter()
        .map(|cell| CalendarCell {
            day: cell,
            state: match cell {
                None => CellState::Blank,
                Some(day) if calendar.is_future(day) => CellState::Future,
                Some(day) if days.contains(&day) => CellState::Completed,
                Some(_) => CellState::Open,
            },
        })
        .collect();

    CalendarResponse {
        year: calendar.year,
        month: calendar.month,
        today: calendar.today,
        weekday_labels: WEEKDAY_LABELS,
        cells,
    }
}
