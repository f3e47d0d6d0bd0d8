// Performance aggregation over a member's workout log history.
//
// Purpose
// - Fold an unordered slice of log entries into the figures the performance
//   page shows: per-day scores, the consecutive-day streak, the trailing
//   seven-day window and a chart-ready series.
//
// Boundaries
// - Pure functions over supplied data. No input or output, no clock access:
//   the reference date is always passed in so tests can pin arbitrary days.
//
// Testing guidance
// - The sum of the daily scores must always equal the number of entries.
// - A day without a logged workout resets the streak to zero no matter how
//   long the history before it is.

use crate::modules::workouts::core::log_entry::WorkoutLogEntry;
use crate::shared::core::math::round2;
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PerformanceError {
    #[error("entry {entry_id} has a blank exercise name")]
    InvalidEntry { entry_id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyWindow {
    pub active_days: usize,
    pub total_entries: usize,
    pub average_per_active_day: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceReport {
    pub daily_scores: BTreeMap<NaiveDate, usize>,
    pub streak: u32,
    pub weekly: WeeklyWindow,
    pub chart: ChartSeries,
    pub grouped_logs: BTreeMap<NaiveDate, Vec<String>>,
}

/// Count of entries per calendar day. Every entry lands in exactly one
/// bucket; a date appears only if it has at least one entry.
pub fn daily_scores(entries: &[WorkoutLogEntry]) -> BTreeMap<NaiveDate, usize> {
    let mut scores = BTreeMap::new();
    for entry in entries {
        *scores.entry(entry.log_date).or_insert(0) += 1;
    }
    scores
}

/// Consecutive days with at least one entry, ending at `today`. A miss at
/// `today` itself yields 0: the streak only survives by working out today.
pub fn streak(entries: &[WorkoutLogEntry], today: NaiveDate) -> u32 {
    let active_days: BTreeSet<NaiveDate> = entries.iter().map(|e| e.log_date).collect();
    let mut streak = 0;
    let mut day = today;
    while active_days.contains(&day) {
        streak += 1;
        let Some(previous) = day.pred_opt() else {
            break;
        };
        day = previous;
    }
    streak
}

/// Activity over the seven calendar days `[today - 6, today]` inclusive.
/// No active days is a defined zero-average result, not an error.
pub fn weekly_window(entries: &[WorkoutLogEntry], today: NaiveDate) -> WeeklyWindow {
    let window_start = today - Days::new(6);
    let mut active_days = BTreeSet::new();
    let mut total_entries = 0;
    for entry in entries {
        if entry.log_date >= window_start && entry.log_date <= today {
            active_days.insert(entry.log_date);
            total_entries += 1;
        }
    }
    let average_per_active_day = if active_days.is_empty() {
        0.0
    } else {
        round2(total_entries as f64 / active_days.len() as f64)
    };
    WeeklyWindow {
        active_days: active_days.len(),
        total_entries,
        average_per_active_day,
    }
}

/// Chart series ordered by date. Days with no activity are absent, not
/// zero-valued points.
pub fn chart_series(daily_scores: &BTreeMap<NaiveDate, usize>) -> ChartSeries {
    ChartSeries {
        labels: daily_scores
            .keys()
            .map(|date| date.format("%d %b").to_string())
            .collect(),
        values: daily_scores.values().copied().collect(),
    }
}

impl PerformanceReport {
    /// Assemble the full report. Fails fast on a malformed entry instead of
    /// silently aggregating it.
    pub fn from_entries(
        entries: &[WorkoutLogEntry],
        today: NaiveDate,
    ) -> Result<Self, PerformanceError> {
        if let Some(bad) = entries.iter().find(|e| e.exercise_name.trim().is_empty()) {
            return Err(PerformanceError::InvalidEntry {
                entry_id: bad.entry_id.clone(),
            });
        }

        let daily_scores = daily_scores(entries);
        let chart = chart_series(&daily_scores);

        let mut grouped_logs: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
        for entry in entries {
            grouped_logs
                .entry(entry.log_date)
                .or_default()
                .push(entry.exercise_name.clone());
        }

        Ok(Self {
            streak: streak(entries, today),
            weekly: weekly_window(entries, today),
            daily_scores,
            chart,
            grouped_logs,
        })
    }
}
