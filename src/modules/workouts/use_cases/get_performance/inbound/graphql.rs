use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::Utc;

use crate::modules::workouts::core::performance::PerformanceReport;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlDailyScore {
    pub date: String,
    pub count: i64,
}

#[derive(SimpleObject, Clone)]
pub struct GqlPerformanceReport {
    pub user_id: String,
    pub streak: i64,
    pub active_days: i64,
    pub total_entries: i64,
    pub average_per_active_day: f64,
    pub chart_labels: Vec<String>,
    pub chart_values: Vec<i64>,
    pub daily_scores: Vec<GqlDailyScore>,
}

impl GqlPerformanceReport {
    fn new(user_id: String, report: PerformanceReport) -> Self {
        Self {
            user_id,
            streak: i64::from(report.streak),
            active_days: report.weekly.active_days as i64,
            total_entries: report.weekly.total_entries as i64,
            average_per_active_day: report.weekly.average_per_active_day,
            chart_labels: report.chart.labels,
            chart_values: report.chart.values.into_iter().map(|v| v as i64).collect(),
            daily_scores: report
                .daily_scores
                .into_iter()
                .map(|(date, count)| GqlDailyScore {
                    date: date.to_string(),
                    count: count as i64,
                })
                .collect(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn performance_report(
        &self,
        context: &Context<'_>,
        user_id: String,
    ) -> GqlResult<GqlPerformanceReport> {
        let state = context.data_unchecked::<AppState>();
        let entries = state.workout_log_queries.history_for(&user_id).await?;
        let report = PerformanceReport::from_entries(&entries, Utc::now().date_naive())
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(GqlPerformanceReport::new(user_id, report))
    }
}
