use crate::database::Database;
use crate::error::Error;

use super::{CategoryBudget, DashboardSummary, StatusCount, TimeSeriesPoint};

#[tracing::instrument(skip(db))]
pub async fn get_summary(db: &dyn Database) -> Result<DashboardSummary, Error> {
    let summary = match db.dashboard().aggregate_campaign_totals().await? {
        Some(totals) => {
            let average_budget = if totals.total_campaigns > 0 {
                totals.total_budget / totals.total_campaigns as f64
            } else {
                0.0
            };

            DashboardSummary {
                total_campaigns: totals.total_campaigns,
                total_budget: totals.total_budget,
                active_campaigns: totals.active_campaigns,
                average_budget: round_to_cents(average_budget),
            }
        }
        None => DashboardSummary {
            total_campaigns: 0,
            total_budget: 0.0,
            active_campaigns: 0,
            average_budget: 0.0,
        },
    };

    Ok(summary)
}

#[tracing::instrument(skip(db))]
pub async fn get_status_distribution(db: &dyn Database) -> Result<Vec<StatusCount>, Error> {
    let counts = db.dashboard().aggregate_status_counts().await?;

    Ok(counts)
}

#[tracing::instrument(skip(db))]
pub async fn get_budget_by_category(db: &dyn Database) -> Result<Vec<CategoryBudget>, Error> {
    let budgets = db.dashboard().aggregate_category_budgets().await?;

    Ok(budgets)
}

#[tracing::instrument(skip(db))]
pub async fn get_campaigns_over_time(db: &dyn Database) -> Result<Vec<TimeSeriesPoint>, Error> {
    let points = db.dashboard().aggregate_campaigns_by_day().await?;

    Ok(points)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
