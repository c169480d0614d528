use actix_web::get;
use actix_web::web::{Data, Json};

use crate::database::Database;
use crate::error::Error;

use super::{manager, CategoryBudget, DashboardSummary, StatusCount, TimeSeriesPoint};

#[get("/api/dashboard/summary")]
#[tracing::instrument(skip(db))]
pub async fn get_dashboard_summary(
    db: Data<Box<dyn Database>>,
) -> Result<Json<DashboardSummary>, Error> {
    let summary = manager::get_summary(&***db).await?;

    Ok(Json(summary))
}

#[get("/api/dashboard/status-distribution")]
#[tracing::instrument(skip(db))]
pub async fn get_status_distribution(
    db: Data<Box<dyn Database>>,
) -> Result<Json<Vec<StatusCount>>, Error> {
    let counts = manager::get_status_distribution(&***db).await?;

    Ok(Json(counts))
}

#[get("/api/dashboard/budget-by-category")]
#[tracing::instrument(skip(db))]
pub async fn get_budget_by_category(
    db: Data<Box<dyn Database>>,
) -> Result<Json<Vec<CategoryBudget>>, Error> {
    let budgets = manager::get_budget_by_category(&***db).await?;

    Ok(Json(budgets))
}

#[get("/api/dashboard/campaigns-over-time")]
#[tracing::instrument(skip(db))]
pub async fn get_campaigns_over_time(
    db: Data<Box<dyn Database>>,
) -> Result<Json<Vec<TimeSeriesPoint>>, Error> {
    let points = manager::get_campaigns_over_time(&***db).await?;

    Ok(Json(points))
}
