use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson;
use serde::Deserialize;

use crate::campaign::{CampaignStatus, Category};
use crate::database::MongoCampaignStore;
use crate::error::Error;

use super::{CampaignTotals, CategoryBudget, StatusCount, TimeSeriesPoint};

#[async_trait]
pub trait DashboardStore {
    async fn aggregate_campaign_totals(&self) -> Result<Option<CampaignTotals>, Error>;

    async fn aggregate_status_counts(&self) -> Result<Vec<StatusCount>, Error>;

    async fn aggregate_category_budgets(&self) -> Result<Vec<CategoryBudget>, Error>;

    async fn aggregate_campaigns_by_day(&self) -> Result<Vec<TimeSeriesPoint>, Error>;
}

#[async_trait]
impl DashboardStore for MongoCampaignStore {
    #[tracing::instrument(skip(self))]
    async fn aggregate_campaign_totals(&self) -> Result<Option<CampaignTotals>, Error> {
        let pipeline = vec![bson::doc! {
            "$group": {
                "_id": bson::Bson::Null,
                "total_campaigns": { "$sum": 1 },
                "total_budget": { "$sum": "$budget" },
                "active_campaigns": {
                    "$sum": { "$cond": [{ "$eq": ["$status", "active"] }, 1, 0] }
                },
            }
        }];

        let mut cursor = self.aggregate(pipeline, None).await?;
        let totals = match cursor.try_next().await? {
            Some(document) => Some(bson::from_document(document)?),
            None => None,
        };

        Ok(totals)
    }

    #[tracing::instrument(skip(self))]
    async fn aggregate_status_counts(&self) -> Result<Vec<StatusCount>, Error> {
        #[derive(Deserialize)]
        struct Row {
            #[serde(rename = "_id")]
            status: CampaignStatus,
            count: i64,
        }

        let pipeline = vec![bson::doc! {
            "$group": {
                "_id": "$status",
                "count": { "$sum": 1 },
            }
        }];

        let mut cursor = self.aggregate(pipeline, None).await?;
        let mut counts = vec![];
        while let Some(document) = cursor.try_next().await? {
            let row: Row = bson::from_document(document)?;
            counts.push(StatusCount {
                status: row.status,
                count: row.count,
            });
        }

        Ok(counts)
    }

    #[tracing::instrument(skip(self))]
    async fn aggregate_category_budgets(&self) -> Result<Vec<CategoryBudget>, Error> {
        #[derive(Deserialize)]
        struct Row {
            #[serde(rename = "_id")]
            category: Category,
            total_budget: f64,
        }

        let pipeline = vec![bson::doc! {
            "$group": {
                "_id": "$category",
                "total_budget": { "$sum": "$budget" },
            }
        }];

        let mut cursor = self.aggregate(pipeline, None).await?;
        let mut budgets = vec![];
        while let Some(document) = cursor.try_next().await? {
            let row: Row = bson::from_document(document)?;
            budgets.push(CategoryBudget {
                category: row.category,
                total_budget: row.total_budget,
            });
        }

        Ok(budgets)
    }

    #[tracing::instrument(skip(self))]
    async fn aggregate_campaigns_by_day(&self) -> Result<Vec<TimeSeriesPoint>, Error> {
        #[derive(Deserialize)]
        struct Row {
            #[serde(rename = "_id")]
            date: String,
            count: i64,
        }

        let pipeline = vec![
            bson::doc! {
                "$group": {
                    "_id": {
                        "$dateToString": { "format": "%Y-%m-%d", "date": "$created_at" }
                    },
                    "count": { "$sum": 1 },
                }
            },
            bson::doc! { "$sort": { "_id": 1 } },
        ];

        let mut cursor = self.aggregate(pipeline, None).await?;
        let mut points = vec![];
        while let Some(document) = cursor.try_next().await? {
            let row: Row = bson::from_document(document)?;
            points.push(TimeSeriesPoint {
                date: row.date,
                count: row.count,
            });
        }

        Ok(points)
    }
}
