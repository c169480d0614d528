use serde::{Deserialize, Serialize};

use crate::campaign::{CampaignStatus, Category};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DashboardSummary {
    pub total_campaigns: i64,
    pub total_budget: f64,
    pub active_campaigns: i64,
    pub average_budget: f64,
}

// One totals row over the whole collection; absent when there are no campaigns
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CampaignTotals {
    pub total_campaigns: i64,
    pub total_budget: f64,
    pub active_campaigns: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StatusCount {
    pub status: CampaignStatus,
    pub count: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CategoryBudget {
    pub category: Category,
    pub total_budget: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TimeSeriesPoint {
    pub date: String,
    pub count: i64,
}
