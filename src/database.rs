use mongodb::{Collection, Database as MongoDb};

use crate::campaign::db::CampaignStore;
use crate::campaign::Campaign;
use crate::dashboard::db::DashboardStore;

pub type MongoCampaignStore = Collection<Campaign>;

pub trait Database: Send + Sync {
    fn campaigns(&self) -> &dyn CampaignStore;
    fn dashboard(&self) -> &dyn DashboardStore;
}

#[derive(Debug, Clone)]
pub struct MongoDatabase {
    campaigns: Collection<Campaign>,
}

impl MongoDatabase {
    pub fn new(db: MongoDb) -> MongoDatabase {
        MongoDatabase {
            campaigns: db.collection("campaigns"),
        }
    }
}

impl Database for MongoDatabase {
    fn campaigns(&self) -> &dyn CampaignStore {
        &self.campaigns
    }

    // The dashboard reads the same collection through its own store trait
    fn dashboard(&self) -> &dyn DashboardStore {
        &self.campaigns
    }
}

#[cfg(test)]
pub mod test {
    use async_trait::async_trait;

    use crate::campaign::db::CampaignStore;
    use crate::campaign::{Campaign, CampaignFilter, CampaignId};
    use crate::dashboard::db::DashboardStore;
    use crate::dashboard::{CampaignTotals, CategoryBudget, StatusCount, TimeSeriesPoint};
    use crate::error::Error;

    use super::Database;

    pub struct MockDatabase {
        pub campaigns: MockCampaignStore,
        pub dashboard: MockDashboardStore,
    }

    impl MockDatabase {
        pub fn new() -> MockDatabase {
            MockDatabase {
                campaigns: MockCampaignStore::new(),
                dashboard: MockDashboardStore::new(),
            }
        }
    }

    impl Database for MockDatabase {
        fn campaigns(&self) -> &dyn CampaignStore {
            &self.campaigns
        }

        fn dashboard(&self) -> &dyn DashboardStore {
            &self.dashboard
        }
    }

    type InsertCampaignHook = Box<dyn Fn(&Campaign) -> Result<(), Error> + Send + Sync>;
    type FetchCampaignsHook = Box<dyn Fn(&CampaignFilter) -> Result<Vec<Campaign>, Error> + Send + Sync>;
    type FetchCampaignByIdHook = Box<dyn Fn(CampaignId) -> Result<Option<Campaign>, Error> + Send + Sync>;
    type UpdateCampaignHook = Box<dyn Fn(&Campaign) -> Result<bool, Error> + Send + Sync>;
    type DeleteCampaignHook = Box<dyn Fn(CampaignId) -> Result<bool, Error> + Send + Sync>;

    pub struct MockCampaignStore {
        pub on_insert_campaign: InsertCampaignHook,
        pub on_fetch_campaigns: FetchCampaignsHook,
        pub on_fetch_campaign_by_id: FetchCampaignByIdHook,
        pub on_update_campaign: UpdateCampaignHook,
        pub on_delete_campaign: DeleteCampaignHook,
    }

    impl MockCampaignStore {
        pub fn new() -> MockCampaignStore {
            MockCampaignStore {
                on_insert_campaign: Box::new(|_| panic!("insert_campaign is not mocked")),
                on_fetch_campaigns: Box::new(|_| panic!("fetch_campaigns is not mocked")),
                on_fetch_campaign_by_id: Box::new(|_| panic!("fetch_campaign_by_id is not mocked")),
                on_update_campaign: Box::new(|_| panic!("update_campaign is not mocked")),
                on_delete_campaign: Box::new(|_| panic!("delete_campaign is not mocked")),
            }
        }
    }

    #[async_trait]
    impl CampaignStore for MockCampaignStore {
        async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error> {
            (self.on_insert_campaign)(campaign)
        }

        async fn fetch_campaigns(&self, filter: &CampaignFilter) -> Result<Vec<Campaign>, Error> {
            (self.on_fetch_campaigns)(filter)
        }

        async fn fetch_campaign_by_id(
            &self,
            campaign_id: CampaignId,
        ) -> Result<Option<Campaign>, Error> {
            (self.on_fetch_campaign_by_id)(campaign_id)
        }

        async fn update_campaign(&self, campaign: &Campaign) -> Result<bool, Error> {
            (self.on_update_campaign)(campaign)
        }

        async fn delete_campaign(&self, campaign_id: CampaignId) -> Result<bool, Error> {
            (self.on_delete_campaign)(campaign_id)
        }
    }

    type AggregateTotalsHook = Box<dyn Fn() -> Result<Option<CampaignTotals>, Error> + Send + Sync>;
    type AggregateStatusCountsHook = Box<dyn Fn() -> Result<Vec<StatusCount>, Error> + Send + Sync>;
    type AggregateCategoryBudgetsHook = Box<dyn Fn() -> Result<Vec<CategoryBudget>, Error> + Send + Sync>;
    type AggregateCampaignsByDayHook = Box<dyn Fn() -> Result<Vec<TimeSeriesPoint>, Error> + Send + Sync>;

    pub struct MockDashboardStore {
        pub on_aggregate_campaign_totals: AggregateTotalsHook,
        pub on_aggregate_status_counts: AggregateStatusCountsHook,
        pub on_aggregate_category_budgets: AggregateCategoryBudgetsHook,
        pub on_aggregate_campaigns_by_day: AggregateCampaignsByDayHook,
    }

    impl MockDashboardStore {
        pub fn new() -> MockDashboardStore {
            MockDashboardStore {
                on_aggregate_campaign_totals: Box::new(|| {
                    panic!("aggregate_campaign_totals is not mocked")
                }),
                on_aggregate_status_counts: Box::new(|| {
                    panic!("aggregate_status_counts is not mocked")
                }),
                on_aggregate_category_budgets: Box::new(|| {
                    panic!("aggregate_category_budgets is not mocked")
                }),
                on_aggregate_campaigns_by_day: Box::new(|| {
                    panic!("aggregate_campaigns_by_day is not mocked")
                }),
            }
        }
    }

    #[async_trait]
    impl DashboardStore for MockDashboardStore {
        async fn aggregate_campaign_totals(&self) -> Result<Option<CampaignTotals>, Error> {
            (self.on_aggregate_campaign_totals)()
        }

        async fn aggregate_status_counts(&self) -> Result<Vec<StatusCount>, Error> {
            (self.on_aggregate_status_counts)()
        }

        async fn aggregate_category_budgets(&self) -> Result<Vec<CategoryBudget>, Error> {
            (self.on_aggregate_category_budgets)()
        }

        async fn aggregate_campaigns_by_day(&self) -> Result<Vec<TimeSeriesPoint>, Error> {
            (self.on_aggregate_campaigns_by_day)()
        }
    }
}
