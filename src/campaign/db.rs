use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson;
use mongodb::options::FindOptions;

use crate::database::MongoCampaignStore;
use crate::error::Error;

use super::{Campaign, CampaignFilter, CampaignId, SortOrder};

#[async_trait]
pub trait CampaignStore {
    async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error>;

    async fn fetch_campaigns(&self, filter: &CampaignFilter) -> Result<Vec<Campaign>, Error>;

    async fn fetch_campaign_by_id(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Option<Campaign>, Error>;

    async fn update_campaign(&self, campaign: &Campaign) -> Result<bool, Error>;

    async fn delete_campaign(&self, campaign_id: CampaignId) -> Result<bool, Error>;
}

#[async_trait]
impl CampaignStore for MongoCampaignStore {
    #[tracing::instrument(skip(self))]
    async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error> {
        self.insert_one(campaign, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_campaigns(&self, filter: &CampaignFilter) -> Result<Vec<Campaign>, Error> {
        let mut query = bson::Document::new();
        if let Some(status) = filter.status {
            query.insert("status", bson::to_bson(&status)?);
        }
        if let Some(category) = filter.category {
            query.insert("category", bson::to_bson(&category)?);
        }

        let options = filter.sort.map(|sort| {
            let direction = match sort.order {
                SortOrder::Ascending => 1,
                SortOrder::Descending => -1,
            };
            let mut sort_document = bson::Document::new();
            sort_document.insert(sort.field.as_key(), direction);

            FindOptions::builder().sort(sort_document).build()
        });

        let campaigns: Vec<Campaign> = self.find(query, options).await?.try_collect().await?;

        Ok(campaigns)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_campaign_by_id(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Option<Campaign>, Error> {
        let campaign: Option<Campaign> =
            self.find_one(bson::doc! { "_id": campaign_id }, None).await?;

        Ok(campaign)
    }

    #[tracing::instrument(skip(self))]
    async fn update_campaign(&self, campaign: &Campaign) -> Result<bool, Error> {
        let result = self
            .replace_one(bson::doc! { "_id": campaign.id }, campaign, None)
            .await?;

        Ok(result.matched_count > 0)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_campaign(&self, campaign_id: CampaignId) -> Result<bool, Error> {
        let result = self
            .delete_one(bson::doc! { "_id": campaign_id }, None)
            .await?;

        Ok(result.deleted_count > 0)
    }
}
