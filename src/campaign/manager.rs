use chrono::Utc;

use crate::database::Database;
use crate::error::Error;

use super::{Campaign, CampaignDraft, CampaignFilter, CampaignId};

#[tracing::instrument(skip(db))]
pub async fn create_campaign(db: &dyn Database, draft: CampaignDraft) -> Result<Campaign, Error> {
    let now = Utc::now();
    let campaign = Campaign {
        id: CampaignId::new(),
        name: draft.name,
        description: draft.description,
        status: draft.status,
        budget: draft.budget,
        start_date: draft.start_date,
        end_date: draft.end_date,
        platform: draft.platform,
        category: draft.category,
        created_at: now,
        updated_at: now,
    };

    db.campaigns().insert_campaign(&campaign).await?;

    Ok(campaign)
}

#[tracing::instrument(skip(db))]
pub async fn get_campaigns(
    db: &dyn Database,
    filter: &CampaignFilter,
) -> Result<Vec<Campaign>, Error> {
    let campaigns = db.campaigns().fetch_campaigns(filter).await?;

    Ok(campaigns)
}

#[tracing::instrument(skip(db))]
pub async fn get_campaign_by_id(
    db: &dyn Database,
    campaign_id: CampaignId,
) -> Result<Campaign, Error> {
    let campaign = db
        .campaigns()
        .fetch_campaign_by_id(campaign_id)
        .await?
        .ok_or(Error::CampaignNotFound { campaign_id })?;

    Ok(campaign)
}

#[tracing::instrument(skip(db))]
pub async fn update_campaign(
    db: &dyn Database,
    campaign_id: CampaignId,
    draft: CampaignDraft,
) -> Result<Campaign, Error> {
    let existing = db
        .campaigns()
        .fetch_campaign_by_id(campaign_id)
        .await?
        .ok_or(Error::CampaignNotFound { campaign_id })?;

    // Full replacement of every client-owned field; id and created_at survive
    let campaign = Campaign {
        id: existing.id,
        name: draft.name,
        description: draft.description,
        status: draft.status,
        budget: draft.budget,
        start_date: draft.start_date,
        end_date: draft.end_date,
        platform: draft.platform,
        category: draft.category,
        created_at: existing.created_at,
        updated_at: Utc::now(),
    };

    let replaced = db.campaigns().update_campaign(&campaign).await?;
    if !replaced {
        return Err(Error::CampaignNotFound { campaign_id });
    }

    Ok(campaign)
}

#[tracing::instrument(skip(db))]
pub async fn delete_campaign(db: &dyn Database, campaign_id: CampaignId) -> Result<(), Error> {
    let deleted = db.campaigns().delete_campaign(campaign_id).await?;
    if !deleted {
        return Err(Error::CampaignNotFound { campaign_id });
    }

    Ok(())
}
