use actix_web::web::{Data, Json, Path, Query};
use actix_web::{delete, get, post, put, HttpResponse};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::Error;
use crate::utils::{empty_string_as_none, SuccessBody};

use super::{
    manager, Campaign, CampaignDraft, CampaignFilter, CampaignId, CampaignSort, CampaignStatus,
    Category, Platform,
};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CampaignBody {
    pub id: CampaignId,
    pub name: String,
    pub description: String,
    pub status: CampaignStatus,
    pub budget: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub platform: Platform,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CampaignBody {
    pub fn render(campaign: Campaign) -> CampaignBody {
        CampaignBody {
            id: campaign.id,
            name: campaign.name,
            description: campaign.description,
            status: campaign.status,
            budget: campaign.budget,
            start_date: campaign.start_date,
            end_date: campaign.end_date,
            platform: campaign.platform,
            category: campaign.category,
            created_at: campaign.created_at,
            updated_at: campaign.updated_at,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ListCampaignsQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub status: Option<CampaignStatus>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category: Option<Category>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

#[post("/api/campaigns")]
#[tracing::instrument(skip(db))]
pub async fn create_campaign(
    db: Data<Box<dyn Database>>,
    body: Json<CampaignDraft>,
) -> Result<HttpResponse, Error> {
    let draft = body.into_inner();
    draft.validate()?;

    let campaign = manager::create_campaign(&***db, draft).await?;

    Ok(HttpResponse::Created().json(CampaignBody::render(campaign)))
}

#[get("/api/campaigns")]
#[tracing::instrument(skip(db))]
pub async fn get_campaigns(
    db: Data<Box<dyn Database>>,
    query: Query<ListCampaignsQuery>,
) -> Result<Json<Vec<CampaignBody>>, Error> {
    let query = query.into_inner();
    let filter = CampaignFilter {
        status: query.status,
        category: query.category,
        sort: CampaignSort::from_query(query.sort_by.as_deref(), query.sort_order.as_deref()),
    };

    let campaigns = manager::get_campaigns(&***db, &filter).await?;

    Ok(Json(
        campaigns.into_iter().map(CampaignBody::render).collect(),
    ))
}

#[get("/api/campaigns/{campaign_id}")]
#[tracing::instrument(skip(db))]
pub async fn get_campaign_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
) -> Result<Json<CampaignBody>, Error> {
    let campaign_id = params.into_inner();

    let campaign = manager::get_campaign_by_id(&***db, campaign_id).await?;

    Ok(Json(CampaignBody::render(campaign)))
}

#[put("/api/campaigns/{campaign_id}")]
#[tracing::instrument(skip(db))]
pub async fn update_campaign(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
    body: Json<CampaignDraft>,
) -> Result<Json<CampaignBody>, Error> {
    let campaign_id = params.into_inner();
    let draft = body.into_inner();
    draft.validate()?;

    let campaign = manager::update_campaign(&***db, campaign_id, draft).await?;

    Ok(Json(CampaignBody::render(campaign)))
}

#[delete("/api/campaigns/{campaign_id}")]
#[tracing::instrument(skip(db))]
pub async fn delete_campaign(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
) -> Result<Json<SuccessBody>, Error> {
    let campaign_id = params.into_inner();

    manager::delete_campaign(&***db, campaign_id).await?;

    Ok(Json(SuccessBody::new("Campaign deleted")))
}
