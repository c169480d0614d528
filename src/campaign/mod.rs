use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::typedid::{TypedId, TypedIdMarker};
use crate::violations::Violation;

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type CampaignId = TypedId<Campaign>;

pub const MAX_NAME_LENGTH: usize = 255;
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Campaign {
    #[serde(rename = "_id")]
    pub id: CampaignId,
    pub name: String,
    pub description: String,
    pub status: CampaignStatus,
    pub budget: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub platform: Platform,
    pub category: Category,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl TypedIdMarker for Campaign {
    fn tag() -> &'static str {
        "CPN"
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Completed,
}

impl Default for CampaignStatus {
    fn default() -> CampaignStatus {
        CampaignStatus::Draft
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Facebook,
    Instagram,
    Twitter,
    Google,
    Linkedin,
    Email,
    Other,
}

impl Default for Platform {
    fn default() -> Platform {
        Platform::Other
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BrandAwareness,
    LeadGeneration,
    Sales,
    Engagement,
    Retention,
    Other,
}

impl Default for Category {
    fn default() -> Category {
        Category::Other
    }
}

// The full field set of a campaign as submitted by a client; create and
// update both take every field.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CampaignDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: CampaignStatus,
    #[serde(default)]
    pub budget: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub category: Category,
}

impl CampaignDraft {
    pub fn validate(&self) -> Result<(), Error> {
        let mut violations = vec![];

        if self.name.is_empty() {
            violations.push(Violation::CampaignNameEmpty);
        }
        if self.name.chars().count() > MAX_NAME_LENGTH {
            violations.push(Violation::CampaignNameTooLong {
                maximum_length: MAX_NAME_LENGTH,
                current_length: self.name.chars().count(),
            });
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LENGTH {
            violations.push(Violation::CampaignDescriptionTooLong {
                maximum_length: MAX_DESCRIPTION_LENGTH,
                current_length: self.description.chars().count(),
            });
        }
        if self.budget < 0.0 {
            violations.push(Violation::CampaignBudgetNegative {
                request_budget: self.budget,
            });
        }
        if self.end_date < self.start_date {
            violations.push(Violation::CampaignEndsBeforeItStarts {
                start_date: self.start_date,
                end_date: self.end_date,
            });
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(Error::CampaignViolatesConstraints { violations })
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignFilter {
    pub status: Option<CampaignStatus>,
    pub category: Option<Category>,
    pub sort: Option<CampaignSort>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CampaignSort {
    pub field: SortField,
    pub order: SortOrder,
}

impl CampaignSort {
    pub fn from_query(sort_by: Option<&str>, sort_order: Option<&str>) -> Option<CampaignSort> {
        let field = SortField::parse(sort_by?)?;
        let order = match sort_order {
            Some("desc") => SortOrder::Descending,
            _ => SortOrder::Ascending,
        };

        Some(CampaignSort { field, order })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortField {
    Budget,
    StartDate,
}

impl SortField {
    // Unrecognized field names are ignored rather than rejected
    pub fn parse(s: &str) -> Option<SortField> {
        match s {
            "budget" => Some(SortField::Budget),
            "start_date" => Some(SortField::StartDate),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            SortField::Budget => "budget",
            SortField::StartDate => "start_date",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}
