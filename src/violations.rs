use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING-KEBAB-CASE")]
pub enum Violation {
    CampaignNameEmpty,
    CampaignNameTooLong {
        maximum_length: usize,
        current_length: usize,
    },
    CampaignDescriptionTooLong {
        maximum_length: usize,
        current_length: usize,
    },
    CampaignBudgetNegative {
        request_budget: f64,
    },
    CampaignEndsBeforeItStarts {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
}
