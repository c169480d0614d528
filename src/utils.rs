use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::{DeserializeOwned, Error as DeError, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SuccessBody {
    pub message: String,
}

impl SuccessBody {
    pub fn new(message: &str) -> SuccessBody {
        SuccessBody {
            message: message.to_string(),
        }
    }
}

// Query parameters sent as empty strings mean "not provided"
pub fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(text) => {
            let text_deserializer: StrDeserializer<ValueError> = text.into_deserializer();
            T::deserialize(text_deserializer)
                .map(Some)
                .map_err(DeError::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::CampaignStatus;

    #[derive(Debug, Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        status: Option<CampaignStatus>,
    }

    #[test]
    fn empty_string_reads_as_none() {
        let params: Params = serde_json::from_str(r#"{ "status": "" }"#).unwrap();
        assert_eq!(params.status, None);
    }

    #[test]
    fn missing_key_reads_as_none() {
        let params: Params = serde_json::from_str("{}").unwrap();
        assert_eq!(params.status, None);
    }

    #[test]
    fn present_value_reads_as_some() {
        let params: Params = serde_json::from_str(r#"{ "status": "active" }"#).unwrap();
        assert_eq!(params.status, Some(CampaignStatus::Active));
    }
}
