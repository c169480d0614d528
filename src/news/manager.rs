use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::warn;

use crate::error::Error;

use super::NewsArticle;

pub const NEWS_API_BASE_URL: &str = "https://newsapi.org/v2";

const PAGE_SIZE: u32 = 20;
const DEFAULT_COUNTRY: &str = "us";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct NewsGateway {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl NewsGateway {
    pub fn new(api_key: Option<String>) -> NewsGateway {
        NewsGateway::with_base_url(api_key, NEWS_API_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: Option<String>, base_url: String) -> NewsGateway {
        NewsGateway {
            api_key,
            base_url,
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

#[tracing::instrument(skip(gateway))]
pub async fn fetch_news(
    gateway: &NewsGateway,
    keyword: Option<&str>,
) -> Result<Vec<NewsArticle>, Error> {
    let api_key = match &gateway.api_key {
        Some(api_key) => api_key,
        None => return Err(Error::NewsServiceUnavailable),
    };

    let request = match keyword {
        Some(keyword) if !keyword.is_empty() => gateway
            .client
            .get(format!("{}/everything", gateway.base_url))
            .query(&[("q", keyword)]),
        _ => gateway
            .client
            .get(format!("{}/top-headlines", gateway.base_url))
            .query(&[("country", DEFAULT_COUNTRY)]),
    };

    let response = request
        .query(&[("apiKey", api_key.as_str())])
        .query(&[("pageSize", PAGE_SIZE)])
        .send()
        .await
        .map_err(|err| {
            warn!("news api request failed: {}", err);
            Error::NewsServiceUnavailable
        })?;

    match response.status() {
        StatusCode::OK => {}
        StatusCode::TOO_MANY_REQUESTS => return Err(Error::NewsRateLimited),
        status => {
            warn!("news api returned status {}", status);
            return Err(Error::NewsServiceUnavailable);
        }
    }

    let payload: NewsApiResponse = response.json().await.map_err(|err| {
        warn!("news api response could not be parsed: {}", err);
        Error::NewsServiceUnavailable
    })?;

    Ok(payload.articles.into_iter().map(normalize).collect())
}

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Debug, Default, Deserialize)]
struct RawArticle {
    title: Option<String>,
    description: Option<String>,
    source: Option<RawSource>,
    url: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSource {
    name: Option<String>,
}

fn normalize(article: RawArticle) -> NewsArticle {
    NewsArticle {
        title: article.title.unwrap_or_default(),
        description: article.description,
        source: article
            .source
            .and_then(|source| source.name)
            .unwrap_or_else(|| "Unknown".to_string()),
        url: article.url.unwrap_or_default(),
        published_at: article.published_at.unwrap_or_default(),
    }
}
