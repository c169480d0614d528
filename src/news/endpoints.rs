use actix_web::get;
use actix_web::web::{Data, Json, Query};
use serde::Deserialize;

use crate::error::Error;

use super::manager::{self, NewsGateway};
use super::NewsArticle;

#[derive(Clone, Debug, Deserialize)]
pub struct NewsQuery {
    pub keyword: Option<String>,
}

#[get("/api/news")]
#[tracing::instrument(skip(gateway))]
pub async fn get_news(
    gateway: Data<NewsGateway>,
    query: Query<NewsQuery>,
) -> Result<Json<Vec<NewsArticle>>, Error> {
    let query = query.into_inner();

    let articles = manager::fetch_news(&gateway, query.keyword.as_deref()).await?;

    Ok(Json(articles))
}
