use actix_web::web::{self, Data, JsonConfig, PathConfig, QueryConfig};
use actix_web::{App, HttpServer, ResponseError};
use mongodb::Client;
use tracing::{info, Level};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::fmt::format::FmtSpan;

use campaign_tracker::database::{Database, MongoDatabase};
use campaign_tracker::news::manager::NewsGateway;
use campaign_tracker::{campaign, dashboard, news, Error};

#[actix_web::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_span_events(FmtSpan::NEW)
        .compact()
        .init();

    let uri = std::env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    info!("connecting to db: {}", uri);
    let db = Client::with_uri_str(&uri).await?.database("campaign_tracker");
    let db = MongoDatabase::new(db);

    let news_api_key = std::env::var("NEWS_API_KEY").ok();
    if news_api_key.is_none() {
        info!("NEWS_API_KEY is not set; news requests will be rejected");
    }
    let gateway = NewsGateway::new(news_api_key);

    HttpServer::new(move || {
        App::new()
            .app_data(JsonConfig::default().error_handler(|err, _req| {
                // format json errors with custom format
                Error::InvalidJson(err).into()
            }))
            .app_data(PathConfig::default().error_handler(|err, _req| {
                // format path errors with custom format
                Error::InvalidPath(err).into()
            }))
            .app_data(QueryConfig::default().error_handler(|err, _req| {
                // format query errors with custom format
                Error::InvalidQuery(err).into()
            }))
            .app_data(Data::new(Box::new(db.clone()) as Box<dyn Database>))
            .app_data(Data::new(gateway.clone()))
            .wrap(TracingLogger::default())
            .service(campaign::endpoints::create_campaign)
            .service(campaign::endpoints::get_campaigns)
            .service(campaign::endpoints::get_campaign_by_id)
            .service(campaign::endpoints::update_campaign)
            .service(campaign::endpoints::delete_campaign)
            .service(dashboard::endpoints::get_dashboard_summary)
            .service(dashboard::endpoints::get_status_distribution)
            .service(dashboard::endpoints::get_budget_by_category)
            .service(dashboard::endpoints::get_campaigns_over_time)
            .service(news::endpoints::get_news)
            .default_service(web::to(|| async { Error::PathDoesNotExist.error_response() }))
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await?;

    Ok(())
}
