use campaign_tracker::news::manager::{self, NewsGateway};
use campaign_tracker::Error;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> NewsGateway {
    NewsGateway::with_base_url(Some("test-key".to_string()), server.uri())
}

#[tokio::test]
async fn missing_api_key_fails_without_calling_the_api() {
    let server = MockServer::start().await;
    let gateway = NewsGateway::with_base_url(None, server.uri());

    let result = manager::fetch_news(&gateway, Some("rust")).await;

    assert_eq!(result.unwrap_err(), Error::NewsServiceUnavailable);
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn keyword_searches_the_everything_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/everything"))
        .and(query_param("q", "layoffs"))
        .and(query_param("apiKey", "test-key"))
        .and(query_param("pageSize", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "articles": [
                {
                    "title": "Tech layoffs slow",
                    "description": "Hiring picks back up",
                    "source": { "name": "The Register" },
                    "url": "https://example.com/layoffs",
                    "publishedAt": "2024-03-01T10:00:00Z"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let articles = manager::fetch_news(&gateway_for(&server), Some("layoffs"))
        .await
        .unwrap();

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "Tech layoffs slow".to_string());
    assert_eq!(articles[0].description, Some("Hiring picks back up".to_string()));
    assert_eq!(articles[0].source, "The Register".to_string());
    assert_eq!(articles[0].url, "https://example.com/layoffs".to_string());
    assert_eq!(articles[0].published_at, "2024-03-01T10:00:00Z".to_string());
}

#[tokio::test]
async fn no_keyword_requests_top_headlines() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .and(query_param("country", "us"))
        .and(query_param("apiKey", "test-key"))
        .and(query_param("pageSize", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "articles": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let articles = manager::fetch_news(&gateway_for(&server), None).await.unwrap();

    assert_eq!(articles.len(), 0);
}

#[tokio::test]
async fn empty_keyword_requests_top_headlines() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .and(query_param("country", "us"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "articles": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let articles = manager::fetch_news(&gateway_for(&server), Some(""))
        .await
        .unwrap();

    assert_eq!(articles.len(), 0);
}

#[tokio::test]
async fn rate_limited_upstream_maps_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let result = manager::fetch_news(&gateway_for(&server), Some("rust")).await;

    assert_eq!(result.unwrap_err(), Error::NewsRateLimited);
}

#[tokio::test]
async fn failing_upstream_maps_to_service_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = manager::fetch_news(&gateway_for(&server), Some("rust")).await;

    assert_eq!(result.unwrap_err(), Error::NewsServiceUnavailable);
}

#[tokio::test]
async fn unreachable_upstream_maps_to_service_unavailable() {
    // Nothing listens on port 1
    let gateway =
        NewsGateway::with_base_url(Some("test-key".to_string()), "http://127.0.0.1:1".to_string());

    let result = manager::fetch_news(&gateway, None).await;

    assert_eq!(result.unwrap_err(), Error::NewsServiceUnavailable);
}

#[tokio::test]
async fn missing_articles_key_yields_an_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .mount(&server)
        .await;

    let articles = manager::fetch_news(&gateway_for(&server), None).await.unwrap();

    assert_eq!(articles.len(), 0);
}

#[tokio::test]
async fn sparse_articles_are_normalized_with_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "articles": [
                { "title": "No source given", "url": "https://example.com/a" },
                { "source": { "name": null }, "description": null },
                { "source": { "name": "Reuters" } }
            ]
        })))
        .mount(&server)
        .await;

    let articles = manager::fetch_news(&gateway_for(&server), Some("anything"))
        .await
        .unwrap();

    assert_eq!(articles.len(), 3);

    assert_eq!(articles[0].title, "No source given".to_string());
    assert_eq!(articles[0].source, "Unknown".to_string());

    assert_eq!(articles[1].title, "".to_string());
    assert_eq!(articles[1].description, None);
    assert_eq!(articles[1].source, "Unknown".to_string());
    assert_eq!(articles[1].url, "".to_string());
    assert_eq!(articles[1].published_at, "".to_string());

    assert_eq!(articles[2].source, "Reuters".to_string());
}
