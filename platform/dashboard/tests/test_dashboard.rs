use chrono::{TimeZone, Utc};
use reqwest::header;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::sync::Arc;
use tickerboard::dashboard::Dashboard;
use tickerboard::data::{Interface as DataInterface, MockInterface};
use tickerboard::schema::{PriceHistory, PricePoint};

fn spawn_app(provider: MockInterface) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind to port");
    let port = listener.local_addr().unwrap().port();

    let provider: Arc<dyn DataInterface> = Arc::new(provider);
    let server = dashboard::run(listener, Dashboard::new(provider)).unwrap();
    let _ = tokio::spawn(server);

    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn test_health_check() -> Result<(), Box<dyn std::error::Error>> {
    let address = spawn_app(MockInterface::new());

    let response = reqwest::get(format!("{}/health", address)).await?;

    assert!(response.status().is_success());

    Ok(())
}

#[tokio::test]
async fn test_page_is_served() -> Result<(), Box<dyn std::error::Error>> {
    let address = spawn_app(MockInterface::new());

    let response = reqwest::get(&address).await?;

    assert!(response.status().is_success());

    let body = response.text().await?;
    assert!(body.contains(r#"id="ticker-search""#));
    assert!(body.contains(r#"id="ticker-graph""#));

    Ok(())
}

#[tokio::test]
async fn test_ticker_search_flow() -> Result<(), Box<dyn std::error::Error>> {
    let mut provider = MockInterface::new();
    provider
        .expect_fetch_price_history()
        .withf(|query| query.symbol.as_str() == "AAPL")
        .times(1)
        .returning(|_| {
            Ok(PriceHistory::new(vec![
                PricePoint {
                    timestamp: Utc.with_ymd_and_hms(2023, 1, 3, 14, 30, 0).unwrap(),
                    open: 130.28,
                    close: 125.07,
                },
                PricePoint {
                    timestamp: Utc.with_ymd_and_hms(2023, 1, 4, 14, 30, 0).unwrap(),
                    open: 126.89,
                    close: 126.36,
                },
            ]))
        });

    let address = spawn_app(provider);

    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/update", address))
        .header(header::CONTENT_TYPE, "application/json")
        .body(
            json!({
                "state": {
                    "start_date": "2023-01-01",
                    "end_date": "2023-01-10",
                    "interval": "1d",
                    "ticker": null
                },
                "action": {"field": "ticker", "value": "AAPL"}
            })
            .to_string(),
        )
        .send()
        .await?;

    assert!(response.status().is_success());

    let body: Value = response.json().await?;

    assert_eq!(body["outputs"][0]["value"]["content"], "Ticker: AAPL");

    let figure = &body["outputs"][1]["value"]["content"];
    assert_eq!(figure["id"], "my-graph");
    assert_eq!(figure["layout"]["showlegend"], true);
    assert_eq!(
        figure["data"][0]["x"],
        json!(["2023-01-03T14:30:00Z", "2023-01-04T14:30:00Z"])
    );
    assert_eq!(figure["data"][1]["y"], json!([125.07, 126.36]));

    Ok(())
}
