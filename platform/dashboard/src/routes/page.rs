use actix_web::http::header::ContentType;
use actix_web::{get, web, HttpResponse};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tickerboard::schema::Interval;

const PAGE_TEMPLATE: &str = include_str!("../../static/index.html");

#[derive(Debug, Serialize, PartialEq)]
pub struct IntervalOption {
    label: &'static str,
    value: Interval,
}

fn interval_options() -> Vec<IntervalOption> {
    Interval::ALL
        .into_iter()
        .map(|interval| IntervalOption {
            label: interval.label(),
            value: interval,
        })
        .collect()
}

fn render_page(today: NaiveDate) -> String {
    let default_interval = Interval::default();

    let options = Interval::ALL
        .into_iter()
        .map(|interval| {
            let selected = if interval == default_interval {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                interval.as_str(),
                selected,
                interval.label()
            )
        })
        .collect::<Vec<String>>()
        .join("\n        ");

    PAGE_TEMPLATE
        .replace("{{TODAY}}", &today.format("%Y-%m-%d").to_string())
        .replace("{{DEFAULT_INTERVAL}}", default_interval.as_str())
        .replace("{{INTERVAL_OPTIONS}}", &options)
}

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_page(Utc::now().date_naive()))
}

#[get("/intervals")]
pub async fn intervals() -> web::Json<Vec<IntervalOption>> {
    web::Json(interval_options())
}
