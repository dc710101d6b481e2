use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use tickerboard::dashboard::{Dashboard, OutputUpdate};
use tickerboard::store::{Action, InputState};

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    #[serde(default)]
    pub state: InputState,
    #[serde(default)]
    pub action: Option<Action>,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub state: InputState,
    pub outputs: Vec<OutputUpdate>,
}

#[post("/update")]
pub async fn update(
    dashboard: web::Data<Dashboard>,
    request: web::Json<UpdateRequest>,
) -> web::Json<UpdateResponse> {
    let UpdateRequest { state, action } = request.into_inner();

    let (state, outputs) = dashboard.update(state, action).await;

    web::Json(UpdateResponse { state, outputs })
}
