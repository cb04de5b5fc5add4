use crate::{error::Error as MailcastError, server::app_state::AppState};
use actix_web::{HttpResponse, web};
use serde_derive::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

pub async fn security_login(
    state: web::Data<AppState>,
    body_params: web::Json<LoginParams>,
) -> Result<HttpResponse, MailcastError> {
    let body_params = body_params.into_inner();
    let user = state
        .api
        .security()
        .authenticate(&body_params.username, &body_params.password)
        .await?;

    let Some(user) = user else {
        return Ok(HttpResponse::Unauthorized()
            .json(json!({ "message": "Invalid username or password." })));
    };

    let access_token = state.api.security().issue_token(&user)?;
    Ok(HttpResponse::Ok().json(json!({ "access_token": access_token, "token_type": "bearer" })))
}
