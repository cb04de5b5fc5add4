use crate::{
    error::Error as MailcastError,
    server::app_state::AppState,
    users::UserSignupParams,
};
use actix_web::{HttpResponse, web};

pub async fn security_signup(
    state: web::Data<AppState>,
    body_params: web::Json<UserSignupParams>,
) -> Result<HttpResponse, MailcastError> {
    let user = state.api.users().signup(body_params.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}
