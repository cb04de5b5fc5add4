use crate::{server::app_state::AppState, users::User};
use actix_web::{
    Error, FromRequest, HttpRequest,
    dev::Payload,
    error::{ErrorForbidden, ErrorInternalServerError, ErrorUnauthorized},
    web,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use anyhow::anyhow;
use std::{future::Future, pin::Pin};

impl FromRequest for User {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    /// Extracts the authenticated user from the `Authorization: Bearer <token>` header: the token
    /// is validated and the user it was issued to is looked up in the database.
    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let state = web::Data::<AppState>::extract(&req).await?;
            let bearer_auth = Option::<BearerAuth>::extract(&req)
                .await?
                .ok_or_else(|| ErrorUnauthorized(anyhow!("Unauthorized")))?;

            let claims = match state.api.security().validate_token(bearer_auth.token()) {
                Ok(claims) => claims,
                Err(err) => {
                    tracing::warn!("Failed to validate access token: {err:?}");
                    return Err(ErrorUnauthorized(anyhow!("Unauthorized")));
                }
            };

            match state.api.users().get_by_username(&claims.sub).await {
                Ok(Some(user)) if user.disabled => Err(ErrorForbidden(anyhow!("Forbidden"))),
                Ok(Some(user)) => Ok(user),
                Ok(None) => Err(ErrorUnauthorized(anyhow!("Unauthorized"))),
                Err(err) => {
                    tracing::error!("Failed to extract user information due to: {err:?}");
                    Err(ErrorInternalServerError(anyhow!("Internal server error")))
                }
            }
        })
    }
}
