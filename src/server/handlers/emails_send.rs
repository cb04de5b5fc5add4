use crate::{server::app_state::AppState, users::User};
use actix_web::{HttpResponse, Responder, web};
use serde_derive::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub struct SendEmailParams {
    pub to_emails: Vec<String>,
    pub subject: String,
}

/// Sends a one-off email through the gateway, outside of any recurring schedule.
pub async fn emails_send(
    _user: User,
    state: web::Data<AppState>,
    body_params: web::Json<SendEmailParams>,
) -> impl Responder {
    let body_params = body_params.into_inner();
    if body_params.to_emails.is_empty() {
        return HttpResponse::BadRequest()
            .json(json!({ "message": "At least one recipient is required." }));
    }

    match state
        .api
        .network
        .email_gateway
        .send(&body_params.to_emails, &body_params.subject)
        .await
    {
        Ok(receipt) => HttpResponse::Ok().json(receipt),
        Err(err) => {
            tracing::error!("Failed to send email: {err:?}");
            HttpResponse::BadGateway().json(json!({ "message": "Failed to send email." }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SendEmailParams, emails_send};
    use crate::{
        network::{Network, tests::StubEmailGateway},
        tests::{MockUserBuilder, mock_app_state_with_network},
    };
    use actix_web::{Responder, body::MessageBody, test::TestRequest, web};
    use std::sync::Arc;
    use time::OffsetDateTime;
    use uuid::uuid;

    fn mock_user() -> crate::users::User {
        MockUserBuilder::new(
            uuid!("00000000-0000-0000-0000-000000000001").into(),
            "dev",
            "dev@mailcast.dev",
            OffsetDateTime::from_unix_timestamp(946720800).unwrap(),
        )
        .build()
    }

    #[tokio::test]
    async fn sends_email_through_the_gateway() -> anyhow::Result<()> {
        let gateway = Arc::new(StubEmailGateway::new_ok());
        let state = web::Data::new(mock_app_state_with_network(Network::new(gateway.clone()))?);

        let request = TestRequest::default().to_http_request();
        let response = emails_send(
            mock_user(),
            state,
            web::Json(SendEmailParams {
                to_emails: vec!["a@example.com".to_string()],
                subject: "S".to_string(),
            }),
        )
        .await
        .respond_to(&request);

        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(
            gateway.sent(),
            vec![(vec!["a@example.com".to_string()], "S".to_string())]
        );

        Ok(())
    }

    #[tokio::test]
    async fn fails_with_empty_recipients() -> anyhow::Result<()> {
        let gateway = Arc::new(StubEmailGateway::new_ok());
        let state = web::Data::new(mock_app_state_with_network(Network::new(gateway.clone()))?);

        let request = TestRequest::default().to_http_request();
        let response = emails_send(
            mock_user(),
            state,
            web::Json(SendEmailParams {
                to_emails: vec![],
                subject: "S".to_string(),
            }),
        )
        .await
        .respond_to(&request);

        assert_eq!(response.status().as_u16(), 400);
        assert!(gateway.sent().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn maps_gateway_failures_to_bad_gateway() -> anyhow::Result<()> {
        let state = web::Data::new(mock_app_state_with_network(Network::new(Arc::new(
            StubEmailGateway::new_err(),
        )))?);

        let request = TestRequest::default().to_http_request();
        let response = emails_send(
            mock_user(),
            state,
            web::Json(SendEmailParams {
                to_emails: vec!["a@example.com".to_string()],
                subject: "S".to_string(),
            }),
        )
        .await
        .respond_to(&request);

        assert_eq!(response.status().as_u16(), 502);
        let body = response.into_body().try_into_bytes().ok().unwrap();
        assert_eq!(
            body,
            actix_web::web::Bytes::from_static(b"{\"message\":\"Failed to send email.\"}")
        );

        Ok(())
    }
}
