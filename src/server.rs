pub(crate) mod app_state;
mod extractors;
mod handlers;
mod http_errors;
mod status;

use crate::{
    api::Api,
    config::Config,
    database::Database,
    network::{MailgunGateway, Network, create_http_client},
    scheduler::Scheduler,
    server::app_state::AppState,
};
use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use anyhow::{Context, anyhow};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

#[tokio::main]
pub async fn run(config: Config, port: u16) -> Result<(), anyhow::Error> {
    let database = Database::create(&config.db).await?;

    let mailgun_config = config.mailgun.clone().ok_or_else(|| {
        anyhow!("Mailgun configuration (`mailgun`) is required to send emails.")
    })?;
    let email_gateway = Arc::new(MailgunGateway::new(
        create_http_client(&config.http.client)?,
        mailgun_config,
    ));

    let api = Arc::new(Api::new(
        config.clone(),
        database,
        Network::new(email_gateway),
    ));

    Scheduler::start(api.clone()).await?;

    let state = web::Data::new(AppState::new(config, api));
    let http_server = HttpServer::new(move || {
        let cors = match state.config.http.cors_origins {
            Some(ref origins) => origins
                .iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
                .allow_any_method()
                .allow_any_header(),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(middleware::Compat::new(middleware::Compress::default()))
            .wrap(middleware::NormalizePath::trim())
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/status", web::get().to(handlers::status_get))
                    .route("/signup", web::post().to(handlers::security_signup))
                    .route("/login", web::post().to(handlers::security_login))
                    .service(
                        web::scope("/users")
                            .route("", web::get().to(handlers::users_list))
                            .route("/me", web::get().to(handlers::users_get_self))
                            .route("/{user_id}", web::get().to(handlers::users_get))
                            .route("/{user_id}", web::put().to(handlers::users_update))
                            .route("/{user_id}", web::delete().to(handlers::users_remove)),
                    )
                    .service(
                        web::scope("/emails")
                            .route("/send", web::post().to(handlers::emails_send))
                            .route("/jobs", web::post().to(handlers::emails_jobs_schedule))
                            .route("/jobs", web::get().to(handlers::emails_jobs_list))
                            .route(
                                "/jobs/{job_id}",
                                web::delete().to(handlers::emails_jobs_remove),
                            )
                            .route("/jobs/{job_id}/run", web::post().to(handlers::emails_jobs_run)),
                    ),
            )
    });

    let http_server_url = format!("0.0.0.0:{port}");
    let http_server = http_server
        .bind(&http_server_url)
        .with_context(|| format!("Failed to bind to {http_server_url}"))?;

    tracing::info!("Mailcast API server is available at http://{http_server_url}");

    http_server
        .run()
        .await
        .context("Failed to run Mailcast API server")
}
