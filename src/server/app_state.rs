use crate::{
    api::Api,
    config::Config,
    server::status::{Status, StatusLevel},
};
use std::sync::{Arc, RwLock};

pub struct AppState {
    pub config: Config,
    pub status: RwLock<Status>,
    pub api: Arc<Api>,
}

impl AppState {
    pub fn new(config: Config, api: Arc<Api>) -> Self {
        Self {
            config,

            status: RwLock::new(Status {
                version: env!("CARGO_PKG_VERSION").to_string(),
                level: StatusLevel::Available,
            }),

            api,
        }
    }
}
