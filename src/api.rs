use crate::{config::Config, database::Database, network::Network, scheduler::RecurringJobTable};

pub struct Api {
    pub db: Database,
    pub config: Config,
    pub network: Network,
    pub recurring_jobs: RecurringJobTable,
}

impl Api {
    /// Creates a new API aggregate with a fresh, empty recurring job table.
    pub fn new(config: Config, database: Database, network: Network) -> Self {
        Self {
            config,
            db: database,
            network,
            recurring_jobs: RecurringJobTable::default(),
        }
    }
}

impl AsRef<Api> for Api {
    fn as_ref(&self) -> &Self {
        self
    }
}
