use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::a002_inquiry::notification::{Notifier, OutboxNotifier};
use crate::shared::config::Config;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    /// State with the outbox notifier writing to the same database
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        let notifier: Arc<dyn Notifier> = Arc::new(OutboxNotifier::new(db.clone()));
        Self {
            db,
            config: Arc::new(config),
            notifier,
        }
    }
}
