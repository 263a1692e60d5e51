use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;

use crate::config::AppConfig;
use crate::models::BookingEvent;
use crate::services::store::BookingStore;
use crate::services::toast::Toast;

pub struct AppState {
    pub store: Mutex<BookingStore>,
    pub config: AppConfig,
    pub toast: Arc<Toast>,
    pub events_tx: broadcast::Sender<BookingEvent>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let (events_tx, _) = broadcast::channel(config.event_channel_capacity);
        let toast = Arc::new(Toast::new(config.toast_dismiss, events_tx.clone()));
        Self {
            store: Mutex::new(BookingStore::new()),
            config,
            toast,
            events_tx,
        }
    }

    /// Broadcast to SSE subscribers; dropped if nobody is listening.
    pub fn publish(&self, event: BookingEvent) {
        let _ = self.events_tx.send(event);
    }
}
