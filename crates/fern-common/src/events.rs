use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::OverlayKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    ConfigReloaded,
    ModalChanged { overlay: OverlayKind, visible: bool },
    StatsUpdated,
    ProfileCountUpdated(u64),
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// Clone the underlying sender for publishing from callbacks and tasks.
    pub fn clone_sender(&self) -> broadcast::Sender<Event> {
        self.sender.clone()
    }
}
