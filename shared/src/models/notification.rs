//! Notification preference models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-user notification channel toggles, per event category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub user_id: Uuid,
    pub order_updates: ChannelToggles,
    pub delivery_updates: ChannelToggles,
    pub reception_alerts: ChannelToggles,
}

impl NotificationPreferences {
    /// Defaults for a user who has never saved preferences: everything on
    pub fn default_for(user_id: Uuid) -> Self {
        Self {
            user_id,
            order_updates: ChannelToggles::default(),
            delivery_updates: ChannelToggles::default(),
            reception_alerts: ChannelToggles::default(),
        }
    }
}

/// Delivery channels for one event category
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChannelToggles {
    pub email: bool,
    pub in_app: bool,
}

impl Default for ChannelToggles {
    fn default() -> Self {
        Self {
            email: true,
            in_app: true,
        }
    }
}
