//! Notification preference service
//!
//! Per-user channel toggles for the dashboard's event categories. Users who
//! never saved preferences get everything enabled.

use std::sync::Arc;

use serde::Deserialize;
use shared::models::{ChannelToggles, NotificationPreferences};
use uuid::Uuid;

use crate::error::AppResult;
use crate::store::MemStore;

/// Service behind the notification settings page
#[derive(Clone)]
pub struct NotificationPreferenceService {
    store: Arc<MemStore>,
}

/// Partial update; absent categories keep their current toggles
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePreferencesInput {
    pub order_updates: Option<ChannelToggles>,
    pub delivery_updates: Option<ChannelToggles>,
    pub reception_alerts: Option<ChannelToggles>,
}

impl NotificationPreferenceService {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    /// Current preferences for a user, defaulting to all channels on
    pub fn get(&self, user_id: Uuid) -> NotificationPreferences {
        self.store
            .notification_preferences
            .get(&user_id)
            .unwrap_or_else(|| NotificationPreferences::default_for(user_id))
    }

    /// Merge an update over the current (or default) preferences
    pub fn update(
        &self,
        user_id: Uuid,
        input: UpdatePreferencesInput,
    ) -> AppResult<NotificationPreferences> {
        let mut preferences = self.get(user_id);
        if let Some(toggles) = input.order_updates {
            preferences.order_updates = toggles;
        }
        if let Some(toggles) = input.delivery_updates {
            preferences.delivery_updates = toggles;
        }
        if let Some(toggles) = input.reception_alerts {
            preferences.reception_alerts = toggles;
        }

        self.store
            .notification_preferences
            .insert(user_id, preferences.clone());
        tracing::info!(user = %user_id, "notification preferences updated");
        Ok(preferences)
    }
}
