use bevy::prelude::*;

/// Request for the notification surface. With `with_restart` the banner gets
/// a "Try Again" button and stays until acted on; without it the banner
/// dismisses itself after the configured timeout.
#[derive(Event, Debug, Clone)]
pub struct ShowNotification {
    pub message: String,
    pub with_restart: bool,
}

impl ShowNotification {
    pub fn transient(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            with_restart: false,
        }
    }

    pub fn with_restart(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            with_restart: true,
        }
    }
}

/// Tear down the finished round and start a fresh one.
#[derive(Event, Debug, Default)]
pub struct RestartRequested;
