use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum UpdatePhase {
    Idle,
    Checking,
    Available,
    NotAvailable,
    Downloading,
    Downloaded,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateInfo {
    pub(crate) version: String,
    pub(crate) current_version: String,
    pub(crate) release_date: Option<String>,
    pub(crate) release_notes: Option<String>,
}

impl UpdateInfo {
    pub(crate) fn current(current_version: &str) -> Self {
        Self {
            version: current_version.to_string(),
            current_version: current_version.to_string(),
            release_date: None,
            release_notes: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UpdateEvent {
    CheckingForUpdate,
    UpdateAvailable(UpdateInfo),
    UpdateNotAvailable(UpdateInfo),
    UpdateDownloading(UpdateInfo),
    UpdateDownloaded(UpdateInfo),
    Error(String),
}

impl UpdateEvent {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::CheckingForUpdate => "checking-for-update",
            Self::UpdateAvailable(_) => "update-available",
            Self::UpdateNotAvailable(_) => "update-not-available",
            Self::UpdateDownloading(_) => "update-downloading",
            Self::UpdateDownloaded(_) => "update-downloaded",
            Self::Error(_) => "error",
        }
    }

    /// Single log line for this event: the name, then the payload as JSON.
    pub(crate) fn log_line(&self) -> String {
        let payload = match self {
            Self::CheckingForUpdate => None,
            Self::UpdateAvailable(info)
            | Self::UpdateNotAvailable(info)
            | Self::UpdateDownloading(info)
            | Self::UpdateDownloaded(info) => serde_json::to_string(info).ok(),
            Self::Error(message) => serde_json::to_string(message).ok(),
        };

        match payload {
            Some(payload) => format!("{} {}", self.name(), payload),
            None => self.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UpdateTransitionError {
    pub(crate) from: UpdatePhase,
    pub(crate) event: &'static str,
}

impl fmt::Display for UpdateTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "update event '{}' is not valid in phase {:?}",
            self.event, self.from
        )
    }
}

impl std::error::Error for UpdateTransitionError {}

pub(crate) fn transition(
    from: UpdatePhase,
    event: &UpdateEvent,
) -> Result<UpdatePhase, UpdateTransitionError> {
    use UpdatePhase::*;

    let next = match (from, event) {
        (Idle, UpdateEvent::CheckingForUpdate) => Checking,
        (Checking, UpdateEvent::UpdateAvailable(_)) => Available,
        (Checking, UpdateEvent::UpdateNotAvailable(_)) => NotAvailable,
        (Available, UpdateEvent::UpdateDownloading(_)) => Downloading,
        (Downloading, UpdateEvent::UpdateDownloaded(_)) => Downloaded,
        (Checking | Available | Downloading, UpdateEvent::Error(_)) => Error,
        _ => {
            return Err(UpdateTransitionError {
                from,
                event: event.name(),
            })
        }
    };
    Ok(next)
}
