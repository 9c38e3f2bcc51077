use std::{
    sync::{Mutex, PoisonError},
    time::Instant,
};

use tauri::{AppHandle, Manager};
use tauri_plugin_updater::{Update, UpdaterExt};
use url::Url;

use crate::{
    append_update_log,
    update_state::{transition, UpdateEvent, UpdateInfo, UpdatePhase},
};

/// Tracks the update lifecycle separately from its log output.
#[derive(Debug)]
pub(crate) struct UpdateNotifier {
    phase: Mutex<UpdatePhase>,
}

impl Default for UpdateNotifier {
    fn default() -> Self {
        Self {
            phase: Mutex::new(UpdatePhase::Idle),
        }
    }
}

impl UpdateNotifier {
    pub(crate) fn phase(&self) -> UpdatePhase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn record<F>(&self, event: &UpdateEvent, log: F) -> UpdatePhase
    where
        F: Fn(&str),
    {
        log(&event.log_line());

        let mut phase = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        match transition(*phase, event) {
            Ok(next) => *phase = next,
            Err(error) => tracing::warn!(target: "updater", "{error}"),
        }
        *phase
    }
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct UpdateStatus {
    pub(crate) phase: UpdatePhase,
}

fn update_info(update: &Update) -> UpdateInfo {
    UpdateInfo {
        version: update.version.to_string(),
        current_version: update.current_version.to_string(),
        release_date: update.date.map(|date| date.to_string()),
        release_notes: update.body.clone(),
    }
}

/// Runs the single startup check. Window creation does not wait for this
/// task and nothing orders the two.
pub(crate) fn spawn_update_check(app_handle: AppHandle, feed_url: Url) {
    tauri::async_runtime::spawn(async move {
        run_update_check(&app_handle, feed_url, append_update_log).await;
    });
}

/// Used when the updater plugin could not be registered, so no check task
/// is spawned. The session still reports a terminal `error` phase.
pub(crate) fn record_updater_unavailable<F>(
    notifier: &UpdateNotifier,
    reason: &str,
    log: F,
) -> UpdatePhase
where
    F: Fn(&str),
{
    notifier.record(&UpdateEvent::CheckingForUpdate, &log);
    notifier.record(
        &UpdateEvent::Error(format!("failed to initialize updater plugin: {reason}")),
        &log,
    )
}

async fn run_update_check<F>(app_handle: &AppHandle, feed_url: Url, log: F)
where
    F: Fn(&str),
{
    let notifier = app_handle.state::<UpdateNotifier>();
    let current_version = app_handle.package_info().version.to_string();

    log(&format!("{feed_url} feedURL"));
    notifier.record(&UpdateEvent::CheckingForUpdate, &log);

    let updater = match app_handle
        .updater_builder()
        .endpoints(vec![feed_url])
        .and_then(|builder| builder.build())
    {
        Ok(updater) => updater,
        Err(error) => {
            notifier.record(
                &UpdateEvent::Error(format!("Failed to initialize updater: {error}")),
                &log,
            );
            return;
        }
    };

    let check_started = Instant::now();
    let checked = updater.check().await;
    tracing::debug!(
        target: "updater",
        elapsed_ms = u64::try_from(check_started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "update check finished"
    );

    let update = match checked {
        Ok(Some(update)) => update,
        Ok(None) => {
            notifier.record(
                &UpdateEvent::UpdateNotAvailable(UpdateInfo::current(&current_version)),
                &log,
            );
            return;
        }
        Err(error) => {
            notifier.record(&UpdateEvent::Error(error.to_string()), &log);
            return;
        }
    };

    let info = update_info(&update);
    notifier.record(&UpdateEvent::UpdateAvailable(info.clone()), &log);
    notifier.record(&UpdateEvent::UpdateDownloading(info.clone()), &log);

    // Installation is left to the user; the downloaded package is not applied.
    match update.download(|_, _| {}, || {}).await {
        Ok(_bytes) => {
            notifier.record(&UpdateEvent::UpdateDownloaded(info), &log);
        }
        Err(error) => {
            notifier.record(&UpdateEvent::Error(error.to_string()), &log);
        }
    }
}
