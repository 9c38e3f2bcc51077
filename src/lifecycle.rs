use tauri::{AppHandle, ExitRequestApi, Manager};

use crate::{main_window, window_actions, MainWindowState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExitRequestDecision {
    KeepRunning,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActivateDecision {
    CreateMainWindow,
    FocusExisting,
}

/// macOS keeps applications alive after their last window closes.
pub(crate) fn keeps_running_without_windows(os: &str) -> bool {
    os == "macos"
}

/// `exit_code` is `None` when the request comes from the last window
/// closing; explicit exits always go through.
pub(crate) fn decide_exit_request(os: &str, exit_code: Option<i32>) -> ExitRequestDecision {
    if exit_code.is_none() && keeps_running_without_windows(os) {
        ExitRequestDecision::KeepRunning
    } else {
        ExitRequestDecision::Exit
    }
}

pub(crate) fn decide_activate(has_main_window: bool) -> ActivateDecision {
    if has_main_window {
        ActivateDecision::FocusExisting
    } else {
        ActivateDecision::CreateMainWindow
    }
}

pub(crate) fn handle_exit_requested<F>(exit_code: Option<i32>, api: &ExitRequestApi, log: F)
where
    F: Fn(&str),
{
    match decide_exit_request(std::env::consts::OS, exit_code) {
        ExitRequestDecision::KeepRunning => {
            log("all windows closed; staying resident");
            api.prevent_exit();
        }
        ExitRequestDecision::Exit => {
            log(&format!("exit requested (code: {exit_code:?})"));
        }
    }
}

/// Dock re-activation or a second launch of the executable.
pub(crate) fn handle_activate<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str) + Copy + Send + Sync + 'static,
{
    let has_main_window = app_handle.state::<MainWindowState>().is_present();
    match decide_activate(has_main_window) {
        ActivateDecision::CreateMainWindow => {
            log("activate: recreating main window");
            if let Err(error) = main_window::create_main_window(app_handle, log) {
                log(&format!("failed to recreate main window: {error}"));
            }
        }
        ActivateDecision::FocusExisting => window_actions::show_main_window(app_handle, log),
    }
}
