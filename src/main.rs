#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod bridge_commands;
mod external_links;
mod lifecycle;
mod logging;
mod main_window;
mod menu_actions;
mod menu_handler;
mod menu_setup;
mod runtime_config;
mod runtime_paths;
mod update_notifier;
mod update_state;
mod window_actions;

pub(crate) use app_constants::*;
pub(crate) use app_types::{BridgeResult, MainWindowState, RevealAction};
pub(crate) use logging::{
    append_desktop_log, append_ipc_log, append_startup_log, append_update_log, LoggingState,
};
pub(crate) use runtime_config::RuntimeConfig;
pub(crate) use update_notifier::UpdateNotifier;

fn main() {
    app_runtime::run();
}
