use tauri::{AppHandle, Manager, WebviewWindow};

use crate::MainWindowState;

fn current_main_window<F>(app_handle: &AppHandle, action: &str, log: F) -> Option<WebviewWindow>
where
    F: Fn(&str),
{
    let window = app_handle.state::<MainWindowState>().current();
    if window.is_none() {
        log(&format!("{action} skipped: main window not found"));
    }
    window
}

pub fn show_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = current_main_window(app_handle, "show_main_window", &log) else {
        return;
    };

    if let Err(error) = window.unminimize() {
        log(&format!("failed to unminimize main window: {error}"));
    }
    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
}

pub fn reload_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = current_main_window(app_handle, "reload_main_window", &log) else {
        return;
    };

    if let Err(error) = window.eval("window.location.reload()") {
        log(&format!("failed to reload main window: {error}"));
    }
}

pub fn close_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = current_main_window(app_handle, "close_main_window", &log) else {
        return;
    };

    if let Err(error) = window.close() {
        log(&format!("failed to close main window: {error}"));
    }
}

pub fn toggle_main_window_fullscreen<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = current_main_window(app_handle, "toggle_main_window_fullscreen", &log)
    else {
        return;
    };

    match window.is_fullscreen() {
        Ok(fullscreen) => {
            if let Err(error) = window.set_fullscreen(!fullscreen) {
                log(&format!("failed to toggle main window fullscreen: {error}"));
            }
        }
        Err(error) => log(&format!(
            "failed to read main window fullscreen state: {error}"
        )),
    }
}

#[cfg(any(debug_assertions, feature = "devtools"))]
pub fn open_main_window_devtools<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    if let Some(window) = current_main_window(app_handle, "open_main_window_devtools", &log) {
        window.open_devtools();
    }
}

#[cfg(not(any(debug_assertions, feature = "devtools")))]
pub fn open_main_window_devtools<F>(_app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    log("developer tools are not available in this build");
}

#[cfg(any(debug_assertions, feature = "devtools"))]
pub fn toggle_main_window_devtools<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = current_main_window(app_handle, "toggle_main_window_devtools", &log)
    else {
        return;
    };

    if window.is_devtools_open() {
        window.close_devtools();
    } else {
        window.open_devtools();
    }
}

#[cfg(not(any(debug_assertions, feature = "devtools")))]
pub fn toggle_main_window_devtools<F>(_app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    log("developer tools are not available in this build");
}
