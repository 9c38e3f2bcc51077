use tauri::AppHandle;

use crate::{append_desktop_log, external_links, menu_actions, window_actions};

pub fn handle_menu_event(app_handle: &AppHandle, menu_id: &str) {
    match menu_actions::action_from_menu_id(menu_id) {
        Some(menu_actions::MenuAction::Open) => {
            append_desktop_log("menu open selected; no handler registered");
        }
        Some(menu_actions::MenuAction::CloseWindow) => {
            window_actions::close_main_window(app_handle, append_desktop_log)
        }
        Some(menu_actions::MenuAction::Reload) => {
            window_actions::reload_main_window(app_handle, append_desktop_log)
        }
        Some(menu_actions::MenuAction::ToggleFullscreen) => {
            window_actions::toggle_main_window_fullscreen(app_handle, append_desktop_log)
        }
        Some(menu_actions::MenuAction::ToggleDevtools) => {
            window_actions::toggle_main_window_devtools(app_handle, append_desktop_log)
        }
        Some(menu_actions::MenuAction::OpenHelp(link)) => {
            let opened = external_links::parse_openable_url(link.url())
                .and_then(|url| external_links::open_in_system_browser(app_handle, &url));
            if let Err(error) = opened {
                append_desktop_log(&format!("failed to open help link: {error}"));
            }
        }
        None => {}
    }
}
