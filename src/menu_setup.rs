use tauri::{
    menu::{IsMenuItem, Menu, MenuItem, Submenu},
    AppHandle, Wry,
};

use crate::menu_actions::{
    MENU_CLOSE_WINDOW, MENU_HELP_COMMUNITY, MENU_HELP_DOCUMENTATION, MENU_HELP_LEARN_MORE,
    MENU_HELP_SEARCH_ISSUES, MENU_OPEN, MENU_RELOAD, MENU_TOGGLE_DEVTOOLS, MENU_TOGGLE_FULLSCREEN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MenuEntry {
    pub(crate) id: &'static str,
    pub(crate) label: &'static str,
    pub(crate) accelerator: Option<&'static str>,
}

const fn entry(
    id: &'static str,
    label: &'static str,
    accelerator: Option<&'static str>,
) -> MenuEntry {
    MenuEntry {
        id,
        label,
        accelerator,
    }
}

/// Reload and devtools toggles only exist in development builds.
pub(crate) fn view_menu_entries(development: bool, macos: bool) -> Vec<MenuEntry> {
    let (reload, fullscreen, devtools) = if macos {
        (
            entry(MENU_RELOAD, "Reload", Some("Command+R")),
            entry(
                MENU_TOGGLE_FULLSCREEN,
                "Toggle Full Screen",
                Some("Ctrl+Command+F"),
            ),
            entry(
                MENU_TOGGLE_DEVTOOLS,
                "Toggle Developer Tools",
                Some("Alt+Command+I"),
            ),
        )
    } else {
        (
            entry(MENU_RELOAD, "&Reload", Some("Ctrl+R")),
            entry(MENU_TOGGLE_FULLSCREEN, "Toggle &Full Screen", Some("F11")),
            entry(
                MENU_TOGGLE_DEVTOOLS,
                "Toggle &Developer Tools",
                Some("Alt+Ctrl+I"),
            ),
        )
    };

    if development {
        vec![reload, fullscreen, devtools]
    } else {
        vec![fullscreen]
    }
}

pub(crate) fn help_menu_entries() -> [MenuEntry; 4] {
    [
        entry(MENU_HELP_LEARN_MORE, "Learn More", None),
        entry(MENU_HELP_DOCUMENTATION, "Documentation", None),
        entry(MENU_HELP_COMMUNITY, "Community Discussions", None),
        entry(MENU_HELP_SEARCH_ISSUES, "Search Issues", None),
    ]
}

#[cfg_attr(target_os = "macos", allow(dead_code))]
pub(crate) fn file_menu_entries() -> [MenuEntry; 2] {
    [
        entry(MENU_OPEN, "&Open", Some("Ctrl+O")),
        entry(MENU_CLOSE_WINDOW, "&Close", Some("Ctrl+W")),
    ]
}

fn create_error(what: &str) -> impl FnOnce(tauri::Error) -> String + '_ {
    move |error| format!("Failed to create {what}: {error}")
}

fn entry_items(app_handle: &AppHandle, entries: &[MenuEntry]) -> Result<Vec<MenuItem<Wry>>, String> {
    entries
        .iter()
        .map(|entry| {
            MenuItem::with_id(app_handle, entry.id, entry.label, true, entry.accelerator)
                .map_err(create_error(entry.id))
        })
        .collect()
}

fn entry_submenu(
    app_handle: &AppHandle,
    title: &str,
    entries: &[MenuEntry],
) -> Result<Submenu<Wry>, String> {
    let items = entry_items(app_handle, entries)?;
    let refs: Vec<&dyn IsMenuItem<Wry>> = items
        .iter()
        .map(|item| item as &dyn IsMenuItem<Wry>)
        .collect();
    Submenu::with_items(app_handle, title, true, &refs).map_err(create_error(title))
}

pub(crate) fn build_menu(app_handle: &AppHandle, development: bool) -> Result<Menu<Wry>, String> {
    #[cfg(target_os = "macos")]
    {
        build_darwin_menu(app_handle, development)
    }

    #[cfg(not(target_os = "macos"))]
    {
        build_default_menu(app_handle, development)
    }
}

#[cfg(target_os = "macos")]
fn build_darwin_menu(app_handle: &AppHandle, development: bool) -> Result<Menu<Wry>, String> {
    use tauri::menu::{AboutMetadata, PredefinedMenuItem};

    let app_name = app_handle.package_info().name.clone();
    let about_label = format!("About {app_name}");
    let hide_label = format!("Hide {app_name}");

    let about = PredefinedMenuItem::about(
        app_handle,
        Some(&about_label),
        Some(AboutMetadata::default()),
    )
    .map_err(create_error("about menu item"))?;
    let services = PredefinedMenuItem::services(app_handle, Some("Services"))
        .map_err(create_error("services menu item"))?;
    let hide = PredefinedMenuItem::hide(app_handle, Some(&hide_label))
        .map_err(create_error("hide menu item"))?;
    let hide_others = PredefinedMenuItem::hide_others(app_handle, Some("Hide Others"))
        .map_err(create_error("hide others menu item"))?;
    let show_all = PredefinedMenuItem::show_all(app_handle, Some("Show All"))
        .map_err(create_error("show all menu item"))?;
    let quit =
        PredefinedMenuItem::quit(app_handle, Some("Quit")).map_err(create_error("quit menu item"))?;
    let separator = || PredefinedMenuItem::separator(app_handle).map_err(create_error("separator"));

    let app_submenu = Submenu::with_items(
        app_handle,
        &app_name,
        true,
        &[
            &about,
            &separator()?,
            &services,
            &separator()?,
            &hide,
            &hide_others,
            &show_all,
            &separator()?,
            &quit,
        ],
    )
    .map_err(create_error("application submenu"))?;

    let edit_submenu = Submenu::with_items(
        app_handle,
        "Edit",
        true,
        &[
            &PredefinedMenuItem::undo(app_handle, None).map_err(create_error("undo menu item"))?,
            &PredefinedMenuItem::redo(app_handle, None).map_err(create_error("redo menu item"))?,
            &separator()?,
            &PredefinedMenuItem::cut(app_handle, None).map_err(create_error("cut menu item"))?,
            &PredefinedMenuItem::copy(app_handle, None).map_err(create_error("copy menu item"))?,
            &PredefinedMenuItem::paste(app_handle, None)
                .map_err(create_error("paste menu item"))?,
            &PredefinedMenuItem::select_all(app_handle, None)
                .map_err(create_error("select all menu item"))?,
        ],
    )
    .map_err(create_error("edit submenu"))?;

    let view_submenu = entry_submenu(app_handle, "View", &view_menu_entries(development, true))?;

    let window_submenu = Submenu::with_items(
        app_handle,
        "Window",
        true,
        &[
            &PredefinedMenuItem::minimize(app_handle, None)
                .map_err(create_error("minimize menu item"))?,
            &PredefinedMenuItem::close_window(app_handle, None)
                .map_err(create_error("close menu item"))?,
        ],
    )
    .map_err(create_error("window submenu"))?;

    let help_submenu = entry_submenu(app_handle, "Help", &help_menu_entries())?;

    Menu::with_items(
        app_handle,
        &[
            &app_submenu,
            &edit_submenu,
            &view_submenu,
            &window_submenu,
            &help_submenu,
        ],
    )
    .map_err(create_error("application menu"))
}

#[cfg(not(target_os = "macos"))]
fn build_default_menu(app_handle: &AppHandle, development: bool) -> Result<Menu<Wry>, String> {
    let file_submenu = entry_submenu(app_handle, "&File", &file_menu_entries())?;
    let view_submenu = entry_submenu(app_handle, "&View", &view_menu_entries(development, false))?;
    let help_submenu = entry_submenu(app_handle, "Help", &help_menu_entries())?;

    Menu::with_items(app_handle, &[&file_submenu, &view_submenu, &help_submenu])
        .map_err(create_error("application menu"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(entries: &[MenuEntry]) -> Vec<&'static str> {
        entries.iter().map(|entry| entry.id).collect()
    }

    #[test]
    fn development_view_menu_has_reload_and_devtools() {
        assert_eq!(
            ids(&view_menu_entries(true, false)),
            vec![MENU_RELOAD, MENU_TOGGLE_FULLSCREEN, MENU_TOGGLE_DEVTOOLS]
        );
        assert_eq!(
            ids(&view_menu_entries(true, true)),
            vec![MENU_RELOAD, MENU_TOGGLE_FULLSCREEN, MENU_TOGGLE_DEVTOOLS]
        );
    }

    #[test]
    fn production_view_menu_only_toggles_fullscreen() {
        let entries = view_menu_entries(false, false);
        assert_eq!(ids(&entries), vec![MENU_TOGGLE_FULLSCREEN]);
        assert_eq!(entries[0].accelerator, Some("F11"));

        let entries = view_menu_entries(false, true);
        assert_eq!(entries[0].accelerator, Some("Ctrl+Command+F"));
    }

    #[test]
    fn every_menu_entry_maps_to_an_action() {
        let entries = view_menu_entries(true, false)
            .into_iter()
            .chain(help_menu_entries())
            .chain(file_menu_entries());
        for entry in entries {
            assert!(
                crate::menu_actions::action_from_menu_id(entry.id).is_some(),
                "{} has no action",
                entry.id
            );
        }
    }
}
