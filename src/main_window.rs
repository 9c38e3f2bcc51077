use std::path::{Path, PathBuf};

use tauri::{
    image::Image, webview::NewWindowResponse, AppHandle, Manager, WebviewUrl, WebviewWindow,
    WebviewWindowBuilder,
};
use url::Url;

use crate::{
    external_links, menu_setup, runtime_paths, window_actions, MainWindowState, RevealAction,
    RuntimeConfig, HTML_ENTRY_FILE, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_LABEL, MAIN_WINDOW_TITLE,
    MAIN_WINDOW_WIDTH, WINDOW_ICON_FILE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EntryUrl {
    DevServer(Url),
    Bundled(PathBuf),
}

impl EntryUrl {
    fn into_webview_url(self) -> WebviewUrl {
        match self {
            Self::DevServer(url) => WebviewUrl::External(url),
            Self::Bundled(path) => WebviewUrl::App(path),
        }
    }
}

pub(crate) fn resolve_entry_url(
    development: bool,
    dev_server_port: u16,
    html_file: &str,
) -> Result<EntryUrl, String> {
    if !development {
        return Ok(EntryUrl::Bundled(PathBuf::from(html_file)));
    }

    let raw = format!("http://localhost:{dev_server_port}/{html_file}");
    Url::parse(&raw)
        .map(EntryUrl::DevServer)
        .map_err(|error| format!("Invalid dev server url {raw}: {error}"))
}

fn load_window_icon(assets_root: &Path) -> Result<Image<'static>, String> {
    let icon_path = runtime_paths::asset_path(assets_root, &[WINDOW_ICON_FILE]);
    Image::from_path(&icon_path).map_err(|error| {
        format!(
            "Failed to load window icon {}: {}",
            icon_path.display(),
            error
        )
    })
}

/// Creates the hidden main window. It stays hidden until the first page
/// load finishes (see [`handle_ready_to_show`]).
pub(crate) fn create_main_window<F>(app_handle: &AppHandle, log: F) -> Result<(), String>
where
    F: Fn(&str) + Copy + Send + Sync + 'static,
{
    let slot = app_handle.state::<MainWindowState>();
    if slot.is_present() {
        log("create_main_window skipped: main window already exists");
        return Ok(());
    }
    let config = app_handle.state::<RuntimeConfig>();

    if config.development {
        log(&format!(
            "devtools extension install skipped: not supported by the system webview (force download requested: {})",
            config.force_extension_download
        ));
    }

    let entry_url = resolve_entry_url(
        config.development,
        config.dev_server_port,
        HTML_ENTRY_FILE,
    )?;
    log(&format!("loading main window from {entry_url:?}"));

    let navigation_handle = app_handle.clone();
    let new_window_handle = app_handle.clone();
    let mut builder = WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        entry_url.into_webview_url(),
    )
    .title(MAIN_WINDOW_TITLE)
    .inner_size(MAIN_WINDOW_WIDTH, MAIN_WINDOW_HEIGHT)
    .visible(false)
    .on_navigation(move |url| external_links::intercept_navigation(&navigation_handle, url, log))
    .on_new_window(move |url, _features| {
        external_links::intercept_new_window(&new_window_handle, &url, log);
        NewWindowResponse::Deny
    });

    match menu_setup::build_menu(app_handle, config.development) {
        Ok(menu) => builder = builder.menu(menu),
        Err(error) => log(&format!("failed to build application menu: {error}")),
    }

    match load_window_icon(&runtime_paths::assets_root(app_handle)) {
        Ok(icon) => {
            builder = builder
                .icon(icon)
                .map_err(|error| format!("Failed to apply window icon: {error}"))?;
        }
        Err(error) => log(&error),
    }

    let window = builder
        .build()
        .map_err(|error| format!("Failed to create main window: {error}"))?;
    slot.set(window);
    log("main window created");

    if config.open_devtools {
        window_actions::open_main_window_devtools(app_handle, log);
    }
    Ok(())
}

fn reveal_window<F>(window: &WebviewWindow, log: F)
where
    F: Fn(&str),
{
    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
}

/// Ready-to-show: the first finished page load after creation. Panics when
/// no main window is registered.
pub(crate) fn handle_ready_to_show<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let start_minimized = app_handle.state::<RuntimeConfig>().start_minimized;
    match app_handle
        .state::<MainWindowState>()
        .reveal_on_ready(start_minimized)
    {
        RevealAction::Show(window) => reveal_window(&window, &log),
        RevealAction::Minimize(window) => {
            if let Err(error) = window.minimize() {
                log(&format!("failed to minimize main window: {error}"));
            }
        }
        RevealAction::AlreadyRevealed => {}
    }
}

pub(crate) fn handle_main_window_destroyed<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    if app_handle.state::<MainWindowState>().clear() {
        log("main window closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_entry_points_at_dev_server() {
        let entry = resolve_entry_url(true, 1212, "index.html").expect("dev url");
        assert_eq!(
            entry,
            EntryUrl::DevServer(Url::parse("http://localhost:1212/index.html").expect("url"))
        );
    }

    #[test]
    fn production_entry_uses_bundled_file() {
        let entry = resolve_entry_url(false, 1212, "index.html").expect("bundled url");
        assert_eq!(entry, EntryUrl::Bundled(PathBuf::from("index.html")));
    }

    #[test]
    fn bundled_window_icon_loads_from_assets() {
        let assets_root = runtime_paths::resolve_assets_root(false, None);
        let icon = load_window_icon(&assets_root).expect("assets/icon.png should decode");
        assert!(icon.width() > 0);
    }

    #[test]
    fn missing_window_icon_is_reported() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let error = load_window_icon(temp.path()).expect_err("icon is missing");
        assert!(error.starts_with("Failed to load window icon"));
    }
}
