pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "Desktop Shell";
pub(crate) const MAIN_WINDOW_WIDTH: f64 = 1024.0;
pub(crate) const MAIN_WINDOW_HEIGHT: f64 = 728.0;

pub(crate) const HTML_ENTRY_FILE: &str = "index.html";
pub(crate) const ASSETS_DIR_NAME: &str = "assets";
pub(crate) const WINDOW_ICON_FILE: &str = "icon.png";
pub(crate) const DEFAULT_DEV_SERVER_PORT: u16 = 1212;

pub(crate) const IPC_EXAMPLE_CHANNEL: &str = "ipc-example";
pub(crate) const IPC_REPLY_TOKEN: &str = "pong";

pub(crate) const DEFAULT_UPDATE_FEED_URL: &str = "http://113.200.234.211:5050/update/windows_64/1.0.3";

pub(crate) const DESKTOP_ROOT_DIR_NAME: &str = ".desktop-shell";
pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";

pub(crate) const ENV_NODE_ENV: &str = "NODE_ENV";
pub(crate) const ENV_DEBUG_PROD: &str = "DEBUG_PROD";
pub(crate) const ENV_UPGRADE_EXTENSIONS: &str = "UPGRADE_EXTENSIONS";
pub(crate) const ENV_START_MINIMIZED: &str = "START_MINIMIZED";
pub(crate) const ENV_PORT: &str = "PORT";
pub(crate) const ENV_OPEN_DEVTOOLS: &str = "OPEN_DEVTOOLS";
pub(crate) const ENV_UPDATE_FEED_URL: &str = "UPDATE_FEED_URL";
pub(crate) const ENV_DESKTOP_ROOT: &str = "DESKTOP_SHELL_ROOT";
