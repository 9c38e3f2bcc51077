use std::{
    env,
    path::{Path, PathBuf},
};

use tauri::{path::BaseDirectory, AppHandle, Manager};

use crate::{ASSETS_DIR_NAME, DESKTOP_ROOT_DIR_NAME, ENV_DESKTOP_ROOT};

pub(crate) fn default_root_dir() -> Option<PathBuf> {
    root_dir_from(env::var(ENV_DESKTOP_ROOT).ok(), home::home_dir())
}

fn root_dir_from(override_root: Option<String>, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(root) = override_root {
        let path = PathBuf::from(root.trim());
        if !path.as_os_str().is_empty() {
            return Some(path);
        }
    }

    home_dir.map(|home| home.join(DESKTOP_ROOT_DIR_NAME))
}

pub(crate) fn resolve_log_dir(root_dir: Option<PathBuf>) -> PathBuf {
    root_dir
        .unwrap_or_else(|| env::temp_dir().join(DESKTOP_ROOT_DIR_NAME))
        .join("logs")
}

/// Packaged builds ship `assets/` as a bundle resource; unpackaged runs read
/// it straight from the crate directory.
pub(crate) fn resolve_assets_root(packaged: bool, resource_assets_dir: Option<PathBuf>) -> PathBuf {
    if packaged {
        if let Some(path) = resource_assets_dir {
            return path;
        }
    }

    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(ASSETS_DIR_NAME)
}

pub(crate) fn assets_root(app: &AppHandle) -> PathBuf {
    let packaged = !cfg!(debug_assertions);
    let resource_assets_dir = app
        .path()
        .resolve(ASSETS_DIR_NAME, BaseDirectory::Resource)
        .ok();
    resolve_assets_root(packaged, resource_assets_dir)
}

pub(crate) fn asset_path(assets_root: &Path, parts: &[&str]) -> PathBuf {
    parts
        .iter()
        .fold(assets_root.to_path_buf(), |path, part| path.join(part))
}
