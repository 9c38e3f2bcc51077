use std::env;

use url::Url;

use crate::{
    DEFAULT_DEV_SERVER_PORT, DEFAULT_UPDATE_FEED_URL, ENV_DEBUG_PROD, ENV_NODE_ENV,
    ENV_OPEN_DEVTOOLS, ENV_PORT, ENV_START_MINIMIZED, ENV_UPDATE_FEED_URL, ENV_UPGRADE_EXTENSIONS,
};

/// Environment flags read once at startup. Managed as Tauri state and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RuntimeConfig {
    pub(crate) development: bool,
    pub(crate) production: bool,
    pub(crate) start_minimized: bool,
    pub(crate) force_extension_download: bool,
    pub(crate) open_devtools: bool,
    pub(crate) dev_server_port: u16,
    pub(crate) update_feed_url: Url,
}

impl RuntimeConfig {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let node_env = lookup(ENV_NODE_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default_node_env().to_string());
        let debug_prod = lookup(ENV_DEBUG_PROD).is_some_and(|value| value.trim() == "true");

        Self {
            development: node_env == "development" || debug_prod,
            production: node_env == "production",
            start_minimized: is_set(lookup(ENV_START_MINIMIZED)),
            force_extension_download: is_set(lookup(ENV_UPGRADE_EXTENSIONS)),
            open_devtools: lookup(ENV_OPEN_DEVTOOLS)
                .map(|value| !is_disabled_flag(&value))
                .unwrap_or(true),
            dev_server_port: lookup(ENV_PORT)
                .and_then(|value| value.trim().parse::<u16>().ok())
                .unwrap_or(DEFAULT_DEV_SERVER_PORT),
            update_feed_url: normalize_feed_url(lookup(ENV_UPDATE_FEED_URL).as_deref()),
        }
    }
}

fn default_node_env() -> &'static str {
    if cfg!(debug_assertions) {
        "development"
    } else {
        "production"
    }
}

fn is_set(value: Option<String>) -> bool {
    value.is_some_and(|value| !value.is_empty())
}

fn is_disabled_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

pub(crate) fn default_feed_url() -> Url {
    Url::parse(DEFAULT_UPDATE_FEED_URL).unwrap_or_else(|error| {
        panic!("built-in update feed url {DEFAULT_UPDATE_FEED_URL} is invalid: {error}")
    })
}

pub(crate) fn normalize_feed_url(raw: Option<&str>) -> Url {
    let Some(trimmed) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return default_feed_url();
    };

    match Url::parse(trimmed) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => parsed,
        Ok(parsed) => {
            tracing::warn!(
                scheme = parsed.scheme(),
                "unsupported update feed scheme; using built-in feed"
            );
            default_feed_url()
        }
        Err(error) => {
            tracing::warn!(%error, "invalid update feed url; using built-in feed");
            default_feed_url()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        io,
        sync::{Arc, Mutex, PoisonError},
    };

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> RuntimeConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        RuntimeConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn node_env_development_enables_development_mode() {
        let config = config_from(&[(ENV_NODE_ENV, "development")]);
        assert!(config.development);
        assert!(!config.production);
    }

    #[test]
    fn debug_prod_enables_development_behaviour_in_production() {
        let config = config_from(&[(ENV_NODE_ENV, "production"), (ENV_DEBUG_PROD, "true")]);
        assert!(config.development);
        assert!(config.production);

        let config = config_from(&[(ENV_NODE_ENV, "production"), (ENV_DEBUG_PROD, "1")]);
        assert!(!config.development);
    }

    #[test]
    fn start_minimized_and_upgrade_extensions_follow_non_empty_values() {
        let config = config_from(&[(ENV_START_MINIMIZED, "1"), (ENV_UPGRADE_EXTENSIONS, "")]);
        assert!(config.start_minimized);
        assert!(!config.force_extension_download);

        let config = config_from(&[(ENV_NODE_ENV, "production")]);
        assert!(!config.start_minimized);
    }

    #[test]
    fn port_falls_back_to_default_when_invalid() {
        assert_eq!(config_from(&[(ENV_PORT, "4000")]).dev_server_port, 4000);
        assert_eq!(
            config_from(&[(ENV_PORT, "not-a-port")]).dev_server_port,
            DEFAULT_DEV_SERVER_PORT
        );
    }

    #[test]
    fn devtools_open_unless_explicitly_disabled() {
        assert!(config_from(&[]).open_devtools);
        assert!(!config_from(&[(ENV_OPEN_DEVTOOLS, "false")]).open_devtools);
        assert!(!config_from(&[(ENV_OPEN_DEVTOOLS, " 0 ")]).open_devtools);
        assert!(config_from(&[(ENV_OPEN_DEVTOOLS, "yes")]).open_devtools);
    }

    #[test]
    fn feed_url_override_must_be_http() {
        let config = config_from(&[(ENV_UPDATE_FEED_URL, "https://updates.example.com/feed")]);
        assert_eq!(
            config.update_feed_url.as_str(),
            "https://updates.example.com/feed"
        );

        assert_eq!(normalize_feed_url(Some("ftp://example.com/feed")), default_feed_url());
        assert_eq!(normalize_feed_url(Some("not a url")), default_feed_url());
        assert_eq!(normalize_feed_url(Some("  ")), default_feed_url());
        assert_eq!(normalize_feed_url(None).as_str(), DEFAULT_UPDATE_FEED_URL);
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLog {
        fn text(&self) -> String {
            let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
            String::from_utf8_lossy(&bytes).into_owned()
        }
    }

    #[test]
    fn rejected_feed_url_override_is_logged_as_warning() {
        let captured = CapturedLog::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            config_from(&[(ENV_UPDATE_FEED_URL, "ftp://example.com/feed")]);
            config_from(&[(ENV_UPDATE_FEED_URL, "not a url")]);
        });

        let output = captured.text();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("unsupported update feed scheme; using built-in feed"));
        assert!(output.contains("scheme=\"ftp\"") || output.contains("scheme=ftp"));
        assert!(output.contains("invalid update feed url; using built-in feed"));
    }
}
