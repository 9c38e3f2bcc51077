use tauri::AppHandle;
use tauri_plugin_opener::OpenerExt;
use url::Url;

const LOCAL_SCHEMES: [&str; 5] = ["tauri", "asset", "about", "data", "blob"];
const LOCAL_HOSTS: [&str; 4] = ["localhost", "127.0.0.1", "tauri.localhost", "ipc.localhost"];
const WEB_SCHEMES: [&str; 2] = ["http", "https"];
const EXTERNAL_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavigationDecision {
    Allow,
    OpenExternal,
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NewWindowDecision {
    OpenExternal,
    Ignore,
}

fn is_local(url: &Url) -> bool {
    LOCAL_SCHEMES.contains(&url.scheme())
        || url
            .host_str()
            .is_some_and(|host| LOCAL_HOSTS.contains(&host))
}

/// Same-window navigation stays in the webview for local and web URLs.
/// `mailto` goes to the OS handler; other schemes are refused.
pub(crate) fn decide_navigation(url: &Url) -> NavigationDecision {
    if is_local(url) || WEB_SCHEMES.contains(&url.scheme()) {
        return NavigationDecision::Allow;
    }
    if EXTERNAL_SCHEMES.contains(&url.scheme()) {
        return NavigationDecision::OpenExternal;
    }
    NavigationDecision::Block
}

/// `target="_blank"` and `window.open` never create a webview window.
/// Remote targets are handed to the system browser instead.
pub(crate) fn decide_new_window(url: &Url) -> NewWindowDecision {
    if !is_local(url) && EXTERNAL_SCHEMES.contains(&url.scheme()) {
        NewWindowDecision::OpenExternal
    } else {
        NewWindowDecision::Ignore
    }
}

pub(crate) fn parse_openable_url(raw_url: &str) -> Result<Url, String> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err("Missing external URL.".to_string());
    }

    let parsed = Url::parse(trimmed).map_err(|error| format!("Invalid URL: {error}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(format!(
            "Unsupported URL scheme '{scheme}', only http/https are allowed."
        )),
    }
}

pub(crate) fn open_in_system_browser(app_handle: &AppHandle, url: &Url) -> Result<(), String> {
    app_handle
        .opener()
        .open_url(url.as_str(), None::<&str>)
        .map_err(|error| format!("Failed to open {url} in the system browser: {error}"))
}

/// Navigation hook for the main webview. Returns whether the webview may
/// follow the navigation itself.
pub(crate) fn intercept_navigation<F>(app_handle: &AppHandle, url: &Url, log: F) -> bool
where
    F: Fn(&str),
{
    match decide_navigation(url) {
        NavigationDecision::Allow => true,
        NavigationDecision::OpenExternal => {
            if let Err(error) = open_in_system_browser(app_handle, url) {
                log(&error);
            }
            false
        }
        NavigationDecision::Block => {
            log(&format!("blocked navigation to unsupported url: {url}"));
            false
        }
    }
}

/// New-window hook for the main webview. The caller always denies the
/// window itself.
pub(crate) fn intercept_new_window<F>(app_handle: &AppHandle, url: &Url, log: F)
where
    F: Fn(&str),
{
    match decide_new_window(url) {
        NewWindowDecision::OpenExternal => {
            log(&format!("new-window request opened externally: {url}"));
            if let Err(error) = open_in_system_browser(app_handle, url) {
                log(&error);
            }
        }
        NewWindowDecision::Ignore => {
            log(&format!("ignored new-window request: {url}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(raw: &str) -> NavigationDecision {
        decide_navigation(&Url::parse(raw).expect("test url should parse"))
    }

    #[test]
    fn local_app_urls_are_allowed() {
        assert_eq!(decide("tauri://localhost/index.html"), NavigationDecision::Allow);
        assert_eq!(decide("http://tauri.localhost/index.html"), NavigationDecision::Allow);
        assert_eq!(decide("http://localhost:1212/index.html"), NavigationDecision::Allow);
        assert_eq!(decide("http://127.0.0.1:1212/"), NavigationDecision::Allow);
        assert_eq!(decide("about:blank"), NavigationDecision::Allow);
    }

    #[test]
    fn same_window_web_navigation_stays_in_the_webview() {
        assert_eq!(decide("https://v2.tauri.app/"), NavigationDecision::Allow);
        assert_eq!(decide("http://example.com/a?b=c"), NavigationDecision::Allow);
        assert_eq!(decide("mailto:team@example.com"), NavigationDecision::OpenExternal);
    }

    #[test]
    fn other_schemes_are_blocked() {
        assert_eq!(decide("file:///etc/passwd"), NavigationDecision::Block);
        assert_eq!(decide("javascript:alert(1)"), NavigationDecision::Block);
    }

    #[test]
    fn new_window_links_go_to_the_system_browser() {
        let decide = |raw: &str| decide_new_window(&Url::parse(raw).expect("test url should parse"));

        assert_eq!(decide("https://v2.tauri.app/"), NewWindowDecision::OpenExternal);
        assert_eq!(decide("http://example.com/a?b=c"), NewWindowDecision::OpenExternal);
        assert_eq!(decide("mailto:team@example.com"), NewWindowDecision::OpenExternal);
    }

    #[test]
    fn new_window_requests_for_local_or_unknown_urls_are_ignored() {
        let decide = |raw: &str| decide_new_window(&Url::parse(raw).expect("test url should parse"));

        assert_eq!(decide("tauri://localhost/index.html"), NewWindowDecision::Ignore);
        assert_eq!(decide("http://localhost:1212/index.html"), NewWindowDecision::Ignore);
        assert_eq!(decide("about:blank"), NewWindowDecision::Ignore);
        assert_eq!(decide("file:///etc/passwd"), NewWindowDecision::Ignore);
        assert_eq!(decide("javascript:alert(1)"), NewWindowDecision::Ignore);
    }

    #[test]
    fn parse_openable_url_accepts_trimmed_http_urls() {
        let parsed = parse_openable_url("  https://example.com/docs  ").expect("valid url");
        assert_eq!(parsed.as_str(), "https://example.com/docs");
    }

    #[test]
    fn parse_openable_url_rejects_empty_and_unsupported_input() {
        assert_eq!(
            parse_openable_url("   "),
            Err("Missing external URL.".to_string())
        );
        assert!(parse_openable_url("not a url")
            .unwrap_err()
            .starts_with("Invalid URL"));
        assert_eq!(
            parse_openable_url("file:///tmp/x"),
            Err("Unsupported URL scheme 'file', only http/https are allowed.".to_string())
        );
    }
}
