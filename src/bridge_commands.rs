use serde_json::Value;
use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log, append_ipc_log, external_links, update_notifier::UpdateStatus,
    BridgeResult, UpdateNotifier, IPC_EXAMPLE_CHANNEL, IPC_REPLY_TOKEN,
};

fn ipc_message(ping_pong: &str) -> String {
    format!("IPC test: {ping_pong}")
}

fn payload_text(payload: &Value) -> String {
    match payload {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Logs the templated payload and returns the fixed reply. Every payload is
/// accepted.
pub(crate) fn echo_reply<F>(payload: &Value, log: F) -> String
where
    F: Fn(&str),
{
    log(&format!(
        "[{IPC_EXAMPLE_CHANNEL}] {}",
        ipc_message(&payload_text(payload))
    ));
    ipc_message(IPC_REPLY_TOKEN)
}

#[tauri::command]
pub(crate) fn ipc_example(arg: Option<Value>) -> String {
    echo_reply(&arg.unwrap_or(Value::Null), append_ipc_log)
}

#[tauri::command]
pub(crate) fn open_external_url(app_handle: AppHandle, url: String) -> BridgeResult {
    let parsed = match external_links::parse_openable_url(&url) {
        Ok(parsed) => parsed,
        Err(error) => return BridgeResult::failed(error),
    };

    match external_links::open_in_system_browser(&app_handle, &parsed) {
        Ok(()) => BridgeResult::ok(),
        Err(error) => {
            append_desktop_log(&error);
            BridgeResult::failed(error)
        }
    }
}

#[tauri::command]
pub(crate) fn get_update_status(app_handle: AppHandle) -> UpdateStatus {
    UpdateStatus {
        phase: app_handle.state::<UpdateNotifier>().phase(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::json;

    use super::*;

    #[test]
    fn reply_is_pong_for_every_payload() {
        let payloads = [
            json!("ping"),
            json!(""),
            json!(42),
            json!(null),
            json!({ "nested": [1, 2, 3] }),
            json!(["a", "b"]),
        ];

        for payload in payloads {
            assert_eq!(echo_reply(&payload, |_| {}), "IPC test: pong");
        }
    }

    #[test]
    fn payload_is_logged_with_the_template() {
        let lines = RefCell::new(Vec::new());
        echo_reply(&json!("ping"), |line| lines.borrow_mut().push(line.to_string()));
        echo_reply(&json!({ "a": 1 }), |line| {
            lines.borrow_mut().push(line.to_string())
        });

        assert_eq!(
            lines.into_inner(),
            vec![
                "[ipc-example] IPC test: ping".to_string(),
                "[ipc-example] IPC test: {\"a\":1}".to_string(),
            ]
        );
    }

    #[test]
    fn ipc_example_command_accepts_missing_payload() {
        assert_eq!(ipc_example(None), "IPC test: pong");
        assert_eq!(ipc_example(Some(json!(true))), "IPC test: pong");
    }
}
