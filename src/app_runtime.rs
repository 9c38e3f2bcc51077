use tauri::{webview::PageLoadEvent, Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, append_startup_log, append_update_log, lifecycle, logging, main_window,
    menu_handler, runtime_paths, update_notifier, LoggingState, MainWindowState, RuntimeConfig,
    UpdateNotifier, MAIN_WINDOW_LABEL,
};

fn init_process_logging() -> LoggingState {
    let log_dir = runtime_paths::resolve_log_dir(runtime_paths::default_root_dir());
    let guard = match logging::init_logging(&log_dir) {
        Ok(guard) => Some(guard),
        Err(error) => {
            eprintln!("desktop logging unavailable: {error}");
            None
        }
    };

    append_startup_log("desktop process starting");
    append_startup_log(&format!("desktop log dir: {}", log_dir.display()));
    LoggingState::new(guard)
}

pub(crate) fn run() {
    let logging_state = init_process_logging();
    let config = RuntimeConfig::from_env();
    if config.production {
        logging::install_panic_hook();
    }
    append_startup_log(&format!(
        "runtime config: development={} production={} start_minimized={} open_devtools={}",
        config.development, config.production, config.start_minimized, config.open_devtools
    ));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
            append_desktop_log("second instance launched");
            lifecycle::handle_activate(app, append_desktop_log);
        }))
        .plugin(tauri_plugin_opener::init())
        .manage(config)
        .manage(logging_state)
        .manage(MainWindowState::default())
        .manage(UpdateNotifier::default())
        .invoke_handler(tauri::generate_handler![
            crate::bridge_commands::ipc_example,
            crate::bridge_commands::open_external_url,
            crate::bridge_commands::get_update_status,
        ])
        .on_menu_event(|app_handle, event| {
            menu_handler::handle_menu_event(app_handle, event.id().as_ref())
        })
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }

            if let WindowEvent::Destroyed = event {
                main_window::handle_main_window_destroyed(window.app_handle(), append_desktop_log);
            }
        })
        .on_page_load(|webview, payload| match payload.event() {
            PageLoadEvent::Started => {
                append_desktop_log(&format!("page-load started: {}", payload.url()));
            }
            PageLoadEvent::Finished => {
                append_desktop_log(&format!("page-load finished: {}", payload.url()));
                if webview.window().label() == MAIN_WINDOW_LABEL {
                    main_window::handle_ready_to_show(webview.app_handle(), append_desktop_log);
                }
            }
        })
        .setup(|app| {
            let app_handle = app.handle().clone();

            // The check runs on its own task; window creation does not wait for it.
            match app_handle.plugin(tauri_plugin_updater::Builder::new().build()) {
                Ok(()) => {
                    let feed_url = app_handle.state::<RuntimeConfig>().update_feed_url.clone();
                    update_notifier::spawn_update_check(app_handle.clone(), feed_url);
                }
                Err(error) => {
                    append_startup_log(&format!("failed to initialize updater plugin: {error}"));
                    update_notifier::record_updater_unavailable(
                        &app_handle.state::<UpdateNotifier>(),
                        &error.to_string(),
                        append_update_log,
                    );
                }
            }

            if let Err(error) = main_window::create_main_window(&app_handle, append_desktop_log) {
                append_startup_log(&format!("failed to create main window: {error}"));
            }

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { code, api, .. } => {
                lifecycle::handle_exit_requested(code, &api, append_desktop_log);
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen {
                has_visible_windows,
                ..
            } => {
                if !has_visible_windows {
                    lifecycle::handle_activate(app_handle, append_desktop_log);
                }
            }
            RunEvent::Exit => {
                append_desktop_log("desktop process exiting");
                app_handle.state::<LoggingState>().flush();
            }
            _ => {}
        });
}
