//! 30 Before 30 Backend
//!
//! Tauri host around `before30-core`:
//! - config: app configuration file and env overrides
//! - commands: Tauri command handlers exposing the mutation actions

use std::path::PathBuf;
use std::sync::Arc;
use tauri::{Emitter, Manager};

mod commands;
mod config;

use before30_core::repository::open_connection;
use before30_core::{Actions, DbState, StaticSession};
use config::AppConfig;

/// Application state shared across commands
pub struct AppState {
    pub db_state: DbState,
    pub actions: Actions,
    pub session: Arc<StaticSession>,
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle, config: &AppConfig) -> Result<PathBuf, String> {
    let app_dir = app_handle.path().app_data_dir().map_err(|e| e.to_string())?;
    std::fs::create_dir_all(&app_dir).map_err(|e| e.to_string())?;
    Ok(app_dir.join(&config.database_file))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "Before30")?;

            let config = AppConfig::load_or_create(&app_handle.path().app_config_dir()?)?;
            let db_path = get_db_path(&app_handle, &config)?;
            log::info!("App setup starting, database at {}", db_path.display());

            // Create initial empty DbState (managed); actions report "not initialized" until ready
            let db_state = DbState::new();
            let session = Arc::new(StaticSession::new(&config.user_id, config.user_email.clone()));
            let actions = Actions::new(&db_state, session.clone()).with_browse_limit(config.browse_limit);

            app.manage(AppState {
                db_state: db_state.clone(),
                actions,
                session,
            });

            // Initialize database asynchronously in background
            tauri::async_runtime::spawn(async move {
                let opened = tauri::async_runtime::spawn_blocking(move || open_connection(&db_path)).await;
                match opened {
                    Ok(Ok(conn)) => {
                        db_state.install(conn).await;
                        let _ = rolling_logger::info("Async DB init success");
                        if let Err(e) = app_handle.emit("db-initialized", ()) {
                            log::error!("Failed to emit db-initialized: {}", e);
                        }
                    }
                    Ok(Err(e)) => {
                        let _ = rolling_logger::error(&format!("Async DB init failed: {}", e));
                    }
                    Err(e) => {
                        let _ = rolling_logger::error(&format!("Async DB init task failed: {}", e));
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Session + diagnostics
            commands::current_user,
            commands::db_ready,
            commands::recent_logs,
            // List
            commands::ensure_list,
            commands::load_my_list,
            commands::update_title,
            commands::update_visibility,
            // Items
            commands::add_item,
            commands::toggle_item,
            commands::delete_item,
            commands::edit_item_text,
            commands::reorder_items,
            // Style options
            commands::load_style_options,
            commands::save_style_options,
            // Profile + community
            commands::update_profile,
            commands::browse_public_lists,
            commands::get_public_list,
            commands::add_item_from_community,
            // Feedback
            commands::submit_suggestion,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
