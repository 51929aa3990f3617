#[cfg(feature = "desktop")]
pub mod commands;
pub mod modules;
pub mod shared;

pub use modules::point_form::{CollectionPointForm, FormSnapshot, SubmitOutcome};
pub use shared::{AppConfig, AppError, AppResult};

#[cfg(feature = "desktop")]
use commands::get_all_commands;
#[cfg(feature = "desktop")]
use modules::location::{Coordinate, GeolocationProvider, PositionReport, ReportedGeolocation};
#[cfg(feature = "desktop")]
use std::sync::Arc;
#[cfg(feature = "desktop")]
use tauri::Manager;

// tauri-specta: generate TS types + typed command client from Rust commands
#[cfg(feature = "desktop")]
use specta_typescript::Typescript;
#[cfg(feature = "desktop")]
use tauri_specta::Builder as SpectaBuilder;

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let specta_builder = SpectaBuilder::<tauri::Wry>::new().commands(get_all_commands());

    #[cfg(debug_assertions)]
    if let Err(e) = specta_builder.export(Typescript::default(), "../src/types/bindings.ts") {
        eprintln!("Warning: Failed to export TypeScript bindings: {}", e);
        eprintln!("TypeScript types may be out of sync. Consider running cargo build again.");
    }

    tauri::Builder::default()
        .invoke_handler(crate::generate_handler_list!())
        .plugin(
            tauri_plugin_log::Builder::new()
                .clear_targets()
                .targets([tauri_plugin_log::Target::new(
                    tauri_plugin_log::TargetKind::Stdout,
                )])
                .level(log::LevelFilter::Debug)
                .format(|out, message, record| {
                    let target = record.target();

                    if target.starts_with("ecoleta_lib::modules::") {
                        // ecoleta_lib::modules::region::... -> [LEVEL] [BACKEND] [region] message
                        let module = target
                            .strip_prefix("ecoleta_lib::modules::")
                            .and_then(|s| s.split("::").next())
                            .unwrap_or("");
                        out.finish(format_args!(
                            "[{}] [BACKEND] [{}] {}",
                            record.level(),
                            module,
                            message
                        ))
                    } else if target.starts_with("ecoleta_lib") {
                        out.finish(format_args!("[{}] [BACKEND] {}", record.level(), message))
                    } else if target.starts_with("webview:") {
                        // Frontend messages already carry their own [FRONTEND] prefix
                        out.finish(format_args!("[{}] {}", record.level(), message))
                    } else {
                        out.finish(format_args!(
                            "[{}] [{}] {}",
                            record.level(),
                            target,
                            message
                        ))
                    }
                })
                .build(),
        )
        .setup(move |app| {
            specta_builder.mount_events(app);

            let config = AppConfig::from_env().map_err(|e| {
                log::error!("Invalid configuration: {}", e);
                Box::new(e) as Box<dyn std::error::Error>
            })?;

            // The webview answers through `report_device_position`; a configured
            // position stands in for it.
            let geolocation = Arc::new(ReportedGeolocation::new());
            if let Some((latitude, longitude)) = config.device_position {
                match Coordinate::new(latitude, longitude) {
                    Ok(position) => geolocation.report(PositionReport::Position(position)),
                    Err(e) => log::warn!("Ignoring configured device position: {}", e),
                }
            }

            let provider: Arc<dyn GeolocationProvider> = geolocation.clone();
            let form = CollectionPointForm::from_config(&config, provider)
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)?;

            // Manage state so commands can access services via `State<T>`
            app.manage(Arc::new(form));
            app.manage(geolocation);

            Ok(())
        })
        .run(tauri::generate_context!())
        .unwrap_or_else(|e| {
            eprintln!("Failed to run Tauri application: {}", e);
            eprintln!("Application startup failed. Please check system requirements and permissions.");
            std::process::exit(1);
        });
}
