use tauri_specta::collect_commands;

use crate::modules::point_form::commands::*;

/// Single source of truth for all Tauri commands, shared by the specta
/// builder and `tauri::generate_handler!`.
pub fn get_all_commands() -> tauri_specta::Commands<tauri::Wry> {
    collect_commands![
        // Form lifecycle
        initialize_form,
        get_form_snapshot,
        take_notices,
        submit_point,
        // Field edits
        select_region,
        select_municipality,
        update_contact_field,
        toggle_item,
        update_pin,
        // Webview geolocation bridge
        report_device_position,
    ]
}

/// Generate the handler list with all commands imported
#[macro_export]
macro_rules! generate_handler_list {
    () => {{
        use $crate::modules::point_form::commands::*;

        tauri::generate_handler![
            // Form lifecycle
            initialize_form,
            get_form_snapshot,
            take_notices,
            submit_point,
            // Field edits
            select_region,
            select_municipality,
            update_contact_field,
            toggle_item,
            update_pin,
            // Webview geolocation bridge
            report_device_position,
        ]
    }};
}
