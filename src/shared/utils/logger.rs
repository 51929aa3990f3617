use log::{debug, error, info};
use std::sync::Once;
use std::time::Instant;

static INIT: Once = Once::new();

/// Initialize `env_logger` once. The desktop host installs `tauri-plugin-log`
/// instead, so this is for tests and other embedders. `RUST_LOG` overrides
/// the defaults below.
pub fn init_logger() {
    INIT.call_once(|| {
        let initialized = env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .filter_module("ecoleta_lib", log::LevelFilter::Debug)
            .filter_module("reqwest", log::LevelFilter::Warn)
            .filter_module("hyper", log::LevelFilter::Warn)
            .parse_default_env()
            .format_timestamp_millis()
            .format_module_path(false)
            .try_init();

        if initialized.is_ok() {
            info!("Logging system initialized");
        }
    });
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Structured logging helpers for the form and its remote calls
pub struct LogContext;

impl LogContext {
    /// A request to a remote service is about to go out
    pub fn api_call(service: &str, endpoint: &str) {
        debug!("API: {} {}", service, endpoint);
    }

    pub fn form_event(event: &str, detail: Option<&str>) {
        match detail {
            Some(detail) => debug!("Form: {} ({})", event, detail),
            None => debug!("Form: {}", event),
        }
    }

    /// A notice was queued for the user
    pub fn notice(level: &str, message: &str) {
        info!("Notice [{}]: {}", level, message);
    }

    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }
}

/// Logs how long an operation took when finished
pub struct TimedOperation {
    start: Instant,
    label: String,
}

impl TimedOperation {
    pub fn new(label: &str) -> Self {
        debug!("Starting: {}", label);
        Self {
            start: Instant::now(),
            label: label.to_string(),
        }
    }

    pub fn finish(self) -> u64 {
        let elapsed = self.start.elapsed().as_millis() as u64;
        info!("Timing: {} took {}ms", self.label, elapsed);
        elapsed
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let elapsed = self.start.elapsed().as_millis() as u64;
        info!("Timing: {} took {}ms ({})", self.label, elapsed, info);
        elapsed
    }
}
