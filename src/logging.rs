use log::{info, LevelFilter};

pub const THEME_NAMESPACE: &str = "dashtheme::theme";
pub const STORAGE_NAMESPACE: &str = "dashtheme::storage";
pub const CALLBACK_NAMESPACE: &str = "dashtheme::callbacks";

/// Initialise the global logger.
///
/// `level` is the default filter; `RUST_LOG` takes precedence when set.
/// Calling this more than once is harmless, later calls are ignored.
pub fn init_logging(level: LevelFilter) {
    let default_level = if cfg!(feature = "dev") {
        LevelFilter::Debug
    } else {
        level
    };

    let result = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level.to_string()),
    )
    .format_timestamp_millis()
    .format_module_path(false)
    .format_target(true)
    .try_init();

    if result.is_ok() {
        info!("Logging initialized at {}", default_level);
    }
}

// Convenience macros for each namespace
#[macro_export]
macro_rules! theme_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::THEME_NAMESPACE, $($arg)*)
    };
}

#[macro_export]
macro_rules! storage_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::STORAGE_NAMESPACE, $($arg)*)
    };
}

#[macro_export]
macro_rules! callback_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::CALLBACK_NAMESPACE, $($arg)*)
    };
}
