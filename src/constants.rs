//! Application-wide constants.
//!
//! Static values used throughout foodboard: metadata, timing, paths,
//! backend defaults and UI labels.

use std::time::Duration;

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Timing Configuration ===

/// UI refresh rate in milliseconds.
pub const DEFAULT_TICK_RATE: u64 = 250;
/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

// === Backend ===

/// Base URL used when neither config nor CLI name one (json-server default port).
pub const DEFAULT_API_URL: &str = "http://localhost:3333";
/// Name of the REST collection holding dishes.
pub const FOODS_RESOURCE: &str = "foods";

// === Path Configuration ===

/// Name of the config file inside the app config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Name of the logs subdirectory.
pub const LOGS_DIR_NAME: &str = "logs";
/// Name of the log file.
pub const LOG_FILE_NAME: &str = "foodboard.log";
/// Default `tracing` filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// === Activity Log ===

/// Lines kept in the in-app activity log.
pub const MAX_LOG_LINES: usize = 200;
/// Lines of the activity log shown under the list.
pub const LOG_PANEL_HEIGHT: u16 = 6;

// === UI Labels & Titles ===

pub const TITLE_MENU: &str = " Menu ";
pub const TITLE_ACTIVITY: &str = " Activity ";
pub const TITLE_ADD_DISH: &str = "New Dish";
pub const TITLE_EDIT_DISH: &str = "Edit Dish";
pub const LABEL_AVAILABLE: &str = "Available";
pub const LABEL_UNAVAILABLE: &str = "Unavailable";
pub const LABEL_SUBMIT_ADD: &str = "[Enter] Add dish";
pub const LABEL_SUBMIT_EDIT: &str = "[Enter] Save changes";
pub const LABEL_SUBMITTING: &str = "Sending...";
pub const MSG_EMPTY_MENU: &str = "No dishes yet. Press [a] to add one.";
