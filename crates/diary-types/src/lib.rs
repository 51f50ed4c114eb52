pub mod api;
mod de;
pub mod models;

/// Wire format of diary dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format of log creation timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
