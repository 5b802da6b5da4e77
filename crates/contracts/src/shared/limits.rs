/// Largest image accepted for visual question answering (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// File name used when saving the analysis archive.
pub const DOWNLOAD_FILENAME: &str = "analysis_results.zip";

/// Vertical scroll offset (px) after which the navbar gets a shadow.
pub const NAVBAR_SHADOW_THRESHOLD_PX: f64 = 10.0;

/// How long a toast notification stays on screen.
pub const NOTIFICATION_TTL_MS: u32 = 5_000;
