// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "archetype.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Classifier ---
pub const DEFAULT_BALANCED_BAND: f64 = 12.5;
pub const DEFAULT_SECONDARY_CLOSENESS: f64 = 10.0;
pub const DEFAULT_EXACT_MARGIN: f64 = 40.0;
pub const DEFAULT_STRONG_MARGIN: f64 = 20.0;
pub const DEFAULT_MODERATE_MARGIN: f64 = 8.0;

// --- Session ---
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 60 * 60 * 24 * 30; // 30 days

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
