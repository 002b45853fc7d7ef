// Single source of truth for all default values.

// --- Settings ---
pub const DEFAULT_ENABLED: bool = true;
pub const DEFAULT_TRANSLATE_TO_ENGLISH: bool = true;
pub const DEFAULT_SKIP_CODE: bool = true;
pub const DEFAULT_PRESENTATION_MODE: bool = false;
pub const DEFAULT_FILTER_APPS_ENABLED: bool = false;

// --- Detection ---
pub const DEFAULT_BRACE_WEIGHT: u32 = 1;
pub const DEFAULT_SEMICOLON_WEIGHT: u32 = 2;
pub const DEFAULT_EQUALS_WEIGHT: u32 = 1;
pub const DEFAULT_KEYWORD_WEIGHT: u32 = 1;
pub const DEFAULT_SYNTAX_WEIGHT: u32 = 2;
pub const DEFAULT_INDENTATION_BONUS: u32 = 3;
pub const DEFAULT_EXACT_KEYWORD_HIT: u32 = 2;
pub const DEFAULT_PARTIAL_KEYWORD_HIT: u32 = 1;
pub const DEFAULT_CHARS_PER_NORMALIZATION_UNIT: usize = 30;
pub const DEFAULT_MIN_LINES_FOR_CONSISTENT_INDENT: usize = 3;

// --- Rewrite ---
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 500;
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 8_000;

// --- Monitor ---
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
