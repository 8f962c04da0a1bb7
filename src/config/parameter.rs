use dotenv;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::{error, info, warn};

static CONFIG: OnceLock<HashMap<String, String>> = OnceLock::new();

/// Default configuration values
const DEFAULTS: &[(&str, &str)] = &[
    ("SERVER_ADDRESS", "127.0.0.1"),
    ("SERVER_PORT", "3001"),
    ("ENV", "development"),
    ("TOKEN_TTL_SECONDS", "86400"),
    ("RATE_LIMIT_POINTS", "100"),
    ("RATE_LIMIT_WINDOW_SECONDS", "60"),
    ("RATE_LIMIT_SWEEP_INTERVAL_SECONDS", "300"),
    ("BCRYPT_COST", "10"),
    ("OPENAI_MODEL", "gpt-4o"),
    ("OPENAI_BASE_URL", "https://api.openai.com/v1"),
    ("LOG_LEVEL", "info"),
];

/// Parameters without a compiled-in default, loaded into the store only
/// when present in the environment.
const OPTIONAL: &[&str] = &[
    "DATABASE_URL",
    "JWT_SECRET",
    "CORS_ORIGIN",
    "OPENAI_API_KEY",
    "DB_MAX_CONNECTIONS",
    "DB_MIN_CONNECTIONS",
    "DB_ACQUIRE_TIMEOUT_SECONDS",
];

pub fn init() {
    match dotenv::dotenv() {
        Ok(path) => info!("Loaded environment file: {:?}", path),
        Err(_) => warn!("No .env file found, using system environment variables"),
    }

    let mut config = HashMap::new();

    // Load defaults first
    for (key, value) in DEFAULTS {
        config.insert(key.to_string(), value.to_string());
    }

    // Override with environment variables
    for (key, _) in DEFAULTS {
        if let Ok(value) = std::env::var(key) {
            config.insert(key.to_string(), value);
        }
    }

    for key in OPTIONAL {
        if let Ok(value) = std::env::var(key) {
            config.insert(key.to_string(), value);
        }
    }

    if CONFIG.set(config).is_err() {
        error!("Configuration already initialized");
    } else {
        info!("Configuration initialized successfully");
    }
}

pub fn get(parameter: &str) -> String {
    CONFIG
        .get()
        .and_then(|config| config.get(parameter))
        .cloned()
        .unwrap_or_else(|| {
            error!("Configuration parameter '{}' not found", parameter);
            panic!("Required configuration parameter '{}' is missing", parameter);
        })
}

pub fn get_optional(parameter: &str) -> Option<String> {
    CONFIG
        .get()
        .and_then(|config| config.get(parameter))
        .filter(|value| !value.is_empty())
        .cloned()
}

pub fn get_i64(parameter: &str) -> i64 {
    let value = get(parameter);
    value.parse::<i64>().unwrap_or_else(|_| {
        error!("Configuration parameter '{}' is not a valid i64: {}", parameter, value);
        panic!("Configuration parameter '{}' is not a valid i64", parameter);
    })
}

pub fn get_u64(parameter: &str) -> u64 {
    let value = get(parameter);
    value.parse::<u64>().unwrap_or_else(|_| {
        error!("Configuration parameter '{}' is not a valid u64: {}", parameter, value);
        panic!("Configuration parameter '{}' is not a valid u64", parameter);
    })
}

pub fn get_u32(parameter: &str) -> u32 {
    let value = get(parameter);
    value.parse::<u32>().unwrap_or_else(|_| {
        error!("Configuration parameter '{}' is not a valid u32: {}", parameter, value);
        panic!("Configuration parameter '{}' is not a valid u32", parameter);
    })
}
