//! Environment variable handling for creditpay.
//!
//! Secrets never live in the config files. A file holds the marker
//! `secret_from_env` instead, and the marker is replaced at load time by the
//! environment variable derived from the value's path:
//!
//! * `CREDITPAY_SECRET_STRIPE_SECRET_KEY` (prefixed form, checked first)
//! * `STRIPE_SECRET_KEY` (plain form, as set by most hosting platforms)

use std::env;

use serde_json::Value;
use tracing::warn;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "CREDITPAY";

/// The prefix for secret environment variables
pub const SECRET_PREFIX: &str = "CREDITPAY_SECRET";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// The separator for secret environment variables
pub const SECRET_SEPARATOR: &str = "_";

/// Placeholder value replaced by an environment variable at load time
pub const SECRET_MARKER: &str = "secret_from_env";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a secret path to its prefixed environment variable name
///
/// `"stripe.secret_key"` becomes `"CREDITPAY_SECRET_STRIPE_SECRET_KEY"`.
pub fn secret_path_to_env_var(path: &str) -> String {
    let path = path.replace('.', SECRET_SEPARATOR);
    format!("{}{}{}", SECRET_PREFIX, SECRET_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to its plain environment variable name
///
/// `"supabase.service_role_key"` becomes `"SUPABASE_SERVICE_ROLE_KEY"`.
pub fn plain_secret_path_to_env_var(path: &str) -> String {
    path.replace('.', SECRET_SEPARATOR).to_uppercase()
}

/// Get the value of a secret from the process environment, trying the
/// prefixed name before the plain one.
pub fn get_secret_env_var(path: &str) -> Option<String> {
    env::var(secret_path_to_env_var(path))
        .or_else(|_| env::var(plain_secret_path_to_env_var(path)))
        .ok()
}

/// Replace every `secret_from_env` marker in `value` using `lookup`.
///
/// Returns the paths whose secret could not be resolved; those markers are
/// left in place.
pub fn inject_secrets_with<F>(value: &mut Value, lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    fn walk<F>(path: &mut Vec<String>, obj: &mut Value, lookup: &F, missing: &mut Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    path.push(k.clone());
                    walk(path, v, lookup, missing);
                    path.pop();
                }
            }
            Value::String(s) if s == SECRET_MARKER => {
                let path_str = path.join(".");
                match lookup(&path_str) {
                    Some(secret) => *s = secret,
                    None => missing.push(path_str),
                }
            }
            _ => {}
        }
    }

    let mut missing = Vec::new();
    walk(&mut Vec::new(), value, &lookup, &mut missing);
    missing
}

/// Replace every `secret_from_env` marker in `value` from the environment.
pub fn inject_env_secrets(value: &mut Value) {
    for path in inject_secrets_with(value, get_secret_env_var) {
        warn!(
            "Secret for '{}' not found (expected {} or {})",
            path,
            secret_path_to_env_var(&path),
            plain_secret_path_to_env_var(&path)
        );
    }
}
