use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads an environment variable, falling back to `default` when it is
/// missing or cannot be parsed into `T`
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - Value returned when the variable is absent or malformed
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.trim().parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Reads a boolean flag from the environment
///
/// Accepts `1`, `true`, `yes` and `on` (case-insensitive) as enabled and
/// `0`, `false`, `no` and `off` as disabled. Anything else yields `default`.
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    match env::var(env_var) {
        Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            other => {
                error!("Invalid flag value for {}: {}, using default", env_var, other);
                default
            }
        },
        Err(_) => default,
    }
}

/// Reads a non-empty string from the environment
///
/// Empty or whitespace-only values are treated as absent.
pub fn get_env_non_empty(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
