use crate::error::DriverError;

pub mod catalog;
pub mod clock;
pub mod error;
pub mod search;
pub mod seed;
pub mod storage;

pub(crate) fn env(key: &str) -> Result<String, DriverError> {
    dotenvy::var(key).map_err(DriverError::from)
}

/// Like [`env`], but an unset variable falls back to `default`.
pub(crate) fn env_or(key: &str, default: &str) -> Result<String, DriverError> {
    match env(key) {
        Err(DriverError::Env(dotenvy::Error::EnvVar(std::env::VarError::NotPresent))) => {
            Ok(default.to_string())
        }
        other => other,
    }
}

#[cfg(test)]
pub(crate) fn fixed_vars(
    pairs: &[(&str, &str)],
) -> impl Fn(&str, &str) -> Result<String, DriverError> {
    let pairs = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect::<std::collections::HashMap<_, _>>();
    move |key: &str, default: &str| {
        Ok(pairs
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string()))
    }
}
