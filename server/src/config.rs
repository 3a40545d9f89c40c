use std::net::SocketAddr;
use std::path::PathBuf;

use error_stack::{Report, ResultExt};

use kernel::KernelError;

const BIND: &str = "BOOKSHELF_BIND";
const LOG_DIR: &str = "BOOKSHELF_LOG_DIR";

/// Process-level settings. Storage, search and seed read their own variables in `driver`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub log_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::from_vars(var_or)
    }

    fn from_vars(
        var: impl Fn(&str, &str) -> error_stack::Result<String, KernelError>,
    ) -> error_stack::Result<Self, KernelError> {
        let bind = var(BIND, "127.0.0.1:8080")?
            .parse::<SocketAddr>()
            .change_context_lazy(|| KernelError::Invalid)
            .attach_printable_lazy(|| format!("{BIND} is not a socket address"))?;
        let log_dir = PathBuf::from(var(LOG_DIR, "./logs")?);
        Ok(Self { bind, log_dir })
    }
}

fn var_or(key: &str, default: &str) -> error_stack::Result<String, KernelError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(value),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(default.to_string()),
        Err(error) => Err(Report::new(error)
            .change_context(KernelError::Invalid)
            .attach_printable(format!("failed to read {key}"))),
    }
}
