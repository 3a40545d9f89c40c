use error_stack::Report;

use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Io(std::io::Error),
    #[error(transparent)]
    Env(dotenvy::Error),
    #[error(transparent)]
    Serde(serde_json::Error),
    #[error(transparent)]
    Http(reqwest::Error),
    #[error("unexpected response status {0}")]
    Status(u16),
    #[error("invalid value for {key}: {reason}")]
    Config { key: &'static str, reason: String },
}

impl From<std::io::Error> for DriverError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<dotenvy::Error> for DriverError {
    fn from(value: dotenvy::Error) -> Self {
        Self::Env(value)
    }
}

impl From<serde_json::Error> for DriverError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

impl From<reqwest::Error> for DriverError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl DriverError {
    fn context(&self) -> KernelError {
        match self {
            DriverError::Io(_) | DriverError::Serde(_) => KernelError::Internal,
            DriverError::Env(_) | DriverError::Config { .. } => KernelError::Invalid,
            DriverError::Http(error) if error.is_timeout() => KernelError::Timeout,
            DriverError::Http(_) | DriverError::Status(_) => KernelError::Network,
        }
    }
}

impl From<DriverError> for Report<KernelError> {
    fn from(value: DriverError) -> Self {
        let context = value.context();
        Report::new(value).change_context(context)
    }
}

/// Lifts a driver-level result into the kernel error stack.
pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T, E> ConvertError for Result<T, E>
where
    E: Into<DriverError>,
{
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| Report::<KernelError>::from(Into::<DriverError>::into(error)))
    }
}

#[cfg(test)]
mod test {
    use error_stack::Report;
    use kernel::KernelError;

    use crate::error::{ConvertError, DriverError};

    #[test]
    fn contexts_follow_error_kind() {
        let io: Result<(), std::io::Error> = Err(std::io::Error::other("disk"));
        let err = io.convert_error().unwrap_err();
        assert!(matches!(err.current_context(), KernelError::Internal));

        let status = Report::<KernelError>::from(DriverError::Status(503));
        assert!(matches!(status.current_context(), KernelError::Network));

        let config = Report::<KernelError>::from(DriverError::Config {
            key: "BOOKSHELF_SEARCH_TIMEOUT_SECS",
            reason: "not a number".to_string(),
        });
        assert!(matches!(config.current_context(), KernelError::Invalid));
    }
}
