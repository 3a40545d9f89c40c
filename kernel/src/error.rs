use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    Invalid,
    NotFound,
    Conflict,
    Timeout,
    Network,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Invalid => write!(f, "Invalid input"),
            KernelError::NotFound => write!(f, "Not found"),
            KernelError::Conflict => write!(f, "Conflicting state"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Network => write!(f, "Remote service unavailable"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
