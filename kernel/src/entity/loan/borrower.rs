use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct Borrower(String);

impl Borrower {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
