use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookLanguage(String);

impl BookLanguage {
    pub fn new(language: impl Into<String>) -> Self {
        Self(language.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
