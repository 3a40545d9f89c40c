use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct CoverImage(String);

impl CoverImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct ExternalUrl(String);

impl ExternalUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}
