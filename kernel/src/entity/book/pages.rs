use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

// Free text, not a count. Parse at the boundary if arithmetic is ever needed.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct PageCount(String);

impl PageCount {
    pub fn new(pages: impl Into<String>) -> Self {
        Self(pages.into())
    }
}
