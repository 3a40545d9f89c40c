use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

// Stored as typed-in text; "1965", "c. 1965" and "" are all accepted.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct PublicationYear(String);

impl PublicationYear {
    pub fn new(year: impl Into<String>) -> Self {
        Self(year.into())
    }
}
