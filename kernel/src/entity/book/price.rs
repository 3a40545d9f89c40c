use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookPrice(String);

impl BookPrice {
    pub fn new(price: impl Into<String>) -> Self {
        Self(price.into())
    }
}
