use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct CoverImage(String);

impl CoverImage {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }
}
