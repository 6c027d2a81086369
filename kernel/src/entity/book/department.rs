use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

// Free-text classification, e.g. "CO", "EJ", "AI ML".
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct Department(String);

impl Department {
    pub fn new(department: impl Into<String>) -> Self {
        Self(department.into())
    }
}
