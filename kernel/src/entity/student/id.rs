use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

// Institute-issued identifier, e.g. "CO21034". Not generated by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}
