use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct RequestDate(Date);

impl RequestDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}
