use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct CopyCount(i32);

impl CopyCount {
    pub fn new(count: impl Into<i32>) -> Self {
        Self(count.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct AvailableCopies(i32);

impl AvailableCopies {
    pub fn new(count: impl Into<i32>) -> Self {
        Self(count.into())
    }
}
