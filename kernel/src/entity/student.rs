mod id;
mod name;

pub use self::{id::*, name::*};
