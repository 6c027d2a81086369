mod book;
mod request;

pub use self::{book::*, request::*};
