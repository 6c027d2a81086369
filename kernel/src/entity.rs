mod book;
mod request;
mod student;

pub use self::{book::*, request::*, student::*};
