mod book;
mod book_request;

pub use self::{book::*, book_request::*};
