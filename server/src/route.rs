mod book;
mod export;
mod request;

pub use self::{book::*, export::*, request::*};
