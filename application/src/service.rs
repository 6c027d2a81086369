mod book;
mod request;

pub use self::{book::*, request::*};

use error_stack::Report;
use kernel::KernelError;

pub(in crate::service) fn required(
    value: String,
    field: &'static str,
) -> error_stack::Result<String, KernelError> {
    if value.trim().is_empty() {
        return Err(
            Report::new(KernelError::Validation).attach_printable(format!("{field} is required"))
        );
    }
    Ok(value)
}
