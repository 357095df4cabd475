//! The value-file: a scalar value rendered as text (a sequence number, the
//! `.key` of a ledger entry, and so on).

use crate::context::ResolutionContext;
use crate::error::ResolveError;

use super::terminal::{file_terminal, reject_remaining_component};

pub fn value_file_handler(ctx: &mut ResolutionContext, text: String) -> Result<(), ResolveError> {
    reject_remaining_component(ctx)?;
    file_terminal(ctx, text)
}
