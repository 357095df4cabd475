//! The field-file: a single named field of a ledger entry or transaction.

use crate::context::ResolutionContext;
use crate::decode::Field;
use crate::error::ResolveError;

use super::terminal::{file_terminal, reject_remaining_component};

pub fn field_file_handler(ctx: &mut ResolutionContext, field: Field) -> Result<(), ResolveError> {
    reject_remaining_component(ctx)?;
    file_terminal(ctx, field.text)
}
