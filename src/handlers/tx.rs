//! The transaction-with-metadata directory: one child per visible field, no
//! `.key` pseudo-child (the wrapping node's own digest is this object's identity).

use crate::context::ResolutionContext;
use crate::decode::TxWithMeta;
use crate::error::ResolveError;

use super::field::field_file_handler;
use super::shared::{find_field, visible_field_names};
use super::terminal::directory_terminal;

pub fn tx_with_meta_handler(ctx: &mut ResolutionContext, tx: TxWithMeta) -> Result<(), ResolveError> {
    ctx.skip_empty();
    if !ctx.at_end() {
        let name = ctx.next_component().expect("at_end() was false");
        if let Some(field) = find_field(&tx.fields, &name) {
            return field_file_handler(ctx, field.clone());
        }
        return Err(ResolveError::does_not_exist(
            ctx.walked_path(),
            format!("no such field: {name}"),
        ));
    }
    directory_terminal(ctx, visible_field_names(&tx.fields))
}
