//! The ledger-entry (leaf) directory: `.key` plus one child per visible field.

use crate::context::ResolutionContext;
use crate::decode::LedgerEntry;
use crate::error::ResolveError;

use super::field::field_file_handler;
use super::shared::{find_field, visible_field_names};
use super::terminal::directory_terminal;
use super::value::value_file_handler;

pub fn ledger_entry_handler(ctx: &mut ResolutionContext, entry: LedgerEntry) -> Result<(), ResolveError> {
    ctx.skip_empty();
    if !ctx.at_end() {
        let name = ctx.next_component().expect("at_end() was false");
        if name == ".key" {
            return value_file_handler(ctx, entry.key.to_hex_upper());
        }
        if let Some(field) = find_field(&entry.fields, &name) {
            return field_file_handler(ctx, field.clone());
        }
        return Err(ResolveError::does_not_exist(
            ctx.walked_path(),
            format!("no such field: {name}"),
        ));
    }
    let mut lines = vec![".key".to_string()];
    lines.extend(visible_field_names(&entry.fields));
    directory_terminal(ctx, lines)
}
