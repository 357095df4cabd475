//! The ledger-header directory: `sequence`, `parent`, `txns`, `state`.

use crate::context::ResolutionContext;
use crate::decode::LedgerHeader;
use crate::error::ResolveError;

use super::dispatch::node_branch;
use super::state::state_handler;
use super::terminal::directory_terminal;
use super::value::value_file_handler;

pub fn ledger_header_handler(ctx: &mut ResolutionContext, header: LedgerHeader) -> Result<(), ResolveError> {
    ctx.skip_empty();
    if !ctx.at_end() {
        let name = ctx.next_component().expect("at_end() was false");
        return match name.as_str() {
            "sequence" => value_file_handler(ctx, header.sequence.to_string()),
            "parent" => node_branch(ctx, header.parent_hash),
            "txns" => node_branch(ctx, header.tx_root),
            "state" => state_handler(ctx, header.state_root),
            _ => Err(ResolveError::does_not_exist(
                ctx.walked_path(),
                format!("no such entry: {name}"),
            )),
        };
    }
    directory_terminal(
        ctx,
        vec![
            "sequence".to_string(),
            format!("parent -> /nodes/{}", header.parent_hash),
            format!("txns -> /nodes/{}", header.tx_root),
            format!("state -> /nodes/{}", header.state_root),
        ],
    )
}
