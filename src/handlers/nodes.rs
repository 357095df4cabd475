//! The root directory and the `/nodes` index.

use crate::context::ResolutionContext;
use crate::digest::Digest;
use crate::error::ResolveError;

use super::dispatch::node_branch;
use super::terminal::directory_terminal;

/// `/`: the sole child is `nodes`.
pub fn root_handler(ctx: &mut ResolutionContext) -> Result<(), ResolveError> {
    ctx.skip_empty();
    if !ctx.at_end() {
        let name = ctx.next_component().expect("at_end() was false");
        if name == "nodes" {
            return nodes_index_handler(ctx);
        }
        return Err(ResolveError::does_not_exist(
            ctx.walked_path(),
            format!("no such entry: {name}"),
        ));
    }
    directory_terminal(ctx, vec!["nodes".to_string()])
}

/// `/nodes`: any child name is parsed as a 64-hex-character digest and
/// dispatched through the node-branch trampoline. The full index is not
/// enumerable, so `LS` emits a placeholder rather than real content.
pub fn nodes_index_handler(ctx: &mut ResolutionContext) -> Result<(), ResolveError> {
    ctx.skip_empty();
    if !ctx.at_end() {
        let name = ctx.next_component().expect("at_end() was false");
        let digest = Digest::from_hex(&name)
            .map_err(|e| ResolveError::not_a_digest(ctx.walked_path(), e.to_string()))?;
        return node_branch(ctx, digest);
    }
    directory_terminal(ctx, vec!["<node ID>".to_string()])
}
