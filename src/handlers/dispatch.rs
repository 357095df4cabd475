//! The node-branch trampoline: the only place a blob's hash-prefix tag is
//! interpreted. Everything downstream of this function already knows its shape.

use crate::context::ResolutionContext;
use crate::decode::{decode_inner_children, decode_ledger_header, decode_leaf, decode_tx_with_meta, strip_prefix};
use crate::digest::Digest;
use crate::error::ResolveError;
use crate::prefix::HashPrefixTag;

use super::{entry, header, inner, tx};

/// Fetches `digest` from the blob oracle, reads its hash-prefix tag, and
/// dispatches to the handler that owns that node shape.
pub fn node_branch(ctx: &mut ResolutionContext, digest: Digest) -> Result<(), ResolveError> {
    let blob = ctx
        .db()
        .fetch(&digest)
        .ok_or_else(|| ResolveError::node_missing(ctx.walked_path(), "node missing"))?;

    let tag = HashPrefixTag::peek(&blob)
        .and_then(HashPrefixTag::from_tag)
        .ok_or_else(|| ResolveError::type_unknown(ctx.walked_path(), "type unknown"))?;

    let body = strip_prefix(&blob)
        .map_err(|e| ResolveError::type_unknown(ctx.walked_path(), e.to_string()))?;

    match tag {
        HashPrefixTag::LedgerHeader => {
            let decoded = decode_ledger_header(body)
                .map_err(|e| ResolveError::type_unknown(ctx.walked_path(), e.to_string()))?;
            header::ledger_header_handler(ctx, decoded)
        }
        HashPrefixTag::InnerNode => {
            let children = decode_inner_children(body)
                .map_err(|e| ResolveError::type_unknown(ctx.walked_path(), e.to_string()))?;
            inner::inner_node_handler(ctx, children)
        }
        HashPrefixTag::LeafNode => {
            let decoded = decode_leaf(body)
                .map_err(|e| ResolveError::type_unknown(ctx.walked_path(), e.to_string()))?;
            entry::ledger_entry_handler(ctx, decoded)
        }
        HashPrefixTag::TxNode => {
            let decoded = decode_tx_with_meta(body)
                .map_err(|e| ResolveError::type_unknown(ctx.walked_path(), e.to_string()))?;
            tx::tx_with_meta_handler(ctx, decoded)
        }
    }
}
