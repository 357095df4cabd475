//! The state directory (`root`, `accounts`) and the accounts directory, which
//! walks the 16-ary state trie to locate an account's ledger entry.

use crate::address::{account_keylet, parse_account_id};
use crate::context::ResolutionContext;
use crate::decode::{decode_inner_children, decode_leaf, strip_prefix, LedgerEntry};
use crate::digest::Digest;
use crate::error::ResolveError;
use crate::prefix::HashPrefixTag;

use super::dispatch::node_branch;
use super::entry::ledger_entry_handler;
use super::terminal::directory_terminal;

/// `state`: `root` is a link back to the state-trie root node; `accounts`
/// establishes a scoped ambient root over that node's blob before recursing.
pub fn state_handler(ctx: &mut ResolutionContext, state_root: Digest) -> Result<(), ResolveError> {
    ctx.skip_empty();
    if !ctx.at_end() {
        let name = ctx.next_component().expect("at_end() was false");
        return match name.as_str() {
            "root" => node_branch(ctx, state_root),
            "accounts" => {
                let root_blob = ctx
                    .db()
                    .fetch(&state_root)
                    .ok_or_else(|| ResolveError::does_not_exist(ctx.walked_path(), "state root missing"))?;
                ctx.with_ambient_root(root_blob, accounts_handler)
            }
            _ => Err(ResolveError::does_not_exist(
                ctx.walked_path(),
                format!("no such entry: {name}"),
            )),
        };
    }
    directory_terminal(
        ctx,
        vec!["accounts".to_string(), format!("root -> /nodes/{}", state_root)],
    )
}

/// `accounts`: every child name is a base58 account address. Resolving one
/// walks the ambient state trie for its keylet and lands on a ledger entry.
pub fn accounts_handler(ctx: &mut ResolutionContext) -> Result<(), ResolveError> {
    ctx.skip_empty();
    if !ctx.at_end() {
        let name = ctx.next_component().expect("at_end() was false");
        let account_id = parse_account_id(&name)
            .ok_or_else(|| ResolveError::does_not_exist(ctx.walked_path(), "no such account"))?;
        let key = account_keylet(&account_id);
        let entry = locate_account_leaf(ctx, &key)?
            .ok_or_else(|| ResolveError::does_not_exist(ctx.walked_path(), "account not found in state trie"))?;
        return ledger_entry_handler(ctx, entry);
    }
    directory_terminal(
        ctx,
        vec!["<base58 account id, e.g. rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh>".to_string()],
    )
}

/// Walks the trie rooted at the ambient root, selecting a branch at each inner
/// node by the nibble of `key` at that depth, until a leaf is found or the walk
/// falls off the trie. Terminates within 64 iterations for any 256-bit key.
fn locate_account_leaf(ctx: &ResolutionContext, key: &Digest) -> Result<Option<LedgerEntry>, ResolveError> {
    let mut object = ctx
        .ambient_root()
        .expect("accounts handler is only reachable with an ambient root installed")
        .clone();

    for depth in 0..64 {
        let tag = HashPrefixTag::peek(&object).and_then(HashPrefixTag::from_tag);
        let body = match tag.and_then(|t| strip_prefix(&object).ok().map(|b| (t, b))) {
            Some((t, b)) => (t, b.to_vec()),
            None => return Ok(None),
        };
        match body.0 {
            HashPrefixTag::LeafNode => {
                let entry = decode_leaf(&body.1)
                    .map_err(|e| ResolveError::type_unknown(ctx.walked_path(), e.to_string()))?;
                return Ok(Some(entry));
            }
            HashPrefixTag::InnerNode => {
                let children = decode_inner_children(&body.1)
                    .map_err(|e| ResolveError::type_unknown(ctx.walked_path(), e.to_string()))?;
                let branch = key.nibble_at(depth) as usize;
                let child_digest = children[branch];
                if child_digest.is_zero() {
                    return Ok(None);
                }
                match ctx.db().fetch(&child_digest) {
                    Some(blob) => object = blob,
                    None => return Ok(None),
                }
            }
            HashPrefixTag::LedgerHeader | HashPrefixTag::TxNode => return Ok(None),
        }
    }
    Ok(None)
}
