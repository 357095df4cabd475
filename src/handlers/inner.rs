//! The inner-node handler: a 16-ary trie node addressed by upper-case hex nibble.

use crate::context::ResolutionContext;
use crate::decode::InnerChildren;
use crate::error::ResolveError;

use super::dispatch::node_branch;
use super::terminal::directory_terminal;

pub fn inner_node_handler(ctx: &mut ResolutionContext, children: InnerChildren) -> Result<(), ResolveError> {
    ctx.skip_empty();
    if !ctx.at_end() {
        let name = ctx.next_component().expect("at_end() was false");
        let index = parse_branch_index(&name)
            .ok_or_else(|| ResolveError::does_not_exist(ctx.walked_path(), "invalid branch name"))?;
        let child_digest = children[index];
        if child_digest.is_zero() {
            return Err(ResolveError::does_not_exist(ctx.walked_path(), "empty branch"));
        }
        return node_branch(ctx, child_digest);
    }
    let lines = (0..16)
        .filter(|&i| !children[i].is_zero())
        .map(|i| format!("{:X}", i))
        .collect();
    directory_terminal(ctx, lines)
}

/// A child name must be exactly one upper-case hex digit, `0`..`9A`..`F`.
/// Lower-case (`"a"`) and multi-character names both fail to parse.
fn parse_branch_index(name: &str) -> Option<usize> {
    let mut chars = name.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match c {
        '0'..='9' => Some(c as usize - '0' as usize),
        'A'..='F' => Some(10 + c as usize - 'A' as usize),
        _ => None,
    }
}
