//! The resolver driver: the single entry point a CLI collaborator calls.

use crate::context::{Action, ResolutionContext};
use crate::error::ResolveError;
use crate::handlers::root_handler;
use crate::os::OperatingSystem;

/// Normalizes `cwd ⊕ argument`, positions the cursor after the root, and
/// dispatches to the root handler. Interprets no types itself — every decision
/// about node shape lives in a handler.
pub fn resolve(os: &mut dyn OperatingSystem, argument: &str, action: Action) -> Result<(), ResolveError> {
    let mut ctx = ResolutionContext::new(os, argument, action);
    root_handler(&mut ctx)
}
