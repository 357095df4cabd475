//! The three terminal actuators shared by every directory and file handler.

use crate::context::{Action, ResolutionContext};
use crate::error::ResolveError;

/// Common `CD`/`LS`/`CAT` behavior for a directory-shaped node: `CD` always
/// succeeds, `LS` emits the given listing, `CAT` fails `NOT_A_FILE`.
pub fn directory_terminal(ctx: &mut ResolutionContext, lines: Vec<String>) -> Result<(), ResolveError> {
    match ctx.action() {
        Action::Cd => {
            let path = ctx.normalized_path();
            ctx.os_mut().chdir(&path);
            ctx.os_mut().setenv("PWD", &path);
            Ok(())
        }
        Action::Ls => {
            for line in lines {
                ctx.os_mut().write_line(&line);
            }
            Ok(())
        }
        Action::Cat => Err(ResolveError::not_a_file(ctx.walked_path(), "cat: is a directory")),
    }
}

/// Common `CD`/`LS`/`CAT` behavior for a file-shaped node: `CD` fails
/// `NOT_A_DIRECTORY`, `LS` emits the argument as written, `CAT` streams `text`.
pub fn file_terminal(ctx: &mut ResolutionContext, text: String) -> Result<(), ResolveError> {
    match ctx.action() {
        Action::Cd => Err(ResolveError::not_a_directory(ctx.walked_path(), "cd: not a directory")),
        Action::Ls => {
            let line = ctx.argument().to_string();
            ctx.os_mut().write_line(&line);
            Ok(())
        }
        Action::Cat => {
            ctx.os_mut().write_line(&text);
            Ok(())
        }
    }
}

/// Fails a file handler that still has path components left to resolve.
pub fn reject_remaining_component(ctx: &mut ResolutionContext) -> Result<(), ResolveError> {
    ctx.skip_empty();
    if !ctx.at_end() {
        let name = ctx.next_component().expect("at_end() was false");
        let _ = name;
        return Err(ResolveError::not_a_directory(
            ctx.walked_path(),
            "not a directory",
        ));
    }
    Ok(())
}
