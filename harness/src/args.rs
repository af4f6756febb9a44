//! Structural validation of pass-through runner flags.
//!
//! `extra-args` entries are forwarded verbatim to the underlying test
//! runner, so a malformed entry must be rejected before a run starts rather
//! than surfacing as a runner failure mid-flight. Validation also settles
//! the focus pattern: an empty focus means "run the conformance suite".

use tracing::debug;

use crate::error::ArgsError;
use crate::settings::{EXTRA_ARGS, FOCUS, Settings};

/// Focus pattern applied when the caller supplied none.
pub const DEFAULT_FOCUS: &str = r"\[Conformance\]";

/// Validate `focus` and `extra-args` in `settings`, normalizing both.
///
/// An empty `focus` is replaced with [`DEFAULT_FOCUS`] and written back
/// before the argument scan, so the default sticks even when a later entry
/// fails. Entries of `extra-args` are checked left-to-right and the first
/// violation is returned. On success both keys are rewritten, so downstream
/// consumers always observe normalized values.
pub fn validate_args(settings: &mut Settings) -> Result<(), ArgsError> {
    let mut focus = settings.string(FOCUS).to_string();
    if focus.is_empty() {
        debug!(focus = DEFAULT_FOCUS, "no focus supplied, defaulting to the conformance suite");
        focus = DEFAULT_FOCUS.to_string();
    }
    settings.set(FOCUS, focus);

    let extra_args = settings.string_list(EXTRA_ARGS).to_vec();
    for arg in &extra_args {
        let (key, value) = match arg.split_once('=') {
            Some(split) => split,
            None => return Err(malformed(arg, &extra_args)),
        };
        if !key.starts_with("--") {
            return Err(ArgsError::InvalidKeyPrefix {
                key: key.to_string(),
                args: extra_args.clone(),
            });
        }
        if value.is_empty() {
            return Err(malformed(arg, &extra_args));
        }
    }
    settings.set_list(EXTRA_ARGS, extra_args);

    Ok(())
}

fn malformed(arg: &str, args: &[String]) -> ArgsError {
    ArgsError::MalformedArgument {
        arg: arg.to_string(),
        args: args.to_vec(),
    }
}
