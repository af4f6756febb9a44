//! Typed errors returned by the validation core.
//!
//! Variants carry the offending token together with the full context the
//! messages cite, so callers can match structurally while users still get a
//! directly diagnosable message.

use thiserror::Error;

/// Structural violations found while validating pass-through runner flags.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// Entry lacks a `=` separator or carries an empty value.
    #[error("expected [[{arg}]] in [[{}]] to be of --key=value format", .args.join(" "))]
    MalformedArgument {
        /// The offending entry, verbatim.
        arg: String,
        /// The full argument list, in original order.
        args: Vec<String>,
    },

    /// Entry's key portion does not start with `--`.
    #[error("expected key [{key}] in [[{}]] to start with prefix --", .args.join(" "))]
    InvalidKeyPrefix {
        /// The raw key portion (text before the first `=`).
        key: String,
        /// The full argument list, in original order.
        args: Vec<String>,
    },
}

/// A version string without a recognizable `MAJOR.MINOR.PATCH` core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("version {version} does not match the expected vMAJOR.MINOR.PATCH format")]
    Malformed { version: String },
}
