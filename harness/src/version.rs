//! Normalization of discovered cluster version strings.
//!
//! Server versions arrive decorated: build metadata (`v1.28.6+0fb426`),
//! extra trailing segments, or a missing `v` prefix. Conformance image tags
//! want exactly `vMAJOR.MINOR.PATCH`.

use crate::error::VersionError;

/// Trim `version` to its canonical `vMAJOR.MINOR.PATCH` form.
///
/// A missing `v` prefix is tolerated. Build metadata and any other trailing
/// decoration are discarded without further validation. Inputs with fewer
/// than three numeric components are rejected.
pub fn trim_version(version: &str) -> Result<String, VersionError> {
    use std::sync::LazyLock;
    static CORE_RE: LazyLock<regex::Regex> =
        LazyLock::new(|| regex::Regex::new(r"^v\d+\.\d+\.\d+").unwrap());

    let prefixed = if version.starts_with('v') {
        version.to_string()
    } else {
        format!("v{version}")
    };

    match CORE_RE.find(&prefixed) {
        Some(core) => Ok(core.as_str().to_string()),
        None => Err(VersionError::Malformed { version: prefixed }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_version_passes_through() {
        assert_eq!(trim_version("v1.28.6").expect("trim"), "v1.28.6");
    }

    #[test]
    fn build_metadata_is_stripped() {
        assert_eq!(trim_version("v1.28.6+0fb426").expect("trim"), "v1.28.6");
        assert_eq!(
            trim_version("v1.28.6+0fb426.20220304").expect("trim"),
            "v1.28.6"
        );
    }

    #[test]
    fn missing_prefix_is_normalized() {
        assert_eq!(trim_version("1.28.6").expect("trim"), "v1.28.6");
    }

    #[test]
    fn trailing_segments_are_discarded() {
        assert_eq!(trim_version("v1.28.6.1").expect("trim"), "v1.28.6");
    }

    #[test]
    fn non_digit_separator_is_rejected() {
        let err = trim_version("v1.28,0").expect_err("trim should fail");
        assert_eq!(
            err,
            VersionError::Malformed {
                version: "v1.28,0".to_string(),
            }
        );
    }

    #[test]
    fn short_version_is_rejected() {
        let err = trim_version("v1.28").expect_err("trim should fail");
        assert!(err.to_string().contains("v1.28"));
    }

    #[test]
    fn trimming_is_idempotent_on_valid_output() {
        let once = trim_version("1.28.6+0fb426").expect("trim");
        assert_eq!(trim_version(&once).expect("trim again"), once);
    }
}
