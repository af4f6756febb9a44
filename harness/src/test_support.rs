//! Test-only helpers for seeding settings stores.

use crate::settings::{EXTRA_ARGS, FOCUS, Settings};

/// Build a store with `focus` and `extra-args` populated.
pub fn seeded(focus: &str, extra_args: &[&str]) -> Settings {
    let mut settings = Settings::new();
    settings.set(FOCUS, focus);
    settings.set_list(
        EXTRA_ARGS,
        extra_args.iter().map(|arg| arg.to_string()).collect(),
    );
    settings
}
