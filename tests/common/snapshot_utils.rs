//! Utilities for snapshot testing with insta

use insta::{assert_snapshot, Settings};

/// Configure insta settings for consistent snapshots
pub fn with_settings<F>(f: F)
where
    F: FnOnce(),
{
    let mut settings = Settings::clone_current();
    settings.set_snapshot_path("../snapshots");
    settings.set_prepend_module_to_snapshot(false);
    settings.bind(f);
}

/// Snapshot of plain text output, such as a conversion table
pub fn assert_text_snapshot(name: &str, content: &str) {
    with_settings(|| {
        assert_snapshot!(name, content);
    });
}

/// Helper for creating error snapshots with consistent formatting
pub fn assert_error_snapshot(name: &str, error: &dyn std::fmt::Display) {
    with_settings(|| {
        assert_snapshot!(name, format!("{:#}", error));
    });
}
