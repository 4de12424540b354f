//! Utility functions for the rockfall dashboard

use std::path::Path;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count the way the intake cards show it: `0 Bytes`, `512 Bytes`,
/// `2 KB`, `1.5 MB`. Values are rounded to two decimals with trailing zeros
/// dropped; anything past gigabytes stays in GB.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    let label = SIZE_UNITS.get(unit).copied().unwrap_or("GB");
    format!("{trimmed} {label}")
}

/// Validate file extension
#[must_use]
pub fn validate_file_extension(filename: &str, allowed: &[String]) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            allowed
                .iter()
                .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
}

/// Upper-cased extension list for the "Accepted formats" hint, e.g. `JPG,JPEG,PNG,TIFF`
#[must_use]
pub fn accepted_formats_label(allowed: &[String]) -> String {
    allowed
        .iter()
        .map(|entry| entry.replace('.', "").to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join(",")
}

/// Sanitize filename for safe display and logging
#[must_use]
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            match c {
                // Keep alphanumeric, dots, underscores, and hyphens
                c if c.is_alphanumeric() || c == '.' || c == '_' || c == '-' => c,
                _ => '_',
            }
        })
        .collect::<String>()
        .trim_matches('_')
        .to_string()
}
