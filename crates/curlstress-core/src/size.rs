//! Human-readable byte sizes for response lengths.

/// Units after plain bytes, in escalation order. Nothing above GiB.
const UNITS: [&str; 3] = ["KiB", "MiB", "GiB"];

/// Formats a byte count as `"<value> <unit>"`.
///
/// The value is divided by 1024 while it is at least 1024, up to GiB, and
/// rounded half away from zero to one decimal. Whole values print without a
/// fractional part.
///
/// # Examples
///
/// - `format_size(Some(1))` → `"1 byte"`
/// - `format_size(Some(1536))` → `"1.5 KiB"`
/// - `format_size(Some(1 << 40))` → `"1024 GiB"`
pub fn format_size(bytes: Option<u64>) -> Option<String> {
    let bytes = bytes?;
    let mut value = bytes as f64;
    let mut unit = if bytes == 1 { "byte" } else { "bytes" };

    for next in UNITS {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }

    let rounded = (value * 10.0).round() / 10.0;
    Some(format!("{} {}", rounded, unit))
}
