//! Engineering-notation values.
//!
//! Netlist values may carry SPICE suffixes (`4.7k`, `10MEG`, `100n`), and
//! the report layer prints results back with SI prefixes.

/// Multiplier suffixes, matched case-insensitively. `MEG` must be tried
/// before `M`: a bare `M` means milli.
const SUFFIXES: &[(&str, f64)] = &[
    ("MEG", 1e6),
    ("T", 1e12),
    ("G", 1e9),
    ("K", 1e3),
    ("M", 1e-3),
    ("U", 1e-6),
    ("N", 1e-9),
    ("P", 1e-12),
    ("F", 1e-15),
];

/// Parse a value with an optional engineering suffix.
///
/// Returns `None` if the text is neither a plain number nor a number
/// followed by a known suffix.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(v) = text.parse::<f64>() {
        return Some(v);
    }

    let upper = text.to_ascii_uppercase();
    for (suffix, multiplier) in SUFFIXES {
        if let Some(prefix) = upper.strip_suffix(suffix) {
            if let Ok(v) = prefix.parse::<f64>() {
                return Some(v * multiplier);
            }
        }
    }

    None
}

/// Format a value with an SI prefix and four significant decimals.
pub fn format_value(value: f64) -> String {
    const PREFIXES: &[(f64, &str)] = &[
        (1e12, "T"),
        (1e9, "G"),
        (1e6, "M"),
        (1e3, "k"),
        (1.0, ""),
        (1e-3, "m"),
        (1e-6, "u"),
        (1e-9, "n"),
        (1e-12, "p"),
        (1e-15, "f"),
    ];

    if value == 0.0 || !value.is_finite() {
        return format!("{:.4}", value);
    }

    let magnitude = value.abs();
    for (scale, prefix) in PREFIXES {
        if magnitude >= *scale {
            return format!("{:.4}{}", value / scale, prefix);
        }
    }

    // Below femto: print unscaled.
    format!("{:.4e}", value)
}
