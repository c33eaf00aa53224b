// Tailwind 600 shades, used for series colors
use std::collections::HashMap;

pub const TAILWIND_COLORS_600: [(&str, &str); 22] = [
    ("slate", "#475569"),
    ("gray", "#4b5563"),
    ("zinc", "#52525b"),
    ("neutral", "#525252"),
    ("stone", "#57534e"),
    ("red", "#dc2626"),
    ("orange", "#ea580c"),
    ("amber", "#d97706"),
    ("yellow", "#ca8a04"),
    ("lime", "#65a30d"),
    ("green", "#16a34a"),
    ("emerald", "#059669"),
    ("teal", "#0d9488"),
    ("cyan", "#0891b2"),
    ("sky", "#0284c7"),
    ("blue", "#2563eb"),
    ("indigo", "#4f46e5"),
    ("violet", "#7c3aed"),
    ("purple", "#9333ea"),
    ("fuchsia", "#c026d3"),
    ("pink", "#db2777"),
    ("rose", "#e11d48"),
];

/// Series colors in assignment order
pub const DEFAULT_CHART_COLORS: [&str; 10] = [
    "#2563eb", // blue
    "#059669", // emerald
    "#d97706", // amber
    "#e11d48", // rose
    "#7c3aed", // violet
    "#0891b2", // cyan
    "#ea580c", // orange
    "#db2777", // pink
    "#0d9488", // teal
    "#4f46e5", // indigo
];

/// Color for a series: the caller's override if any, else the palette slot.
pub fn column_color<'a>(
    column: &str,
    index: usize,
    overrides: &'a HashMap<String, String>,
) -> &'a str {
    match overrides.get(column) {
        Some(color) if !color.is_empty() => color.as_str(),
        _ => DEFAULT_CHART_COLORS[index % DEFAULT_CHART_COLORS.len()],
    }
}

/// Reverse lookup of a Tailwind family name from its hex value
pub fn color_name(hex: &str) -> Option<&'static str> {
    TAILWIND_COLORS_600
        .iter()
        .find(|(_, value)| value.eq_ignore_ascii_case(hex))
        .map(|(name, _)| *name)
}
