//! Glyph and color defaults for spawned bodies.
//!
//! Colors are CSS hex strings; physics only ever sees the palette index.

pub const DEFAULT_GLYPH: char = 'あ';

pub const DEFAULT_PALETTE: [&str; 17] = [
    "#ef4444", // red
    "#f97316", // orange
    "#f59e0b", // amber
    "#facc15", // yellow
    "#84cc16", // lime
    "#22c55e", // green
    "#10b981", // emerald
    "#14b8a6", // teal
    "#06b6d4", // cyan
    "#0ea5e9", // sky
    "#2563eb", // blue
    "#4f46e5", // indigo
    "#7c3aed", // violet
    "#9333ea", // purple
    "#c026d3", // fuchsia
    "#db2777", // pink
    "#e11d48", // rose
];

pub fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}
