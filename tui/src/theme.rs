//! Theme and Colors
//!
//! The terminal's color palette and the mapping from the core's tagged
//! spans to ratatui styles. The core never names an RGB value; this module
//! owns the palette and the rendering strategy (colored vs plain) selected
//! at startup.

use ratatui::style::{Color, Modifier, Style};
use termfolio_core::{ColorName, EntryKind, Span};

// ============================================================================
// Palette
// ============================================================================

/// Soft teal, shared by the cyan/green/blue tags
pub const TEAL: Color = Color::Rgb(0x4e, 0xc9, 0xb0); // #4ec9b0

/// Muted yellow
pub const YELLOW: Color = Color::Rgb(0xdc, 0xdc, 0xaa); // #dcdcaa

/// Muted purple
pub const MAGENTA: Color = Color::Rgb(0xc5, 0x86, 0xc0); // #c586c0

/// Warm orange
pub const ORANGE: Color = Color::Rgb(0xff, 0x8c, 0x69); // #ff8c69

/// Coral red
pub const CORAL: Color = Color::Rgb(0xff, 0x6b, 0x6b); // #ff6b6b

/// Peach
pub const PEACH: Color = Color::Rgb(0xce, 0x91, 0x78); // #ce9178

/// Salmon
pub const SALMON: Color = Color::Rgb(0xfa, 0x80, 0x72); // #fa8072

/// Red-toned pink for section titles on a dark background
pub const HOT_PINK: Color = Color::Rgb(0xff, 0x55, 0x88); // #ff5588

/// Lighter pink
pub const LIGHT_PINK: Color = Color::Rgb(0xff, 0x66, 0xb2); // #ff66b2

/// Even lighter pink
pub const LIGHTER_PINK: Color = Color::Rgb(0xff, 0x80, 0xbf); // #ff80bf

/// Very light, pastel pink
pub const PASTEL_PINK: Color = Color::Rgb(0xff, 0x99, 0xcc); // #ff99cc

/// Bright orange for labels and headings
pub const BRIGHT_ORANGE: Color = Color::Rgb(0xff, 0x80, 0x00); // #ff8000

// ============================================================================
// UI Colors
// ============================================================================

/// The startup banner
pub const BANNER: Color = LIGHTER_PINK;

/// Echoed command lines
pub const COMMAND_ECHO: Color = Color::Rgb(0xd4, 0xd4, 0xd4);

/// Plain command output
pub const OUTPUT: Color = Color::Rgb(0xcc, 0xcc, 0xcc);

/// The prompt on the input line
pub const PROMPT: Color = TEAL;

/// Status bar text
pub const STATUS: Color = Color::DarkGray;

// ============================================================================
// Rendering Strategy
// ============================================================================

/// Which rendering strategy the surface uses
///
/// Both variants are valid renditions of the same content: the console
/// always produces tagged spans, and this choice only decides whether the
/// tags become colors or are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    /// Map color names to the palette, bold
    Colored,
    /// Drop all color
    Plain,
}

/// The palette value for a color name
#[must_use]
pub fn palette(name: ColorName) -> Color {
    match name {
        ColorName::Cyan | ColorName::Green | ColorName::Blue => TEAL,
        ColorName::Yellow => YELLOW,
        ColorName::Magenta => MAGENTA,
        ColorName::Orange => ORANGE,
        ColorName::Coral => CORAL,
        ColorName::Peach => PEACH,
        ColorName::Salmon => SALMON,
        ColorName::HotPink => HOT_PINK,
        ColorName::LightPink => LIGHT_PINK,
        ColorName::LighterPink => LIGHTER_PINK,
        ColorName::PastelPink => PASTEL_PINK,
        ColorName::BrightOrange => BRIGHT_ORANGE,
    }
}

/// The base style for an entry kind
#[must_use]
pub fn entry_base_style(kind: EntryKind, mode: ColorMode) -> Style {
    if mode == ColorMode::Plain {
        return Style::default();
    }
    match kind {
        EntryKind::Banner => Style::default().fg(BANNER),
        EntryKind::Command => Style::default().fg(COMMAND_ECHO),
        EntryKind::Output | EntryKind::Colored => Style::default().fg(OUTPUT),
    }
}

/// The style for one span, given its entry's base style
///
/// A tagged span gets its palette color with bold emphasis; untagged spans
/// keep the base style. In plain mode every span keeps the base style.
#[must_use]
pub fn span_style(span: &Span, base: Style, mode: ColorMode) -> Style {
    match (mode, span.color) {
        (ColorMode::Colored, Some(name)) => Style::default()
            .fg(palette(name))
            .add_modifier(Modifier::BOLD),
        _ => base,
    }
}
