//! Tagged Text Content Model
//!
//! Colored output is represented as spans carrying a color *name*, never as
//! presentation syntax embedded in strings. The formatters build spans
//! directly; inline `[NAME]text[/NAME]` markup exists only at the edges,
//! where config-supplied body text may carry it. Mapping a [`ColorName`] to
//! an actual color value is a surface concern.

use serde::{Deserialize, Serialize};

/// The fixed palette of color identifiers the markup understands
///
/// Tag names are matched case-insensitively; anything outside this palette
/// is not a color and passes through literally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorName {
    /// Soft teal
    Cyan,
    /// Soft teal (same value as cyan)
    Green,
    /// Soft teal (same value as cyan)
    Blue,
    /// Muted yellow
    Yellow,
    /// Muted purple
    Magenta,
    /// Warm orange
    Orange,
    /// Coral red
    Coral,
    /// Peach
    Peach,
    /// Salmon
    Salmon,
    /// Red-toned pink, used for section titles
    HotPink,
    /// Lighter pink
    LightPink,
    /// Even lighter pink
    LighterPink,
    /// Very light, pastel pink
    PastelPink,
    /// Bright orange, used for labels and headings
    BrightOrange,
}

impl ColorName {
    /// All palette entries, in tag-matching order
    pub const ALL: [ColorName; 14] = [
        ColorName::Cyan,
        ColorName::Green,
        ColorName::Blue,
        ColorName::Yellow,
        ColorName::Magenta,
        ColorName::Orange,
        ColorName::Coral,
        ColorName::Peach,
        ColorName::Salmon,
        ColorName::HotPink,
        ColorName::LightPink,
        ColorName::LighterPink,
        ColorName::PastelPink,
        ColorName::BrightOrange,
    ];

    /// The canonical (uppercase) tag name for this color
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Cyan => "CYAN",
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
            Self::Yellow => "YELLOW",
            Self::Magenta => "MAGENTA",
            Self::Orange => "ORANGE",
            Self::Coral => "CORAL",
            Self::Peach => "PEACH",
            Self::Salmon => "SALMON",
            Self::HotPink => "HOTPINK",
            Self::LightPink => "LIGHTPINK",
            Self::LighterPink => "LIGHTERPINK",
            Self::PastelPink => "PASTELPINK",
            Self::BrightOrange => "BRIGHTORANGE",
        }
    }

    /// Parse a markup tag name (case-insensitive)
    #[must_use]
    pub fn from_tag(name: &str) -> Option<Self> {
        let upper = name.to_uppercase();
        Self::ALL.iter().copied().find(|c| c.tag() == upper)
    }
}

/// A run of text with an optional color
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// The text content
    pub text: String,
    /// The color this span carries, if any
    pub color: Option<ColorName>,
}

impl Span {
    /// Create an uncolored span
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    /// Create a colored span
    #[must_use]
    pub fn colored(text: impl Into<String>, color: ColorName) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

/// One line of styled output
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledLine {
    /// The spans making up this line, in display order
    pub spans: Vec<Span>,
}

impl StyledLine {
    /// An empty (blank) line
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// A line consisting of a single uncolored span
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::plain(text)],
        }
    }

    /// A line built from the given spans
    #[must_use]
    pub fn from_spans(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// The unstyled text of this line
    #[must_use]
    pub fn to_plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A block of styled output, one entry's worth of content
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledText {
    /// The lines making up this block, in display order
    pub lines: Vec<StyledLine>,
}

impl StyledText {
    /// A block built from the given lines
    #[must_use]
    pub fn from_lines(lines: Vec<StyledLine>) -> Self {
        Self { lines }
    }

    /// A single-line block of plain text
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            lines: vec![StyledLine::plain(text)],
        }
    }

    /// The unstyled text of the whole block, lines joined with `\n`
    #[must_use]
    pub fn to_plain(&self) -> String {
        self.lines
            .iter()
            .map(StyledLine::to_plain)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Inline color markup parsing
pub mod markup {
    use super::{ColorName, Span, StyledLine, StyledText};

    /// Parse text that may carry inline `[NAME]text[/NAME]` markers
    ///
    /// A recognized NAME produces a colored span. Unrecognized names and
    /// unterminated tags pass through literally, brackets and all.
    #[must_use]
    pub fn parse(text: &str) -> StyledText {
        StyledText {
            lines: text.split('\n').map(parse_line).collect(),
        }
    }

    /// Parse one line of markup into spans
    #[must_use]
    pub fn parse_line(line: &str) -> StyledLine {
        let mut spans = Vec::new();
        let mut plain = String::new();
        let mut rest = line;

        while let Some(open) = rest.find('[') {
            let (before, after_open) = rest.split_at(open);
            plain.push_str(before);

            match try_tagged_span(after_open) {
                Some((span, consumed)) => {
                    if !plain.is_empty() {
                        spans.push(Span::plain(std::mem::take(&mut plain)));
                    }
                    spans.push(span);
                    rest = &after_open[consumed..];
                }
                None => {
                    // Not a recognized tag; the bracket is literal
                    plain.push('[');
                    rest = &after_open[1..];
                }
            }
        }

        plain.push_str(rest);
        if !plain.is_empty() {
            spans.push(Span::plain(plain));
        }
        StyledLine { spans }
    }

    /// Try to read `[NAME]inner[/NAME]` at the start of `text`
    ///
    /// Returns the colored span and the number of bytes consumed.
    fn try_tagged_span(text: &str) -> Option<(Span, usize)> {
        debug_assert!(text.starts_with('['));
        let close = text.find(']')?;
        let name = &text[1..close];
        let color = ColorName::from_tag(name)?;

        let closing = format!("[/{name}]");
        let body_start = close + 1;
        let body_rel = text[body_start..].find(&closing)?;
        let inner = &text[body_start..body_start + body_rel];
        let consumed = body_start + body_rel + closing.len();
        Some((Span::colored(inner, color), consumed))
    }

}
