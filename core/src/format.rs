//! Command Output Formatters
//!
//! One routine per command, reading fields of the loaded [`Config`] and
//! producing a [`StyledText`] block framed by a fixed-width section banner.
//! Formatters build spans directly; no presentation syntax is embedded in
//! the text they generate.
//!
//! Two rendering variants exist in the wild and both are honored here as
//! configuration: [`FormatStyle::centered_titles`] selects centered vs flat
//! section titles, and color on/off is a surface concern entirely outside
//! this module.

use unicode_width::UnicodeWidthStr;

use crate::config::{About, Experience, Personal, Project, Skills};
use crate::text::{markup, ColorName, Span, StyledLine, StyledText};

/// Notice shown when a command is dispatched before the config load resolves
pub const NOT_READY: &str = "Configuration not loaded yet. Please wait...";

/// Entry recorded when the config load fails
pub const LOAD_ERROR: &str = "Error loading configuration file.";

/// The fallback prompt shown before the config is loaded
pub const GUEST_PROMPT: &str = "guest@portfolio ~ % ";

/// The character the section rule is drawn with
const RULE_CHAR: &str = "━";

/// Layout knobs for the section banners
#[derive(Clone, Copy, Debug)]
pub struct FormatStyle {
    /// Width of the section rule, in cells
    pub banner_width: usize,
    /// Center section titles over the rule; when false, titles are flat left
    pub centered_titles: bool,
}

impl Default for FormatStyle {
    fn default() -> Self {
        Self {
            banner_width: 60,
            centered_titles: true,
        }
    }
}

impl FormatStyle {
    /// Left padding for a title: `floor((width - title width) / 2)`, or none
    /// for flat titles
    #[must_use]
    pub fn title_padding(&self, title: &str) -> usize {
        if self.centered_titles {
            self.banner_width.saturating_sub(title.width()) / 2
        } else {
            0
        }
    }
}

/// The section header: blank, rule, centered title, rule, blank
fn section_header(title: &str, style: &FormatStyle) -> Vec<StyledLine> {
    let rule = RULE_CHAR.repeat(style.banner_width);
    let padding = " ".repeat(style.title_padding(title));
    vec![
        StyledLine::blank(),
        StyledLine::plain(rule.clone()),
        StyledLine::from_spans(vec![
            Span::plain(padding),
            Span::colored(title, ColorName::HotPink),
        ]),
        StyledLine::plain(rule),
        StyledLine::blank(),
    ]
}

/// The prompt line prefix
///
/// First word of the name, lowercased, once the config is loaded; a guest
/// prompt before that.
#[must_use]
pub fn prompt(personal: Option<&Personal>) -> String {
    match personal {
        Some(p) => {
            let user = p
                .name
                .split_whitespace()
                .next()
                .unwrap_or("guest")
                .to_lowercase();
            format!("{user}@portfolio ~ % ")
        }
        None => GUEST_PROMPT.to_string(),
    }
}

/// The `help` block: every command with its one-line description
#[must_use]
pub fn help() -> StyledText {
    let lines = [
        "",
        "Available commands:",
        "",
        "  about       - Learn more about me",
        "  experience  - View my work experience",
        "  projects    - See my projects",
        "  skills      - Check out my technical skills",
        "  contact     - Get in touch with me",
        "  clear       - Clear the terminal",
        "  help        - Show this help message",
        "",
        "Tip: Use Tab for autocomplete and Arrow keys for command history!",
        "",
    ];
    StyledText::from_lines(lines.iter().map(|l| StyledLine::plain(*l)).collect())
}

/// The `about` block: greeting as the section title, then the description
///
/// The description may carry inline color markup and is parsed here.
#[must_use]
pub fn about(about: &About, style: &FormatStyle) -> StyledText {
    let mut lines = section_header(&about.greeting, style);
    lines.extend(markup::parse(&about.description).lines);
    lines.push(StyledLine::blank());
    StyledText::from_lines(lines)
}

/// The `experience` block: one section per entry with period and bullets
#[must_use]
pub fn experience(entries: &[Experience], style: &FormatStyle) -> StyledText {
    let mut lines = section_header("Work Experience", style);
    for (index, exp) in entries.iter().enumerate() {
        lines.push(StyledLine::from_spans(vec![
            Span::colored(&exp.title, ColorName::BrightOrange),
            Span::plain(format!(" @ {}", exp.company)),
        ]));
        lines.push(StyledLine::plain(&exp.period));
        lines.push(StyledLine::blank());
        for item in &exp.description {
            lines.push(StyledLine::plain(format!("  \u{2022} {item}")));
        }
        if index < entries.len() - 1 {
            lines.push(StyledLine::blank());
        }
    }
    StyledText::from_lines(lines)
}

/// The `projects` block: name, optional period, description, technologies
#[must_use]
pub fn projects(entries: &[Project], style: &FormatStyle) -> StyledText {
    let mut lines = section_header("Projects", style);
    for (index, project) in entries.iter().enumerate() {
        lines.push(StyledLine::from_spans(vec![Span::colored(
            &project.name,
            ColorName::BrightOrange,
        )]));
        if let Some(period) = &project.period {
            lines.push(StyledLine::plain(period));
        }
        lines.push(StyledLine::plain(&project.description));
        lines.push(StyledLine::plain(format!(
            "Technologies: {}",
            project.technologies.join(", ")
        )));
        if let Some(github) = &project.github {
            lines.push(StyledLine::plain(format!("GitHub: {github}")));
        }
        if index < entries.len() - 1 {
            lines.push(StyledLine::blank());
        }
    }
    StyledText::from_lines(lines)
}

/// The `skills` block: the five groups, each a heading and a joined list
#[must_use]
pub fn skills(skills: &Skills, style: &FormatStyle) -> StyledText {
    let groups: [(&str, &[String]); 5] = [
        ("Programming Languages:", &skills.languages),
        ("ML & Data Science:", &skills.ml_data_science),
        ("Cloud & Backend:", &skills.cloud_backend),
        ("Hardware:", &skills.hardware),
        ("Interests:", &skills.interests),
    ];

    let mut lines = section_header("Technical Skills", style);
    for (index, (heading, list)) in groups.iter().enumerate() {
        lines.push(StyledLine::from_spans(vec![Span::colored(
            *heading,
            ColorName::BrightOrange,
        )]));
        lines.push(StyledLine::plain(format!("  {}", list.join(", "))));
        if index < groups.len() - 1 {
            lines.push(StyledLine::blank());
        }
    }
    StyledText::from_lines(lines)
}

/// The `contact` block: labeled contact fields in a common column
#[must_use]
pub fn contact(personal: &Personal, style: &FormatStyle) -> StyledText {
    // Widest label ("LinkedIn:") plus one space
    const LABEL_COLUMN: usize = 10;
    let field = |label: &str, value: &str| {
        let pad = " ".repeat(LABEL_COLUMN - label.len());
        StyledLine::from_spans(vec![
            Span::colored(label, ColorName::BrightOrange),
            Span::plain(format!("{pad}{value}")),
        ])
    };

    let mut lines = section_header("Get in Touch", style);
    lines.push(field("Email:", &personal.email));
    lines.push(field("GitHub:", &personal.github));
    lines.push(field("LinkedIn:", &personal.linkedin));
    lines.push(StyledLine::blank());
    lines.push(StyledLine::plain("Feel free to reach out!"));
    lines.push(StyledLine::blank());
    StyledText::from_lines(lines)
}

/// The startup banner: title art, then who this portfolio belongs to
#[must_use]
pub fn banner(personal: &Personal) -> StyledText {
    const ART: [&str; 6] = [
        "██████╗  ██████╗ ██████╗ ████████╗███████╗ ██████╗ ██╗     ██╗ ██████╗ ",
        "██╔══██╗██╔═══██╗██╔══██╗╚══██╔══╝██╔════╝██╔═══██╗██║     ██║██╔═══██╗",
        "██████╔╝██║   ██║██████╔╝   ██║   █████╗  ██║   ██║██║     ██║██║   ██║",
        "██╔═══╝ ██║   ██║██╔══██╗   ██║   ██╔══╝  ██║   ██║██║     ██║██║   ██║",
        "██║     ╚██████╔╝██║  ██║   ██║   ██║     ╚██████╔╝███████╗██║╚██████╔╝",
        "╚═╝      ╚═════╝ ╚═╝  ╚═╝   ╚═╝   ╚═╝      ╚═════╝ ╚══════╝╚═╝ ╚═════╝ ",
    ];

    let mut lines = vec![StyledLine::blank()];
    for row in ART {
        lines.push(StyledLine::plain(format!("  {row}")));
    }
    lines.push(StyledLine::blank());
    lines.push(StyledLine::plain(format!("  {}", personal.title)));
    lines.push(StyledLine::plain(format!("  {}", personal.education)));
    lines.push(StyledLine::blank());
    lines.push(StyledLine::plain(
        "  Type 'help' to see available commands.",
    ));
    lines.push(StyledLine::blank());
    StyledText::from_lines(lines)
}

/// The notice for a token matching no recognized command
#[must_use]
pub fn unknown(token: &str) -> StyledText {
    StyledText::plain(format!(
        "Command not found: {token}. Type 'help' for available commands."
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_personal() -> Personal {
        Personal {
            name: "Ada Lovelace".to_string(),
            title: "Software Engineer".to_string(),
            education: "B.Sc. Computer Science".to_string(),
            email: "ada@example.com".to_string(),
            github: "github.com/ada".to_string(),
            linkedin: "linkedin.com/in/ada".to_string(),
        }
    }

    #[test]
    fn test_title_padding_is_floored_half() {
        let style = FormatStyle::default();
        // "Projects" is 8 wide; (60 - 8) / 2 = 26
        assert_eq!(style.title_padding("Projects"), 26);
        // Odd remainder floors: "Get in Touch" is 12 wide; (60 - 12) / 2 = 24
        assert_eq!(style.title_padding("Get in Touch"), 24);
    }

    #[test]
    fn test_flat_titles_have_no_padding() {
        let style = FormatStyle {
            centered_titles: false,
            ..FormatStyle::default()
        };
        assert_eq!(style.title_padding("Projects"), 0);
    }

    #[test]
    fn test_prompt_uses_first_name_lowercased() {
        assert_eq!(prompt(Some(&sample_personal())), "ada@portfolio ~ % ");
        assert_eq!(prompt(None), "guest@portfolio ~ % ");
    }

    #[test]
    fn test_help_lists_every_command() {
        let text = help().to_plain();
        for name in crate::command::COMMAND_NAMES {
            assert!(text.contains(name), "help is missing {name}");
        }
        assert!(text.contains("Tab for autocomplete"));
    }

    #[test]
    fn test_section_header_shape() {
        let style = FormatStyle::default();
        let header = section_header("Projects", &style);
        assert_eq!(header.len(), 5);
        assert_eq!(header[1].to_plain(), RULE_CHAR.repeat(60));
        assert_eq!(header[2].to_plain(), format!("{}Projects", " ".repeat(26)));
        assert_eq!(
            header[2].spans.last().unwrap().color,
            Some(ColorName::HotPink)
        );
    }

    #[test]
    fn test_contact_labels_align() {
        let style = FormatStyle::default();
        let block = contact(&sample_personal(), &style);
        let plain = block.to_plain();
        assert!(plain.contains("Email:    ada@example.com"));
        assert!(plain.contains("GitHub:   github.com/ada"));
        assert!(plain.contains("LinkedIn: linkedin.com/in/ada"));
        assert!(plain.contains("Feel free to reach out!"));
    }

    #[test]
    fn test_experience_layout() {
        let style = FormatStyle::default();
        let entries = vec![
            Experience {
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                period: "2020 - 2022".to_string(),
                description: vec!["Built things".to_string()],
            },
            Experience {
                title: "Senior Engineer".to_string(),
                company: "Acme".to_string(),
                period: "2022 - now".to_string(),
                description: vec!["Built bigger things".to_string()],
            },
        ];
        let plain = experience(&entries, &style).to_plain();
        assert!(plain.contains("Engineer @ Acme"));
        assert!(plain.contains("  \u{2022} Built things"));
        // Blank line between the entries, none after the last
        assert!(plain.contains("Built things\n\nSenior Engineer"));
        assert!(plain.ends_with("Built bigger things"));
    }

    #[test]
    fn test_projects_optional_fields() {
        let style = FormatStyle::default();
        let entries = vec![Project {
            name: "termfolio".to_string(),
            period: None,
            description: "A portfolio terminal".to_string(),
            technologies: vec!["Rust".to_string(), "ratatui".to_string()],
            github: None,
        }];
        let plain = projects(&entries, &style).to_plain();
        assert!(plain.contains("Technologies: Rust, ratatui"));
        assert!(!plain.contains("GitHub:"));
    }

    #[test]
    fn test_unknown_names_the_token() {
        let plain = unknown("xyz").to_plain();
        assert!(plain.contains("xyz"));
        assert!(plain.contains("'help'"));
    }

    #[test]
    fn test_banner_carries_title_and_education() {
        let plain = banner(&sample_personal()).to_plain();
        assert!(plain.contains("  Software Engineer"));
        assert!(plain.contains("  B.Sc. Computer Science"));
        assert!(plain.contains("Type 'help' to see available commands."));
    }
}
