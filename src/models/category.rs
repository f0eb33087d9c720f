//! Expense categories
//!
//! A fixed set of labels, each with a display icon and color. Labels outside
//! the set are kept verbatim and rendered with a fallback icon.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Icon shown for labels outside the known set
pub const FALLBACK_ICON: &str = "❓";

/// Color shown for labels outside the known set
pub const FALLBACK_COLOR: &str = "#95a5a6";

/// Category of an expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    Food,
    Transport,
    Books,
    Entertainment,
    Health,
    Other,
    /// A label this version does not recognize
    Unrecognized(String),
}

impl Category {
    /// The known categories, in picker order
    pub const KNOWN: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Books,
        Category::Entertainment,
        Category::Health,
        Category::Other,
    ];

    /// Labels written by the earlier Spanish-language app, and what they mean
    pub const LEGACY_ALIASES: [(&'static str, Category); 4] = [
        ("Comida", Category::Food),
        ("Transporte", Category::Transport),
        ("Libros", Category::Books),
        ("Otros", Category::Other),
    ];

    /// Canonical label, as persisted
    pub fn label(&self) -> &str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Books => "Books",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Other => "Other",
            Self::Unrecognized(label) => label,
        }
    }

    /// Display icon
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍔",
            Self::Transport => "🚌",
            Self::Books => "📚",
            Self::Entertainment => "🎬",
            Self::Health => "💊",
            Self::Other => "📦",
            Self::Unrecognized(_) => FALLBACK_ICON,
        }
    }

    /// Display color as a hex string
    pub fn color(&self) -> &'static str {
        match self {
            Self::Food => "#e67e22",
            Self::Transport => "#3498db",
            Self::Books => "#9b59b6",
            Self::Entertainment => "#e74c3c",
            Self::Health => "#2ecc71",
            Self::Other => "#7f8c8d",
            Self::Unrecognized(_) => FALLBACK_COLOR,
        }
    }

    /// Label for display; blank unrecognized labels show as "Other"
    pub fn display_label(&self) -> &str {
        match self {
            Self::Unrecognized(label) if label.trim().is_empty() => "Other",
            _ => self.label(),
        }
    }

    /// Whether this is one of the known categories
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.display_label())
    }
}

/// Stored labels are matched exactly so unrecognized values survive a
/// load/save cycle unchanged. Legacy labels load as their known category.
impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::KNOWN
            .iter()
            .find(|known| known.label() == label)
            .or_else(|| {
                Self::LEGACY_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == label)
                    .map(|(_, known)| known)
            })
            .cloned()
            .unwrap_or(Self::Unrecognized(label))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Unrecognized(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// User input is matched case-insensitively.
impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(Self::KNOWN
            .iter()
            .find(|known| known.label().eq_ignore_ascii_case(s))
            .or_else(|| {
                Self::LEGACY_ALIASES
                    .iter()
                    .find(|(alias, _)| alias.eq_ignore_ascii_case(s))
                    .map(|(_, known)| known)
            })
            .cloned()
            .unwrap_or_else(|| Self::Unrecognized(s.to_string())))
    }
}
