use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The tone requested from the completion endpoint.
///
/// Chosen once per session and passed read-only into every revision request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WritingStyle {
    Creative,
    #[default]
    Formal,
    Academic,
    Casual,
    Technical,
}

impl WritingStyle {
    pub const ALL: [WritingStyle; 5] = [
        WritingStyle::Creative,
        WritingStyle::Formal,
        WritingStyle::Academic,
        WritingStyle::Casual,
        WritingStyle::Technical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WritingStyle::Creative => "creative",
            WritingStyle::Formal => "formal",
            WritingStyle::Academic => "academic",
            WritingStyle::Casual => "casual",
            WritingStyle::Technical => "technical",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WritingStyle::Creative => "Creative Writing",
            WritingStyle::Formal => "Formal Writing",
            WritingStyle::Academic => "Academic Writing",
            WritingStyle::Casual => "Casual Writing",
            WritingStyle::Technical => "Technical Writing",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WritingStyle::Creative => "Perfect for storytelling, poetry, and imaginative content",
            WritingStyle::Formal => "Suitable for business communications and official documents",
            WritingStyle::Academic => "Ideal for research papers, essays, and scholarly work",
            WritingStyle::Casual => "Great for blogs, social media, and informal content",
            WritingStyle::Technical => "Best for documentation, guides, and technical content",
        }
    }

    /// Lenient lookup: anything unrecognised becomes [`WritingStyle::Formal`].
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for WritingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WritingStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "creative" => Ok(WritingStyle::Creative),
            "formal" => Ok(WritingStyle::Formal),
            "academic" => Ok(WritingStyle::Academic),
            "casual" => Ok(WritingStyle::Casual),
            "technical" => Ok(WritingStyle::Technical),
            other => Err(CoreError::UnknownStyle(other.to_string())),
        }
    }
}
