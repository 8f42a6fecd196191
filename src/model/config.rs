use serde::{Deserialize, Serialize};

/// Which header grammar the parser recognizes. Chosen when the parser is
/// constructed, never auto-detected per document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// A line containing `[YYYY-MM-DD]` anywhere starts a section.
    #[default]
    Date,
    /// A line whose entire trimmed content is `[<label>]` starts a section.
    Label,
}

/// How cards are sequenced by default when rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceMode {
    /// A fixed window of consecutive calendar days.
    #[default]
    Week,
    /// One card per section present in the document.
    All,
}

/// User settings from config.toml. Read at render time only; none of these
/// change parsing or patching semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Card width in pixels (HTML export).
    #[serde(default = "default_card_width")]
    pub card_width: u32,
    /// Gap between cards in pixels (HTML export).
    #[serde(default = "default_card_gap")]
    pub card_gap: u32,
    /// Number of day cards in the fixed window.
    #[serde(default = "default_days")]
    pub days: usize,
    /// Days to shift the window start from the start of the week (Sunday).
    #[serde(default)]
    pub week_start: i64,
    #[serde(default)]
    pub grammar: Grammar,
    #[serde(default)]
    pub sequence: SequenceMode,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            card_width: default_card_width(),
            card_gap: default_card_gap(),
            days: default_days(),
            week_start: 0,
            grammar: Grammar::default(),
            sequence: SequenceMode::default(),
        }
    }
}

fn default_card_width() -> u32 {
    280
}

fn default_card_gap() -> u32 {
    16
}

fn default_days() -> usize {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.card_width, 280);
        assert_eq!(config.card_gap, 16);
        assert_eq!(config.days, 3);
        assert_eq!(config.week_start, 0);
        assert_eq!(config.grammar, Grammar::Date);
        assert_eq!(config.sequence, SequenceMode::Week);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: BoardConfig = toml::from_str("card_width = 320\n").unwrap();
        assert_eq!(config.card_width, 320);
        assert_eq!(config.card_gap, 16);
        assert_eq!(config.grammar, Grammar::Date);
    }

    #[test]
    fn test_enum_fields_deserialize_lowercase() {
        let config: BoardConfig =
            toml::from_str("grammar = \"label\"\nsequence = \"all\"\n").unwrap();
        assert_eq!(config.grammar, Grammar::Label);
        assert_eq!(config.sequence, SequenceMode::All);
    }
}
