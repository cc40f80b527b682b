// Deck model - the ordered section content a stardeck presents
//
// A deck is loaded from a TOML file ([[section]] tables) or falls back to
// the built-in demo deck. Section identifiers double as location
// fragments: they must be unique and non-empty because the navigator
// resolves them back to indices for history movement and --section
// seeding.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One full-viewport content panel in the horizontal sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Fragment identifier, unique within the deck (e.g. "worlds")
    pub id: String,
    /// Heading shown in the panel and the nav bar
    pub title: String,
    /// One-line subtitle under the heading
    #[serde(default)]
    pub tagline: String,
    /// Body text, rendered as centered lines
    #[serde(default)]
    pub body: String,
    /// Discovery messages surfaced as toasts on demand
    #[serde(default)]
    pub messages: Vec<String>,
}

/// An ordered, validated set of sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Deck title for the status bar and share payload
    pub title: String,
    #[serde(rename = "section")]
    pub sections: Vec<Section>,
}

impl Deck {
    /// Load and validate a deck from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read deck file {}", path.display()))?;
        let deck: Deck = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse deck file {}", path.display()))?;
        deck.validate()
            .with_context(|| format!("Invalid deck file {}", path.display()))?;
        Ok(deck)
    }

    /// Check the invariants the navigator relies on.
    pub fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            bail!("deck has no sections");
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.id.is_empty() {
                bail!("section with empty id (title: {:?})", section.title);
            }
            if !seen.insert(section.id.as_str()) {
                bail!("duplicate section id: {}", section.id);
            }
        }
        Ok(())
    }

    /// Section identifiers in navigation order.
    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    /// Section at the given index, if in range.
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }
}

/// The demo deck shown when no deck file is given.
pub fn demo_deck() -> Deck {
    let section = |id: &str, title: &str, tagline: &str, body: &str, messages: &[&str]| Section {
        id: id.to_string(),
        title: title.to_string(),
        tagline: tagline.to_string(),
        body: body.to_string(),
        messages: messages.iter().map(|m| m.to_string()).collect(),
    };

    Deck {
        title: "World Explorer".to_string(),
        sections: vec![
            section(
                "home",
                "World Explorer",
                "An illustrated journey across the design worlds",
                "Use the arrow keys, the mouse wheel, or a quick drag\n\
                 to travel between worlds.\n\n\
                 Press ? at any time for the full key map.",
                &["The journey begins with a single keypress."],
            ),
            section(
                "worlds",
                "The Worlds",
                "Four realms, one expedition",
                "Research World  -  where every voyage starts\n\
                 The Beast's Lair  -  conflicting opinions dwell here\n\
                 The Guide's Tower  -  your scientific companion\n\
                 The Minefield  -  problems waiting to be found",
                &[
                    "Problem detected: user confusion about navigation",
                    "Problem detected: low conversion rates",
                    "Problem detected: accessibility issues",
                    "Problem detected: mobile responsiveness gaps",
                    "Problem detected: slow load times",
                    "Problem detected: poor search functionality",
                ],
            ),
            section(
                "about",
                "About the Expedition",
                "Why we explore",
                "Every world hides a lesson about building things\n\
                 people actually understand.\n\n\
                 The beast of conflicting opinions is only defeated\n\
                 by evidence gathered in the field.",
                &["The UX Researcher is ready to help!"],
            ),
            section(
                "contact",
                "Join the Crew",
                "Signals welcome on every frequency",
                "Found a new world worth charting?\n\
                 Share this journey with y, or add your own deck file:\n\n\
                 stardeck my-deck.toml",
                &["Message received. The crew will respond shortly."],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_deck_is_valid() {
        let deck = demo_deck();
        assert!(deck.validate().is_ok());
        assert!(deck.len() >= 2);
        assert_eq!(deck.section_ids()[0], "home");
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut deck = demo_deck();
        deck.sections[1].id = deck.sections[0].id.clone();
        assert!(deck.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let mut deck = demo_deck();
        deck.sections[0].id.clear();
        assert!(deck.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_deck() {
        let deck = Deck {
            title: "empty".to_string(),
            sections: vec![],
        };
        assert!(deck.validate().is_err());
    }

    #[test]
    fn test_parse_deck_toml() {
        let raw = r#"
            title = "Tiny"

            [[section]]
            id = "a"
            title = "A"

            [[section]]
            id = "b"
            title = "B"
            tagline = "second"
            body = "hello"
            messages = ["one", "two"]
        "#;
        let deck: Deck = toml::from_str(raw).unwrap();
        assert!(deck.validate().is_ok());
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.sections[1].messages.len(), 2);
        assert_eq!(deck.sections[0].body, "");
    }
}
