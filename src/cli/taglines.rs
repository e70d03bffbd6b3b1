//! Result flair: emoji and one-liners per category
//!
//! Ships with a built-in table and optionally overrides entries from a JSON
//! file, so the jokes can be swapped without rebuilding:
//!
//! ```json
//! { "taglines": { "L": { "emoji": "💘", "line": "Sparks confirmed." } } }
//! ```

use rustc_hash::FxHashMap;
use std::fs;

use crate::game::Category;

/// Decoration for one result category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flair {
    pub emoji: String,
    pub line: String,
}

/// Emoji and one-liner lookup for the six categories.
pub struct Taglines {
    table: FxHashMap<char, Flair>,
}

impl Taglines {
    /// The built-in table.
    pub fn builtin() -> Self {
        let mut table = FxHashMap::default();
        let entries = [
            ('F', "🥳", "Just buddies... or is that what you tell everyone?"),
            ('L', "❤️", "Oooh, love is in the air!"),
            ('A', "😊", "Warm fuzzy vibes incoming."),
            ('M', "💍", "Better start planning the guest list!"),
            ('E', "😈", "Mortal Kombat theme starts playing..."),
            ('S', "👯", "Sibling energy: eternal teasing."),
        ];
        for (letter, emoji, line) in entries {
            table.insert(
                letter,
                Flair {
                    emoji: emoji.to_string(),
                    line: line.to_string(),
                },
            );
        }
        Taglines { table }
    }

    /// Load overrides from a JSON file on top of the built-in table.
    /// A missing file is not an error; a malformed one is.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut taglines = Taglines::builtin();

        if let Ok(content) = fs::read_to_string(path) {
            let json: serde_json::Value = serde_json::from_str(&content)?;
            if let Some(entries) = json.get("taglines").and_then(|v| v.as_object()) {
                for (key, entry) in entries {
                    let letter = match key.chars().next() {
                        Some(c) => c.to_ascii_uppercase(),
                        None => continue,
                    };
                    let Some(flair) = taglines.table.get_mut(&letter) else {
                        continue;
                    };
                    if let Some(emoji) = entry.get("emoji").and_then(|v| v.as_str()) {
                        flair.emoji = emoji.to_string();
                    }
                    if let Some(line) = entry.get("line").and_then(|v| v.as_str()) {
                        flair.line = line.to_string();
                    }
                }
            }
        }

        Ok(taglines)
    }

    /// Flair for a category. Present for all six in the built-in table.
    pub fn flair(&self, category: Category) -> Option<&Flair> {
        self.table.get(&category.letter())
    }
}

impl Default for Taglines {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_covers_all_categories() {
        let taglines = Taglines::builtin();
        for category in crate::game::eliminator::RING {
            let flair = taglines.flair(category).unwrap();
            assert!(!flair.emoji.is_empty());
            assert!(!flair.line.is_empty());
        }
    }

    #[test]
    fn test_missing_file_falls_back() {
        let taglines = Taglines::load("definitely/not/here.json").unwrap();
        assert_eq!(taglines.flair(Category::Love), Taglines::builtin().flair(Category::Love));
    }

    #[test]
    fn test_override_touches_only_named_letters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taglines.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{ "taglines": {{ "L": {{ "line": "Sparks confirmed." }}, "x": {{ "line": "ignored" }} }} }}"#
        )
        .unwrap();

        let taglines = Taglines::load(path.to_str().unwrap()).unwrap();
        let love = taglines.flair(Category::Love).unwrap();
        assert_eq!(love.line, "Sparks confirmed.");
        // emoji untouched by a line-only override
        assert_eq!(love.emoji, "❤️");
        // other letters keep the built-in text
        let friends = taglines.flair(Category::Friends).unwrap();
        assert_eq!(friends.line, Taglines::builtin().flair(Category::Friends).unwrap().line);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json at all").unwrap();
        assert!(Taglines::load(path.to_str().unwrap()).is_err());
    }
}
