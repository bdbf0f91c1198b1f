use serde::{Deserialize, Serialize};

/// One catalog record as the engine sees it.
///
/// A fixed, typed schema instead of loosely keyed records: the caller's
/// ingestion layer maps its catalog onto these named fields once, and the
/// engine never guesses column names. Every field is plain text; empty
/// strings mean "absent" and simply contribute nothing to the index.
///
/// Prices, stock levels and other non-lexical fields stay in the caller's
/// catalog, keyed by the item's position (its `ItemId`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub description: String,
    pub category: String,
    pub brand: String,
    pub material: String,
    pub color: String,
}

impl Document {
    /// Create a document with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Document {
            title: title.into(),
            ..Document::default()
        }
    }

    /// Concatenate the non-empty fields into the text that gets indexed.
    pub fn combined_text(&self) -> String {
        let fields = [
            &self.title,
            &self.description,
            &self.category,
            &self.brand,
            &self.material,
            &self.color,
        ];
        let mut text = String::new();
        for field in fields {
            if field.is_empty() {
                continue;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(field);
        }
        text
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Document::new(text)
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Document::new(text)
    }
}
