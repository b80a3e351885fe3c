//! Welcome-screen data: category tabs and feature cards.

use serde::Serialize;

pub const DEFAULT_CATEGORY: &str = "All";

/// Category tabs rendered under the welcome prompt.
pub const CATEGORIES: [&str; 6] = ["All", "Text", "Image", "Video", "Music", "Analytics"];

/// One of the feature cards shown above the category tabs.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Saved Prompt Templates",
        description: "Users save and reuse prompt templates for faster responses.",
    },
    Feature {
        title: "Media Type Selection",
        description: "Users select media type for tailored interactions.",
    },
    Feature {
        title: "Multilingual Support",
        description: "Choose language for better interaction.",
    },
];

pub fn is_known_category(name: &str) -> bool {
    CATEGORIES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_category_is_listed() {
        assert!(is_known_category(DEFAULT_CATEGORY));
    }

    #[test]
    fn category_match_is_exact() {
        assert!(is_known_category("Analytics"));
        assert!(!is_known_category("analytics"));
        assert!(!is_known_category("Code"));
    }
}
