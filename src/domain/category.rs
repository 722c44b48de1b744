use serde::{Deserialize, Serialize};

/// Item category
///
/// The set is open: the well-known values get their own variant, anything
/// else a reporter types is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Electronics,
    Keys,
    Documents,
    Bottle,
    Wallet,
    #[default]
    Other,
    Custom(String),
}

impl Category {
    /// The well-known categories, in the order forms offer them
    pub const KNOWN: [Category; 6] = [
        Category::Electronics,
        Category::Keys,
        Category::Documents,
        Category::Bottle,
        Category::Wallet,
        Category::Other,
    ];

    /// Parse optional user input; missing or blank input means `Other`
    pub fn from_input(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => Self::from(v.to_string()),
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Electronics => "Electronics",
            Category::Keys => "Keys",
            Category::Documents => "Documents",
            Category::Bottle => "Bottle",
            Category::Wallet => "Wallet",
            Category::Other => "Other",
            Category::Custom(label) => label,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Electronics" => Category::Electronics,
            "Keys" => Category::Keys,
            "Documents" => Category::Documents,
            "Bottle" => Category::Bottle,
            "Wallet" => Category::Wallet,
            "Other" | "" => Category::Other,
            _ => Category::Custom(value),
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Custom(label) => label,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories_parse() {
        for known in Category::KNOWN {
            assert_eq!(Category::from(known.to_string()), known);
        }
    }

    #[test]
    fn test_custom_category_is_kept_verbatim() {
        let category = Category::from("Umbrella".to_string());
        assert_eq!(category, Category::Custom("Umbrella".to_string()));
        assert_eq!(category.to_string(), "Umbrella");
    }

    #[test]
    fn test_missing_input_defaults_to_other() {
        assert_eq!(Category::from_input(None), Category::Other);
        assert_eq!(Category::from_input(Some("  ")), Category::Other);
        assert_eq!(Category::from_input(Some("Keys")), Category::Keys);
    }

    #[test]
    fn test_serde_uses_plain_strings() {
        let json = serde_json::to_string(&Category::Wallet).unwrap();
        assert_eq!(json, "\"Wallet\"");

        let parsed: Category = serde_json::from_str("\"Lab Coat\"").unwrap();
        assert_eq!(parsed, Category::Custom("Lab Coat".to_string()));
    }
}
