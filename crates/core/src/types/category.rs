//! Menu category classification.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error parsing a [`MenuCategory`] from a string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown menu category: {0}")]
pub struct CategoryParseError(pub String);

/// Section of the menu an item belongs to.
///
/// Categories drive menu display grouping only; they carry no pricing
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Entrees,
    Seafood,
    Sides,
    Desserts,
    /// Sunday-only specials.
    Sunday,
}

impl MenuCategory {
    /// All categories in display order.
    pub const ALL: [Self; 5] = [
        Self::Entrees,
        Self::Seafood,
        Self::Sides,
        Self::Desserts,
        Self::Sunday,
    ];

    /// The lowercase wire tag for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entrees => "entrees",
            Self::Seafood => "seafood",
            Self::Sides => "sides",
            Self::Desserts => "desserts",
            Self::Sunday => "sunday",
        }
    }

    /// Human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Entrees => "Entrees",
            Self::Seafood => "Seafood",
            Self::Sides => "Sides",
            Self::Desserts => "Desserts",
            Self::Sunday => "Sunday Specials",
        }
    }
}

impl core::fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entrees" => Ok(Self::Entrees),
            "seafood" => Ok(Self::Seafood),
            "sides" => Ok(Self::Sides),
            "desserts" => Ok(Self::Desserts),
            "sunday" => Ok(Self::Sunday),
            other => Err(CategoryParseError(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_from_str() {
        for category in MenuCategory::ALL {
            let parsed: MenuCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        assert!("brunch".parse::<MenuCategory>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&MenuCategory::Sunday).unwrap();
        assert_eq!(json, "\"sunday\"");
    }
}
