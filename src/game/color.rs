use std::fmt;
use std::str::FromStr;

pub const NUM_COLORS: usize = 5;

/// A racing camel. Doubles as the key for its die and its bet cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
}

impl Color {
    /// All colors in canonical enumeration order.
    pub const ALL: [Color; NUM_COLORS] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Purple,
    ];

    /// Position of this color in [`Color::ALL`], used for per-color arrays.
    pub fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Green => 1,
            Color::Blue => 2,
            Color::Yellow => 3,
            Color::Purple => 4,
        }
    }

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
        }
    }

    /// Single-letter shorthand shown on the track
    pub fn initial(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Purple => 'P',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color '{0}' (expected red, green, blue, yellow or purple)")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts full names and single-letter shorthands in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Color::Red),
            "green" | "g" => Ok(Color::Green),
            "blue" | "b" => Ok(Color::Blue),
            "yellow" | "y" => Ok(Color::Yellow),
            "purple" | "p" => Ok(Color::Purple),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("RED".parse::<Color>(), Ok(Color::Red));
        assert_eq!("Purple".parse::<Color>(), Ok(Color::Purple));
        assert_eq!(" y ".parse::<Color>(), Ok(Color::Yellow));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "orange".parse::<Color>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown color 'orange' (expected red, green, blue, yellow or purple)"
        );
    }

    #[test]
    fn test_display_is_canonical_lowercase() {
        assert_eq!(Color::Green.to_string(), "green");
        assert_eq!(Color::Blue.initial(), 'B');
    }
}
