//! Defines the `Season` enum, mapping the rental dataset's season codes to
//! named variants.

use std::fmt;

/// Season of a daily rental record.
///
/// The day dataset encodes seasons as `1..=4`. Some exports replace the code
/// with the season name, so both forms are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Season {
    /// Code 1.
    Spring = 1,
    /// Code 2.
    Summer = 2,
    /// Code 3.
    Fall = 3,
    /// Code 4.
    Winter = 4,
}

impl Season {
    /// All seasons in code order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Converts a numeric season code into a `Season`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bike_rentals_dashboard::Season;
    ///
    /// assert_eq!(Season::from_code(3), Some(Season::Fall));
    /// assert_eq!(Season::from_code(0), None);
    /// ```
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Fall),
            4 => Some(Season::Winter),
            _ => None,
        }
    }

    /// Parses a season name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "spring" | "springer" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" | "autumn" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
