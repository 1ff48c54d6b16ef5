use std::fmt;

/// Ordinal temperature bucket derived from the day dataset's quantiles.
///
/// Ordering follows temperature: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemperatureCategory {
    Low,
    Medium,
    High,
}

impl TemperatureCategory {
    pub const ALL: [TemperatureCategory; 3] = [
        TemperatureCategory::Low,
        TemperatureCategory::Medium,
        TemperatureCategory::High,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureCategory::Low => "Low",
            TemperatureCategory::Medium => "Medium",
            TemperatureCategory::High => "High",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for TemperatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
