//! Tracking-timeline presentation helpers.

#[cfg(test)]
#[path = "tracking_test.rs"]
mod tracking_test;

/// Icon shown on a timeline entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventIcon {
    Package,
    Truck,
    Person,
    Check,
    /// Any event type without a dedicated icon.
    Clock,
}

impl EventIcon {
    #[must_use]
    pub fn for_event(event_type: &str) -> Self {
        match event_type {
            "CREATION" => Self::Package,
            "LOCATION_UPDATE" => Self::Truck,
            "OWNERSHIP_TRANSFER" => Self::Person,
            "QUALITY_CHECK" => Self::Check,
            _ => Self::Clock,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Package => "\u{1F4E6}",
            Self::Truck => "\u{1F69A}",
            Self::Person => "\u{1F464}",
            Self::Check => "\u{2705}",
            Self::Clock => "\u{1F552}",
        }
    }
}

/// Heading for a timeline entry: lowercased, first `_` as a space.
#[must_use]
pub fn event_label(event_type: &str) -> String {
    event_type.to_lowercase().replacen('_', " ", 1)
}
