//! Closed icon-name lookup for service badges.
//!
//! DESIGN
//! ======
//! The services table stores icon names as free-form strings. Rendering maps
//! them through a closed symbol set with an explicit fallback, so any input
//! string yields a renderable symbol.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

/// Renderable badge symbol for a service card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Icon {
    Cloud,
    Code,
    Database,
    Shield,
    Terminal,
    Chart,
    /// Fallback for unrecognized icon names.
    #[default]
    Spark,
}

impl Icon {
    /// Resolve an icon name from the services table.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "cloud" => Self::Cloud,
            "code" => Self::Code,
            "database" => Self::Database,
            "shield" | "security" => Self::Shield,
            "terminal" => Self::Terminal,
            "chart" | "analytics" => Self::Chart,
            _ => Self::Spark,
        }
    }

    /// Text glyph rendered inside the card badge.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Cloud => "\u{2601}",
            Self::Code => "\u{2328}",
            Self::Database => "\u{26c3}",
            Self::Shield => "\u{26e8}",
            Self::Terminal => "\u{232a}",
            Self::Chart => "\u{2197}",
            Self::Spark => "\u{2726}",
        }
    }

    /// Badge modifier class keyed by the icon variant.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Cloud => "service-card__badge--cloud",
            Self::Code => "service-card__badge--code",
            Self::Database => "service-card__badge--database",
            Self::Shield => "service-card__badge--shield",
            Self::Terminal => "service-card__badge--terminal",
            Self::Chart => "service-card__badge--chart",
            Self::Spark => "service-card__badge--spark",
        }
    }
}
