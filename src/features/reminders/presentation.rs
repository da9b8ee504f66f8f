//! Drug presentation rules: which icon a medication line carries.
//!
//! The mapping is injected into the formatters rather than hard-coded there,
//! so deployments can override icons per drug and tests can pin them down.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use std::collections::HashMap;

use crate::features::schedule::Medication;

/// Icon shown for drugs with no explicit mapping.
pub const DEFAULT_ICON: &str = "💊";

/// Icon that marks the last day of a course, overriding the drug's own icon.
pub const STOP_ICON: &str = "🛑";

/// Injected name→icon mapping for medication rendering.
#[derive(Debug, Clone, Default)]
pub struct DrugIcons {
    icons: HashMap<String, String>,
}

impl DrugIcons {
    /// Empty mapping; every drug falls back to [`DEFAULT_ICON`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock mapping for the known drug set.
    pub fn standard() -> Self {
        let mut icons = Self::new();
        for (name, icon) in [
            ("Prenatal Vitamins", "💊"),
            ("Omnitrope", "💉"),
            ("Norethindrone", "💊"),
            ("Estradiol", "💊"),
            ("Clomid", "💊"),
            ("Follistim", "💉"),
            ("Menopur", "💉"),
            ("Ganirelix", "💉"),
            ("Pregnyl", "💉"),
        ] {
            icons = icons.with_icon(name, icon);
        }
        icons
    }

    /// Add or override the icon for one drug name.
    pub fn with_icon(mut self, name: &str, icon: &str) -> Self {
        self.icons.insert(name.to_string(), icon.to_string());
        self
    }

    /// Resolve the icon for a medication line. A last-day dose always shows
    /// the stop sign regardless of the drug's own icon.
    pub fn icon_for(&self, med: &Medication) -> &str {
        if med.is_stop {
            return STOP_ICON;
        }
        self.icons
            .get(&med.name)
            .map(String::as_str)
            .unwrap_or(DEFAULT_ICON)
    }
}
