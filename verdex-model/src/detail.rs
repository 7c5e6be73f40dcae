//! Tabbed detail-page content attached to a catalog entry.
//!
//! The growing-steps and ayurvedic tabs are premium content; the server
//! withholds them for visitors without an active subscription.

/// One medicinal-use card on the detail page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MedicinalUse {
    pub title: String,
    pub description: String,
}

/// One step of the premium growing guide.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrowingStep {
    pub title: String,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tips: Option<String>,
}

/// Classical ayurvedic property sheet.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AyurvedicProperties {
    #[cfg_attr(feature = "serde", serde(default))]
    pub rasa: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub virya: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub vipaka: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dosha: Option<String>,
}

/// All tabs of one entry's detail page.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetailContent {
    #[cfg_attr(feature = "serde", serde(default))]
    pub medicinal_uses: Vec<MedicinalUse>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub growing_steps: Vec<GrowingStep>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ayurvedic: Option<AyurvedicProperties>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub traditional_uses: Vec<String>,
}

impl DetailContent {
    pub fn is_empty(&self) -> bool {
        self.medicinal_uses.is_empty()
            && self.growing_steps.is_empty()
            && self.ayurvedic.is_none()
            && self.traditional_uses.is_empty()
    }
}
