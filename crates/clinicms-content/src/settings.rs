//! Global site settings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Site-wide settings record.
///
/// Currently this only carries the call-to-action button configuration; the
/// record is persisted whole, so new settings groups can be added as fields
/// with serde defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub buttons: BTreeMap<ButtonRole, ButtonConfig>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        let mut buttons = BTreeMap::new();
        for role in ButtonRole::ALL {
            buttons.insert(role, role.default_config());
        }
        Self { buttons }
    }
}

impl SiteSettings {
    /// Normalize settings after load: any role not yet configured receives
    /// its hardcoded default.
    pub fn normalize(&mut self) {
        for role in ButtonRole::ALL {
            self.buttons
                .entry(role)
                .or_insert_with(|| role.default_config());
        }
    }
}

/// The fixed set of configurable button slots on the public site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonRole {
    Whatsapp,
    Contact,
    Hero,
}

impl ButtonRole {
    pub const ALL: [ButtonRole; 3] = [ButtonRole::Whatsapp, ButtonRole::Contact, ButtonRole::Hero];

    /// The hardcoded default for this button slot.
    pub fn default_config(&self) -> ButtonConfig {
        match self {
            ButtonRole::Whatsapp => ButtonConfig {
                text: "Chat on WhatsApp".to_string(),
                url: "https://wa.me/905551234567".to_string(),
                open_in_new_tab: true,
                enabled: true,
            },
            ButtonRole::Contact => ButtonConfig {
                text: "Contact Us".to_string(),
                url: "/contact".to_string(),
                open_in_new_tab: false,
                enabled: true,
            },
            ButtonRole::Hero => ButtonConfig {
                text: "Book a Free Consultation".to_string(),
                url: "/contact".to_string(),
                open_in_new_tab: false,
                enabled: true,
            },
        }
    }
}

/// Display and behavior of one configurable button.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonConfig {
    pub text: String,
    pub url: String,
    pub open_in_new_tab: bool,
    pub enabled: bool,
}
