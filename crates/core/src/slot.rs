//! The nine equip/appearance positions of a Viking.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Beard,
    Body,
    Face,
    Top,
    Boots,
    Bottoms,
    Helmet,
    Shield,
    Weapon,
}

/// Compositing order, background-most first. Later layers render on top.
pub const LAYER_ORDER: [Slot; 9] = [
    Slot::Body,
    Slot::Face,
    Slot::Top,
    Slot::Beard,
    Slot::Bottoms,
    Slot::Boots,
    Slot::Helmet,
    Slot::Shield,
    Slot::Weapon,
];

/// Slots whose selector comes from the `appearance` digits, in digit order.
pub const APPEARANCE_SLOTS: [Slot; 4] = [Slot::Beard, Slot::Body, Slot::Face, Slot::Top];

/// Slots paired with a statistic, in broadcast order.
pub const EQUIPMENT_SLOTS: [Slot; 5] = [
    Slot::Boots,
    Slot::Bottoms,
    Slot::Helmet,
    Slot::Shield,
    Slot::Weapon,
];

impl Slot {
    /// Lower-case key used in file names (`boots_basic.png`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Beard => "beard",
            Self::Body => "body",
            Self::Face => "face",
            Self::Top => "top",
            Self::Boots => "boots",
            Self::Bottoms => "bottoms",
            Self::Helmet => "helmet",
            Self::Shield => "shield",
            Self::Weapon => "weapon",
        }
    }

    /// Display name used in broadcast metadata.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beard => "Beard",
            Self::Body => "Body",
            Self::Face => "Face",
            Self::Top => "Top",
            Self::Boots => "Boots",
            Self::Bottoms => "Bottoms",
            Self::Helmet => "Helmet",
            Self::Shield => "Shield",
            Self::Weapon => "Weapon",
        }
    }

    /// Asset sub-directory holding this slot's parts.
    pub const fn directory(self) -> &'static str {
        match self {
            Self::Beard => "beards",
            Self::Body => "bodies",
            Self::Face => "faces",
            Self::Top => "tops",
            Self::Boots => "boots",
            Self::Bottoms => "bottoms",
            Self::Helmet => "helmets",
            Self::Shield => "shields",
            Self::Weapon => "weapons",
        }
    }

    /// Name of the statistic that drives this slot's condition.
    pub const fn statistic(self) -> Option<&'static str> {
        match self {
            Self::Boots => Some("Speed"),
            Self::Bottoms => Some("Stamina"),
            Self::Helmet => Some("Intelligence"),
            Self::Shield => Some("Defence"),
            Self::Weapon => Some("Attack"),
            Self::Beard | Self::Body | Self::Face | Self::Top => None,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
