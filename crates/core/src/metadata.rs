//! Stored Viking records and their OpenSea-compatible broadcast form.
//!
//! [`VikingRecord`] is the flattened, write-once shape handed to the
//! persistence layer. [`to_broadcast`] turns it into the token metadata
//! served to marketplaces: a fixed-order list of 19 attributes.

use serde::{Deserialize, Serialize};

use crate::condition::ConditionTier;
use crate::input::RawTraitInput;
use crate::slot::Slot;
use crate::specification::AssetSpecification;
use crate::types::VikingNumber;

/// Upper bound advertised for every statistic attribute.
pub const MAX_STAT_VALUE: u8 = 99;

/// Number of attributes in every broadcast record.
pub const ATTRIBUTE_COUNT: usize = 19;

/// Flattened record persisted once per Viking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VikingRecord {
    pub number: VikingNumber,
    pub name: String,
    pub image: String,
    pub description: String,

    pub beard: String,
    pub body: String,
    pub face: String,
    pub top: String,

    pub boots_type: String,
    pub boots_condition: String,
    pub speed: i16,

    pub bottoms_type: String,
    pub bottoms_condition: String,
    pub stamina: i16,

    pub helmet_type: String,
    pub helmet_condition: String,
    pub intelligence: i16,

    pub shield_type: String,
    pub shield_condition: String,
    pub defence: i16,

    pub weapon_type: String,
    pub weapon_condition: String,
    pub attack: i16,

    /// The input the record was derived from, kept so the specification can
    /// be rebuilt on demand.
    pub raw_input: RawTraitInput,
}

impl VikingRecord {
    /// Display name for a token number.
    pub fn display_name(number: VikingNumber) -> String {
        format!("Viking #{number}")
    }

    pub fn from_specification(
        spec: &AssetSpecification,
        raw_input: &RawTraitInput,
        description: &str,
    ) -> Self {
        let names = &spec.names;
        let conditions = &spec.conditions;
        let stats = &spec.stats;

        Self {
            number: spec.number,
            name: Self::display_name(spec.number),
            image: spec.image_url.clone(),
            description: description.to_string(),
            beard: names.beard.clone(),
            body: names.body.clone(),
            face: names.face.clone(),
            top: names.top.clone(),
            boots_type: names.boots.clone(),
            boots_condition: conditions.boots.label().to_string(),
            speed: i16::from(stats.speed),
            bottoms_type: names.bottoms.clone(),
            bottoms_condition: conditions.bottoms.label().to_string(),
            stamina: i16::from(stats.stamina),
            helmet_type: names.helmet.clone(),
            helmet_condition: conditions.helmet.label().to_string(),
            intelligence: i16::from(stats.intelligence),
            shield_type: names.shield.clone(),
            shield_condition: conditions.shield.label().to_string(),
            defence: i16::from(stats.defence),
            weapon_type: names.weapon.clone(),
            weapon_condition: conditions.weapon.label().to_string(),
            attack: i16::from(stats.attack),
            raw_input: *raw_input,
        }
    }

    /// `(type, condition, statistic)` for an equipment slot.
    fn equipment(&self, slot: Slot) -> Option<(&str, &str, i16)> {
        match slot {
            Slot::Boots => Some((&self.boots_type, &self.boots_condition, self.speed)),
            Slot::Bottoms => Some((&self.bottoms_type, &self.bottoms_condition, self.stamina)),
            Slot::Helmet => Some((&self.helmet_type, &self.helmet_condition, self.intelligence)),
            Slot::Shield => Some((&self.shield_type, &self.shield_condition, self.defence)),
            Slot::Weapon => Some((&self.weapon_type, &self.weapon_condition, self.attack)),
            Slot::Beard | Slot::Body | Slot::Face | Slot::Top => None,
        }
    }
}

/// A trait value is either a name or a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: AttributeValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<u8>,
}

impl Attribute {
    fn text(trait_type: impl Into<String>, value: &str) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: AttributeValue::Text(value.to_string()),
            max_value: None,
        }
    }

    fn statistic(trait_type: &str, value: i16) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: AttributeValue::Number(i64::from(value)),
            max_value: Some(MAX_STAT_VALUE),
        }
    }
}

/// Token metadata served to marketplaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastRecord {
    pub name: String,
    pub description: String,
    pub image: String,
    pub attributes: Vec<Attribute>,
}

/// Build the broadcast form of a stored record.
///
/// Attribute order: Beard, Body, Face, Top, then for each of Boots,
/// Bottoms, Helmet, Shield, Weapon the `"{Slot} Type"`, `"{Slot} Condition"`
/// and statistic entries. Only statistics carry `max_value`.
pub fn to_broadcast(record: &VikingRecord) -> BroadcastRecord {
    let mut attributes = Vec::with_capacity(ATTRIBUTE_COUNT);

    attributes.push(Attribute::text(Slot::Beard.label(), &record.beard));
    attributes.push(Attribute::text(Slot::Body.label(), &record.body));
    attributes.push(Attribute::text(Slot::Face.label(), &record.face));
    attributes.push(Attribute::text(Slot::Top.label(), &record.top));

    for slot in crate::slot::EQUIPMENT_SLOTS {
        if let (Some((kind, condition, value)), Some(statistic)) =
            (record.equipment(slot), slot.statistic())
        {
            attributes.push(Attribute::text(format!("{} Type", slot.label()), kind));
            attributes.push(Attribute::text(
                format!("{} Condition", slot.label()),
                condition,
            ));
            attributes.push(Attribute::statistic(statistic, value));
        }
    }

    BroadcastRecord {
        name: record.name.clone(),
        description: record.description.clone(),
        image: record.image.clone(),
        attributes,
    }
}
