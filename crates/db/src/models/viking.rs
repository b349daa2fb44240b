//! Viking entity model.

use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use vikings_core::input::RawTraitInput;
use vikings_core::metadata::VikingRecord;
use vikings_core::types::{DbId, Timestamp, VikingNumber};

/// A row from the `vikings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Viking {
    pub id: DbId,
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

    pub raw_input: Json<RawTraitInput>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Viking {
    /// The domain record this row was written from.
    pub fn to_record(&self) -> VikingRecord {
        VikingRecord {
            number: self.number,
            name: self.name.clone(),
            image: self.image.clone(),
            description: self.description.clone(),
            beard: self.beard.clone(),
            body: self.body.clone(),
            face: self.face.clone(),
            top: self.top.clone(),
            boots_type: self.boots_type.clone(),
            boots_condition: self.boots_condition.clone(),
            speed: self.speed,
            bottoms_type: self.bottoms_type.clone(),
            bottoms_condition: self.bottoms_condition.clone(),
            stamina: self.stamina,
            helmet_type: self.helmet_type.clone(),
            helmet_condition: self.helmet_condition.clone(),
            intelligence: self.intelligence,
            shield_type: self.shield_type.clone(),
            shield_condition: self.shield_condition.clone(),
            defence: self.defence,
            weapon_type: self.weapon_type.clone(),
            weapon_condition: self.weapon_condition.clone(),
            attack: self.attack,
            raw_input: self.raw_input.0,
        }
    }
}
