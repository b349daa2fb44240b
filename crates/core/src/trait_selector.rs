//! Selector-to-name lookup tables for every slot.
//!
//! Appearance slots map a two-digit selector straight to a name.
//! Equipment slots first consult their condition: at the lowest tier the
//! slot reports the tier label ("Basic" / "None") and the style table is
//! not used.

use crate::buckets::BucketTable;
use crate::condition::{ConditionTier, EquipmentCondition, WearableCondition};
use crate::score::Score;

pub const BEARD_TYPES: BucketTable<&str> =
    BucketTable::new(&[(29, "01"), (49, "02"), (69, "03"), (84, "04")], "05");

pub const BODY_TYPES: BucketTable<&str> = BucketTable::new(
    &[(19, "Devil"), (44, "Pale"), (69, "Tanned"), (89, "Dark")],
    "Frost Giant",
);

pub const FACE_TYPES: BucketTable<&str> =
    BucketTable::new(&[(19, "01"), (39, "02"), (59, "03"), (79, "04")], "05");

pub const TOP_TYPES: BucketTable<&str> = BucketTable::new(
    &[(19, "01"), (39, "02"), (59, "03"), (74, "04"), (89, "05")],
    "06",
);

pub const BOOTS_STYLES: BucketTable<&str> = BucketTable::new(
    &[(39, "Leather"), (69, "Fur"), (89, "Chainmail")],
    "Dragonhide",
);

pub const BOTTOMS_STYLES: BucketTable<&str> =
    BucketTable::new(&[(34, "Cloth"), (64, "Leather"), (89, "Fur")], "Plated");

pub const HELMET_STYLES: BucketTable<&str> =
    BucketTable::new(&[(24, "Cap"), (54, "Horned"), (79, "Winged")], "Spangenhelm");

pub const SHIELD_STYLES: BucketTable<&str> = BucketTable::new(
    &[(39, "Round"), (69, "Kite"), (89, "Heater")],
    "Dragon-Crest",
);

pub const WEAPON_STYLES: BucketTable<&str> = BucketTable::new(
    &[(24, "Axe"), (49, "Sword"), (69, "Spear"), (89, "War Hammer")],
    "Bearded Axe",
);

fn gated<C: ConditionTier>(
    styles: &BucketTable<&'static str>,
    selector: Score,
    condition: C,
) -> &'static str {
    if condition.is_lowest() {
        condition.label()
    } else {
        styles.lookup(selector)
    }
}

pub fn resolve_beard_type(selector: Score) -> &'static str {
    BEARD_TYPES.lookup(selector)
}

pub fn resolve_body_type(selector: Score) -> &'static str {
    BODY_TYPES.lookup(selector)
}

pub fn resolve_face_type(selector: Score) -> &'static str {
    FACE_TYPES.lookup(selector)
}

pub fn resolve_top_type(selector: Score) -> &'static str {
    TOP_TYPES.lookup(selector)
}

pub fn resolve_boots_type(selector: Score, condition: WearableCondition) -> &'static str {
    gated(&BOOTS_STYLES, selector, condition)
}

pub fn resolve_bottoms_type(selector: Score, condition: WearableCondition) -> &'static str {
    gated(&BOTTOMS_STYLES, selector, condition)
}

pub fn resolve_helmet_type(selector: Score, condition: EquipmentCondition) -> &'static str {
    gated(&HELMET_STYLES, selector, condition)
}

pub fn resolve_shield_type(selector: Score, condition: EquipmentCondition) -> &'static str {
    gated(&SHIELD_STYLES, selector, condition)
}

pub fn resolve_weapon_type(selector: Score, condition: EquipmentCondition) -> &'static str {
    gated(&WEAPON_STYLES, selector, condition)
}
