//! Asset specification builder.
//!
//! Turns one [`RawTraitInput`] into the fully-resolved
//! [`AssetSpecification`] consumed by the compositor and the metadata
//! formatter. Pure: the same input always produces the same specification.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::condition::{
    resolve_equipment_condition, resolve_wearable_condition, ConditionTier, EquipmentCondition,
    WearableCondition,
};
use crate::config::AssetConfig;
use crate::error::CoreError;
use crate::input::{EquipmentPair, RawTraitInput};
use crate::score::Score;
use crate::slot::{Slot, LAYER_ORDER};
use crate::trait_selector::{
    resolve_beard_type, resolve_body_type, resolve_boots_type, resolve_bottoms_type,
    resolve_face_type, resolve_helmet_type, resolve_shield_type, resolve_top_type,
    resolve_weapon_type,
};
use crate::types::VikingNumber;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitNames {
    pub beard: String,
    pub body: String,
    pub face: String,
    pub top: String,
    pub boots: String,
    pub bottoms: String,
    pub helmet: String,
    pub shield: String,
    pub weapon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditions {
    pub boots: WearableCondition,
    pub bottoms: WearableCondition,
    pub helmet: EquipmentCondition,
    pub shield: EquipmentCondition,
    pub weapon: EquipmentCondition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub speed: u8,
    pub stamina: u8,
    pub intelligence: u8,
    pub defence: u8,
    pub attack: u8,
}

/// Asset file per slot.
///
/// Appearance slots and wearables always have a file; wearables at the
/// lowest tier point at the shared `{slot}_basic.png`. Equipment slots at
/// the lowest tier have nothing to layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPaths {
    pub beard: PathBuf,
    pub body: PathBuf,
    pub face: PathBuf,
    pub top: PathBuf,
    pub boots: PathBuf,
    pub bottoms: PathBuf,
    pub helmet: Option<PathBuf>,
    pub shield: Option<PathBuf>,
    pub weapon: Option<PathBuf>,
}

impl AssetPaths {
    pub fn get(&self, slot: Slot) -> Option<&Path> {
        match slot {
            Slot::Beard => Some(&self.beard),
            Slot::Body => Some(&self.body),
            Slot::Face => Some(&self.face),
            Slot::Top => Some(&self.top),
            Slot::Boots => Some(&self.boots),
            Slot::Bottoms => Some(&self.bottoms),
            Slot::Helmet => self.helmet.as_deref(),
            Slot::Shield => self.shield.as_deref(),
            Slot::Weapon => self.weapon.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSpecification {
    pub number: VikingNumber,
    pub image_url: String,
    pub names: TraitNames,
    pub conditions: Conditions,
    pub stats: Stats,
    pub file_paths: AssetPaths,
}

impl AssetSpecification {
    /// Present layers in compositing order.
    pub fn layers(&self) -> Vec<(Slot, &Path)> {
        LAYER_ORDER
            .iter()
            .filter_map(|slot| self.file_paths.get(*slot).map(|path| (*slot, path)))
            .collect()
    }
}

/// Normalise a trait name for use in a file name: lower-case, with
/// whitespace and hyphens replaced by underscores.
pub fn asset_token(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_whitespace() || c == '-' {
                '_'
            } else {
                c
            }
        })
        .collect::<String>()
        .to_lowercase()
}

fn appearance_path(root: &Path, slot: Slot, name: &str) -> PathBuf {
    root.join(slot.directory())
        .join(format!("{}_{}.png", slot.key(), asset_token(name)))
}

fn styled_path<C: ConditionTier>(root: &Path, slot: Slot, style: &str, condition: C) -> PathBuf {
    let style = asset_token(style);
    root.join(slot.directory()).join(&style).join(format!(
        "{}_{}_{}.png",
        slot.key(),
        style,
        asset_token(condition.label())
    ))
}

fn wearable_path(root: &Path, slot: Slot, style: &str, condition: WearableCondition) -> PathBuf {
    if condition.is_lowest() {
        root.join(slot.directory())
            .join(format!("{}_basic.png", slot.key()))
    } else {
        styled_path(root, slot, style, condition)
    }
}

fn equipment_path(
    root: &Path,
    slot: Slot,
    style: &str,
    condition: EquipmentCondition,
) -> Option<PathBuf> {
    (!condition.is_lowest()).then(|| styled_path(root, slot, style, condition))
}

struct Resolved<C> {
    name: &'static str,
    condition: C,
    statistic: u8,
}

fn wearable(
    pair: EquipmentPair,
    resolve: fn(Score, WearableCondition) -> &'static str,
) -> Resolved<WearableCondition> {
    let condition = resolve_wearable_condition(pair.statistic);
    Resolved {
        name: resolve(pair.selector, condition),
        condition,
        statistic: pair.statistic.value(),
    }
}

fn equipment(
    pair: EquipmentPair,
    resolve: fn(Score, EquipmentCondition) -> &'static str,
) -> Resolved<EquipmentCondition> {
    let condition = resolve_equipment_condition(pair.statistic);
    Resolved {
        name: resolve(pair.selector, condition),
        condition,
        statistic: pair.statistic.value(),
    }
}

/// Derive the full specification for Viking `number`.
///
/// Fails with [`CoreError::MalformedInput`] if any raw field is outside its
/// domain; no partial specification is produced.
pub fn build_specification(
    config: &AssetConfig,
    number: VikingNumber,
    input: &RawTraitInput,
) -> Result<AssetSpecification, CoreError> {
    let checked = input.validate(number)?;
    let root = config.assets_dir.as_path();

    let beard = resolve_beard_type(checked.appearance.beard);
    let body = resolve_body_type(checked.appearance.body);
    let face = resolve_face_type(checked.appearance.face);
    let top = resolve_top_type(checked.appearance.top);

    let boots = wearable(checked.boots, resolve_boots_type);
    let bottoms = wearable(checked.bottoms, resolve_bottoms_type);
    let helmet = equipment(checked.helmet, resolve_helmet_type);
    let shield = equipment(checked.shield, resolve_shield_type);
    let weapon = equipment(checked.weapon, resolve_weapon_type);

    let file_paths = AssetPaths {
        beard: appearance_path(root, Slot::Beard, beard),
        body: appearance_path(root, Slot::Body, body),
        face: appearance_path(root, Slot::Face, face),
        top: appearance_path(root, Slot::Top, top),
        boots: wearable_path(root, Slot::Boots, boots.name, boots.condition),
        bottoms: wearable_path(root, Slot::Bottoms, bottoms.name, bottoms.condition),
        helmet: equipment_path(root, Slot::Helmet, helmet.name, helmet.condition),
        shield: equipment_path(root, Slot::Shield, shield.name, shield.condition),
        weapon: equipment_path(root, Slot::Weapon, weapon.name, weapon.condition),
    };

    Ok(AssetSpecification {
        number,
        image_url: config.image_url(number),
        names: TraitNames {
            beard: beard.to_string(),
            body: body.to_string(),
            face: face.to_string(),
            top: top.to_string(),
            boots: boots.name.to_string(),
            bottoms: bottoms.name.to_string(),
            helmet: helmet.name.to_string(),
            shield: shield.name.to_string(),
            weapon: weapon.name.to_string(),
        },
        conditions: Conditions {
            boots: boots.condition,
            bottoms: bottoms.condition,
            helmet: helmet.condition,
            shield: shield.condition,
            weapon: weapon.condition,
        },
        stats: Stats {
            speed: boots.statistic,
            stamina: bottoms.statistic,
            intelligence: helmet.statistic,
            defence: shield.statistic,
            attack: weapon.statistic,
        },
        file_paths,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn config() -> AssetConfig {
        AssetConfig {
            assets_dir: "/assets".into(),
            output_dir: "/out".into(),
            image_base_uri: "https://vikings.example/images".into(),
            description: "test".into(),
        }
    }

    fn input() -> RawTraitInput {
        RawTraitInput {
            appearance: 15032704,
            boots: 50,
            speed: 5,
            bottoms: 70,
            stamina: 60,
            helmet: 30,
            intelligence: 3,
            shield: 95,
            defence: 45,
            weapon: 80,
            attack: 97,
        }
    }

    #[test]
    fn resolves_appearance_names() {
        let spec = build_specification(&config(), 1, &input()).unwrap();
        assert_eq!(spec.names.beard, "01");
        assert_eq!(spec.names.body, "Devil");
        assert_eq!(spec.names.face, "02");
        assert_eq!(spec.names.top, "01");
        assert_eq!(
            spec.file_paths.body,
            PathBuf::from("/assets/bodies/body_devil.png")
        );
        assert_eq!(
            spec.file_paths.beard,
            PathBuf::from("/assets/beards/beard_01.png")
        );
    }

    #[test]
    fn basic_boots_use_shared_fallback() {
        let spec = build_specification(&config(), 1, &input()).unwrap();
        assert_eq!(spec.conditions.boots, WearableCondition::Basic);
        assert_eq!(spec.names.boots, "Basic");
        assert_eq!(
            spec.file_paths.boots,
            PathBuf::from("/assets/boots/boots_basic.png")
        );
    }

    #[test]
    fn styled_wearable_uses_style_directory() {
        let spec = build_specification(&config(), 1, &input()).unwrap();
        assert_eq!(spec.conditions.bottoms, WearableCondition::Worn);
        assert_eq!(spec.names.bottoms, "Fur");
        assert_eq!(
            spec.file_paths.bottoms,
            PathBuf::from("/assets/bottoms/fur/bottoms_fur_worn.png")
        );
    }

    #[test]
    fn perfect_weapon_path_carries_condition() {
        let spec = build_specification(&config(), 1, &input()).unwrap();
        assert_eq!(spec.conditions.weapon, EquipmentCondition::Perfect);
        assert_eq!(spec.names.weapon, "War Hammer");
        assert_eq!(
            spec.file_paths.weapon,
            Some(PathBuf::from(
                "/assets/weapons/war_hammer/weapon_war_hammer_perfect.png"
            ))
        );
    }

    #[test]
    fn equipment_at_lowest_tier_has_no_asset() {
        let spec = build_specification(&config(), 1, &input()).unwrap();
        assert_eq!(spec.conditions.helmet, EquipmentCondition::None);
        assert_eq!(spec.names.helmet, "None");
        assert_eq!(spec.file_paths.helmet, None);
        assert_eq!(
            spec.file_paths.shield,
            Some(PathBuf::from(
                "/assets/shields/dragon_crest/shield_dragon_crest_broken.png"
            ))
        );
    }

    #[test]
    fn optional_paths_track_condition_exhaustively() {
        for stat in 0..=99u32 {
            let mut raw = input();
            raw.intelligence = stat;
            raw.stamina = stat;
            let spec = build_specification(&config(), 1, &raw).unwrap();
            assert_eq!(
                spec.file_paths.helmet.is_none(),
                spec.conditions.helmet == EquipmentCondition::None
            );
            let bottoms = spec.file_paths.bottoms.to_string_lossy().into_owned();
            assert_eq!(
                bottoms.ends_with("bottoms_basic.png"),
                spec.conditions.bottoms == WearableCondition::Basic
            );
        }
    }

    #[test]
    fn stats_and_image_url() {
        let spec = build_specification(&config(), 314, &input()).unwrap();
        assert_eq!(spec.stats.speed, 5);
        assert_eq!(spec.stats.attack, 97);
        assert_eq!(spec.image_url, "https://vikings.example/images/viking_314.png");
    }

    #[test]
    fn building_twice_is_identical() {
        let a = build_specification(&config(), 9, &input()).unwrap();
        let b = build_specification(&config(), 9, &input()).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_vec(&a).unwrap(),
            serde_json::to_vec(&b).unwrap()
        );
    }

    #[test]
    fn layer_order_with_all_slots_present() {
        let mut raw = input();
        raw.speed = 99;
        raw.intelligence = 99;
        raw.defence = 99;
        let spec = build_specification(&config(), 1, &raw).unwrap();
        let order: Vec<Slot> = spec.layers().into_iter().map(|(slot, _)| slot).collect();
        assert_eq!(
            order,
            [
                Slot::Body,
                Slot::Face,
                Slot::Top,
                Slot::Beard,
                Slot::Bottoms,
                Slot::Boots,
                Slot::Helmet,
                Slot::Shield,
                Slot::Weapon,
            ]
        );
    }

    #[test]
    fn absent_layers_are_skipped() {
        let spec = build_specification(&config(), 1, &input()).unwrap();
        let slots: Vec<Slot> = spec.layers().into_iter().map(|(slot, _)| slot).collect();
        assert!(!slots.contains(&Slot::Helmet));
        assert_eq!(slots.len(), 8);
    }

    #[test]
    fn malformed_input_yields_no_specification() {
        let mut raw = input();
        raw.appearance = 123_456_789;
        assert_matches!(
            build_specification(&config(), 5, &raw),
            Err(CoreError::MalformedInput { number: 5, field: "appearance", .. })
        );
    }

    #[test]
    fn asset_token_normalises_names() {
        assert_eq!(asset_token("Frost Giant"), "frost_giant");
        assert_eq!(asset_token("Dragon-Crest"), "dragon_crest");
        assert_eq!(asset_token("01"), "01");
    }
}
