//! Raw numeric trait data delivered for one Viking.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::score::Score;
use crate::types::VikingNumber;

/// Number of decimal digits in the composite `appearance` value.
pub const APPEARANCE_DIGITS: usize = 8;

/// Largest value that still fits in [`APPEARANCE_DIGITS`] digits.
pub const MAX_APPEARANCE: u32 = 99_999_999;

/// Raw values exactly as supplied upstream.
///
/// Fields are unchecked integers; [`RawTraitInput::validate`] turns them
/// into [`CheckedInput`] or reports the first malformed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawTraitInput {
    /// Four concatenated two-digit selectors: beard, body, face, top.
    pub appearance: u32,
    pub boots: u32,
    pub speed: u32,
    pub bottoms: u32,
    pub stamina: u32,
    pub helmet: u32,
    pub intelligence: u32,
    pub shield: u32,
    pub defence: u32,
    pub weapon: u32,
    pub attack: u32,
}

/// The four selectors packed into `appearance`, in digit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppearanceSelectors {
    pub beard: Score,
    pub body: Score,
    pub face: Score,
    pub top: Score,
}

/// A style selector paired with the statistic that sets its condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipmentPair {
    pub selector: Score,
    pub statistic: Score,
}

/// Validated form of [`RawTraitInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedInput {
    pub appearance: AppearanceSelectors,
    pub boots: EquipmentPair,
    pub bottoms: EquipmentPair,
    pub helmet: EquipmentPair,
    pub shield: EquipmentPair,
    pub weapon: EquipmentPair,
}

impl AppearanceSelectors {
    /// Split an 8-digit appearance value (left-padded with zeros) into its
    /// four two-digit selectors.
    pub fn split(number: VikingNumber, appearance: u32) -> Result<Self, CoreError> {
        if appearance > MAX_APPEARANCE {
            return Err(CoreError::malformed(
                number,
                "appearance",
                format!("{appearance} has more than {APPEARANCE_DIGITS} digits"),
            ));
        }

        Ok(Self {
            beard: checked(number, "appearance", appearance / 1_000_000)?,
            body: checked(number, "appearance", appearance / 10_000 % 100)?,
            face: checked(number, "appearance", appearance / 100 % 100)?,
            top: checked(number, "appearance", appearance % 100)?,
        })
    }

    /// Reassemble the zero-padded digit string the selectors came from.
    pub fn digits(&self) -> String {
        format!("{}{}{}{}", self.beard, self.body, self.face, self.top)
    }
}

fn checked(number: VikingNumber, field: &'static str, value: u32) -> Result<Score, CoreError> {
    Score::new(value).map_err(|e| CoreError::malformed(number, field, e.to_string()))
}

impl RawTraitInput {
    /// Check every field, failing on the first one outside its domain.
    pub fn validate(&self, number: VikingNumber) -> Result<CheckedInput, CoreError> {
        let pair = |selector_field: &'static str,
                    selector: u32,
                    statistic_field: &'static str,
                    statistic: u32|
         -> Result<EquipmentPair, CoreError> {
            Ok(EquipmentPair {
                selector: checked(number, selector_field, selector)?,
                statistic: checked(number, statistic_field, statistic)?,
            })
        };

        Ok(CheckedInput {
            appearance: AppearanceSelectors::split(number, self.appearance)?,
            boots: pair("boots", self.boots, "speed", self.speed)?,
            bottoms: pair("bottoms", self.bottoms, "stamina", self.stamina)?,
            helmet: pair("helmet", self.helmet, "intelligence", self.intelligence)?,
            shield: pair("shield", self.shield, "defence", self.defence)?,
            weapon: pair("weapon", self.weapon, "attack", self.attack)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn input(appearance: u32) -> RawTraitInput {
        RawTraitInput {
            appearance,
            boots: 10,
            speed: 20,
            bottoms: 30,
            stamina: 40,
            helmet: 50,
            intelligence: 60,
            shield: 70,
            defence: 80,
            weapon: 90,
            attack: 99,
        }
    }

    #[test]
    fn splits_in_beard_body_face_top_order() {
        let sel = AppearanceSelectors::split(1, 15032704).unwrap();
        assert_eq!(sel.beard.value(), 15);
        assert_eq!(sel.body.value(), 3);
        assert_eq!(sel.face.value(), 27);
        assert_eq!(sel.top.value(), 4);
    }

    #[test]
    fn short_values_are_left_padded() {
        let sel = AppearanceSelectors::split(1, 5).unwrap();
        assert_eq!(sel.beard.value(), 0);
        assert_eq!(sel.body.value(), 0);
        assert_eq!(sel.face.value(), 0);
        assert_eq!(sel.top.value(), 5);
        assert_eq!(sel.digits(), "00000005");
    }

    #[test]
    fn digits_round_trip() {
        for appearance in [0, 10000000, 15032704, 99999999, 42424242, 10203] {
            let sel = AppearanceSelectors::split(7, appearance).unwrap();
            assert_eq!(sel.digits(), format!("{appearance:08}"));
        }
    }

    #[test]
    fn nine_digit_appearance_is_malformed() {
        let err = AppearanceSelectors::split(12, 100_000_000).unwrap_err();
        assert_matches!(
            err,
            CoreError::MalformedInput { number: 12, field: "appearance", .. }
        );
    }

    #[test]
    fn out_of_range_statistic_is_malformed() {
        let mut raw = input(15032704);
        raw.defence = 100;
        let err = raw.validate(3).unwrap_err();
        assert_matches!(
            err,
            CoreError::MalformedInput { number: 3, field: "defence", .. }
        );
    }

    #[test]
    fn out_of_range_selector_is_malformed() {
        let mut raw = input(15032704);
        raw.weapon = 250;
        assert_matches!(
            raw.validate(3),
            Err(CoreError::MalformedInput { field: "weapon", .. })
        );
    }

    #[test]
    fn valid_input_passes() {
        let checked = input(15032704).validate(1).unwrap();
        assert_eq!(checked.weapon.statistic.value(), 99);
        assert_eq!(checked.boots.selector.value(), 10);
    }
}
