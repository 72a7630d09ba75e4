//! Fighter entity.

use serde::{Deserialize, Deserializer, Serialize};

use super::{FightRecord, FightingStyle};
use crate::domain::foundation::{FighterId, ValidationError};

/// Youngest age accepted for a fighter.
pub const MIN_AGE: u32 = 16;

/// Oldest age accepted for a fighter.
pub const MAX_AGE: u32 = 70;

/// An athlete with physical and competitive attributes.
///
/// Always constructed through [`Fighter::new`], so every instance holds a
/// parsed record and in-range measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fighter {
    id: FighterId,
    name: String,
    nickname: Option<String>,
    age: u32,
    weight_class: String,
    weight: f64,
    reach: f64,
    record: FightRecord,
    fighting_style: String,
    image_url: Option<String>,
}

/// Unvalidated input for creating a fighter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterDraft {
    pub name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    pub age: i64,
    pub weight_class: String,
    pub weight: f64,
    pub reach: f64,
    pub record: String,
    pub fighting_style: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Partial update; absent fields keep their current value.
///
/// `nickname` and `image_url` are nullable: `Some(None)` (an explicit JSON
/// `null`) clears them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterPatch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub nickname: Option<Option<String>>,
    pub age: Option<i64>,
    pub weight_class: Option<String>,
    pub weight: Option<f64>,
    pub reach: Option<f64>,
    pub record: Option<String>,
    pub fighting_style: Option<String>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub image_url: Option<Option<String>>,
}

/// Maps a present field to `Some`, keeping `null` as `Some(None)`.
/// Absent fields never reach this and fall back to `None`.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl FighterPatch {
    pub fn is_empty(&self) -> bool {
        *self == FighterPatch::default()
    }
}

impl Fighter {
    /// Validates a draft and builds the fighter.
    ///
    /// # Errors
    ///
    /// - `EmptyField` for a blank name, weight class or fighting style
    /// - `OutOfRange` for an age outside `MIN_AGE..=MAX_AGE`
    /// - `NotPositive` for a non-positive or non-finite weight or reach
    /// - `InvalidFormat` for a record not written `W-L-D`
    pub fn new(id: FighterId, draft: FighterDraft) -> Result<Self, ValidationError> {
        let name = require_text("name", draft.name)?;
        let weight_class = require_text("weight_class", draft.weight_class)?;
        let fighting_style = require_text("fighting_style", draft.fighting_style)?;

        if draft.age < i64::from(MIN_AGE) || draft.age > i64::from(MAX_AGE) {
            return Err(ValidationError::out_of_range(
                "age",
                i64::from(MIN_AGE),
                i64::from(MAX_AGE),
                draft.age,
            ));
        }
        require_positive("weight", draft.weight)?;
        require_positive("reach", draft.reach)?;
        let record: FightRecord = draft.record.parse()?;

        Ok(Self {
            id,
            name,
            nickname: optional_text(draft.nickname),
            age: draft.age as u32,
            weight_class,
            weight: draft.weight,
            reach: draft.reach,
            record,
            fighting_style,
            image_url: optional_text(draft.image_url),
        })
    }

    /// Applies a partial update, re-validating the merged result.
    ///
    /// On error the fighter is left unchanged.
    pub fn apply(&mut self, patch: FighterPatch) -> Result<(), ValidationError> {
        let current = self.to_draft();
        let merged = FighterDraft {
            name: patch.name.unwrap_or(current.name),
            nickname: patch.nickname.unwrap_or(current.nickname),
            age: patch.age.unwrap_or(current.age),
            weight_class: patch.weight_class.unwrap_or(current.weight_class),
            weight: patch.weight.unwrap_or(current.weight),
            reach: patch.reach.unwrap_or(current.reach),
            record: patch.record.unwrap_or(current.record),
            fighting_style: patch.fighting_style.unwrap_or(current.fighting_style),
            image_url: patch.image_url.unwrap_or(current.image_url),
        };

        *self = Fighter::new(self.id.clone(), merged)?;
        Ok(())
    }

    fn to_draft(&self) -> FighterDraft {
        FighterDraft {
            name: self.name.clone(),
            nickname: self.nickname.clone(),
            age: i64::from(self.age),
            weight_class: self.weight_class.clone(),
            weight: self.weight,
            reach: self.reach,
            record: self.record.to_string(),
            fighting_style: self.fighting_style.clone(),
            image_url: self.image_url.clone(),
        }
    }

    pub fn id(&self) -> &FighterId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn weight_class(&self) -> &str {
        &self.weight_class
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn reach(&self) -> f64 {
        self.reach
    }

    pub fn record(&self) -> FightRecord {
        self.record
    }

    /// The style tag as entered.
    pub fn fighting_style(&self) -> &str {
        &self.fighting_style
    }

    /// The interpreted style used by the scoring heuristic.
    pub fn style(&self) -> FightingStyle {
        FightingStyle::from_tag(&self.fighting_style)
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

fn require_text(field: &str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn require_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::not_positive(field, value));
    }
    Ok(())
}
