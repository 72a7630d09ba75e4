//! Training session entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FighterId, Timestamp, TrainingSessionId, ValidationError};

/// Longest session accepted, in minutes.
pub const MAX_SESSION_MINUTES: i64 = 600;

/// A scheduled training activity belonging to one fighter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSession {
    id: TrainingSessionId,
    fighter_id: FighterId,
    title: String,
    #[serde(rename = "type")]
    category: String,
    duration: u32,
    scheduled_for: Timestamp,
    completed: bool,
}

/// Unvalidated input for scheduling a session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSessionDraft {
    pub fighter_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub category: String,
    pub duration: i64,
    pub scheduled_for: Timestamp,
    #[serde(default)]
    pub completed: bool,
}

/// Partial update. The owning fighter cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSessionPatch {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub category: Option<String>,
    pub duration: Option<i64>,
    pub scheduled_for: Option<Timestamp>,
    pub completed: Option<bool>,
}

impl TrainingSession {
    /// Validates a draft and builds the session.
    pub fn new(id: TrainingSessionId, draft: TrainingSessionDraft) -> Result<Self, ValidationError> {
        let fighter_id = FighterId::new(draft.fighter_id)?;
        let title = require_text("title", draft.title)?;
        let category = require_text("type", draft.category)?.to_lowercase();
        let duration = validate_duration(draft.duration)?;

        Ok(Self {
            id,
            fighter_id,
            title,
            category,
            duration,
            scheduled_for: draft.scheduled_for,
            completed: draft.completed,
        })
    }

    /// Applies a partial update; on error the session is unchanged.
    pub fn apply(&mut self, patch: TrainingSessionPatch) -> Result<(), ValidationError> {
        let title = match patch.title {
            Some(title) => require_text("title", title)?,
            None => self.title.clone(),
        };
        let category = match patch.category {
            Some(category) => require_text("type", category)?.to_lowercase(),
            None => self.category.clone(),
        };
        let duration = match patch.duration {
            Some(duration) => validate_duration(duration)?,
            None => self.duration,
        };

        self.title = title;
        self.category = category;
        self.duration = duration;
        if let Some(scheduled_for) = patch.scheduled_for {
            self.scheduled_for = scheduled_for;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        Ok(())
    }

    pub fn id(&self) -> &TrainingSessionId {
        &self.id
    }

    pub fn fighter_id(&self) -> &FighterId {
        &self.fighter_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Category tag such as `striking` or `cardio`, lowercased.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Duration in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn scheduled_for(&self) -> &Timestamp {
        &self.scheduled_for
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

fn require_text(field: &str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

fn validate_duration(minutes: i64) -> Result<u32, ValidationError> {
    if !(1..=MAX_SESSION_MINUTES).contains(&minutes) {
        return Err(ValidationError::out_of_range(
            "duration",
            1,
            MAX_SESSION_MINUTES,
            minutes,
        ));
    }
    Ok(minutes as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TrainingSessionDraft {
        TrainingSessionDraft {
            fighter_id: "1".to_string(),
            title: "Striking Technique".to_string(),
            category: "Striking".to_string(),
            duration: 90,
            scheduled_for: Timestamp::now(),
            completed: false,
        }
    }

    fn session() -> TrainingSession {
        TrainingSession::new(TrainingSessionId::new("t1").unwrap(), draft()).unwrap()
    }

    #[test]
    fn new_normalizes_category() {
        let s = session();
        assert_eq!(s.category(), "striking");
        assert_eq!(s.duration(), 90);
        assert!(!s.is_completed());
    }

    #[test]
    fn new_rejects_zero_duration() {
        let mut d = draft();
        d.duration = 0;
        let err = TrainingSession::new(TrainingSessionId::generate(), d).unwrap_err();
        assert_eq!(err.field(), "duration");
    }

    #[test]
    fn new_rejects_blank_fighter_id() {
        let mut d = draft();
        d.fighter_id = String::new();
        assert!(TrainingSession::new(TrainingSessionId::generate(), d).is_err());
    }

    #[test]
    fn apply_marks_completed() {
        let mut s = session();
        s.apply(TrainingSessionPatch {
            completed: Some(true),
            ..Default::default()
        })
        .unwrap();

        assert!(s.is_completed());
        assert_eq!(s.title(), "Striking Technique");
    }

    #[test]
    fn apply_is_all_or_nothing() {
        let mut s = session();
        let before = s.clone();
        let result = s.apply(TrainingSessionPatch {
            title: Some("Sparring".to_string()),
            duration: Some(9_999),
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(s, before);
    }

    #[test]
    fn draft_deserializes_type_field() {
        let json = r#"{
            "fighterId": "1",
            "title": "Cardio & Conditioning",
            "type": "cardio",
            "duration": 60,
            "scheduledFor": "2024-01-15T10:30:00Z"
        }"#;
        let d: TrainingSessionDraft = serde_json::from_str(json).unwrap();
        assert_eq!(d.category, "cardio");
        assert!(!d.completed);
    }

    #[test]
    fn session_serializes_camel_case() {
        let json = serde_json::to_value(session()).unwrap();
        assert_eq!(json["fighterId"], "1");
        assert_eq!(json["type"], "striking");
        assert!(json["scheduledFor"].is_string());
    }
}
