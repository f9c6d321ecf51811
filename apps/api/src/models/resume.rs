use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Contact block of a resume. Every field is optional: the form layer saves
/// drafts in any state of completion and the scorer must tolerate all of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: Option<String>,
    pub role: Option<String>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEntry {
    pub name: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
}

/// A full resume snapshot as edited in the builder. Deserializes from `{}`:
/// absent collections become empty, absent strings become `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillEntry>,
    pub education: Vec<EducationEntry>,
}

/// Persistence row for a stored resume. The record snapshot lives in `data`
/// as JSONB; `ats_score` is the last persisted analysis result, if any.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub data: Value,
    pub ats_score: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_deserializes_to_default_record() {
        let record: ResumeRecord = serde_json::from_value(json!({})).unwrap();
        assert!(record.personal_info.first_name.is_none());
        assert!(record.experience.is_empty());
        assert!(record.skills.is_empty());
        assert!(record.education.is_empty());
    }

    #[test]
    fn partial_entry_tolerates_missing_fields() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "experience": [{"company": "Acme"}],
            "skills": [{"name": "Rust"}]
        }))
        .unwrap();
        assert_eq!(record.experience.len(), 1);
        assert!(record.experience[0].achievements.is_empty());
        assert_eq!(record.skills[0].name.as_deref(), Some("Rust"));
        assert!(record.skills[0].level.is_none());
    }
}
