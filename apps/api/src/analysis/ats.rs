//! ATS compatibility scoring — pure, deterministic analysis of a resume
//! snapshot.
//!
//! `analyze_resume` runs a fixed sequence of structural checks, each worth a
//! fixed number of points, and returns the capped total together with the
//! issues found and score-tiered recommendations. It never fails: absent
//! fields are treated as empty and score zero for their category.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    /// The category scored zero and will likely block ATS parsing.
    Error,
    /// Partial concern; points were missed but the resume is usable.
    Warning,
    /// Optional improvement.
    Suggestion,
}

/// One finding from a failed check, in check order (not severity-sorted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsIssue {
    pub severity: IssueSeverity,
    pub category: String,
    pub message: String,
    pub fix: String,
}

/// Full analysis result. Replaced wholesale on every invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: u32, // 0 – 100
    pub issues: Vec<AtsIssue>,
    pub recommendations: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Fixed weights and thresholds
// ────────────────────────────────────────────────────────────────────────────

const CONTACT_POINTS: u32 = 20;
const SUMMARY_POINTS: u32 = 15;
const EXPERIENCE_POINTS: u32 = 25;
const QUANTIFIED_POINTS: u32 = 10;
const SKILLS_POINTS: u32 = 15;
const EDUCATION_POINTS: u32 = 10;
const KEYWORD_POINTS: u32 = 5;

const SUMMARY_MIN_CHARS: usize = 50; // strict: exactly 50 does not qualify
const SKILLS_MIN_COUNT: usize = 5;
const KEYWORD_MIN_HITS: usize = 3;

/// Terms ATS software commonly weights. Fixed set; not a tuning surface.
const ATS_KEYWORDS: &[&str] = &[
    "management",
    "development",
    "project",
    "team",
    "leadership",
    "analysis",
];

const REQUIRED_CONTACT_FIELDS: &[(&str, fn(&ResumeRecord) -> Option<&str>)] = &[
    ("first name", |r| r.personal_info.first_name.as_deref()),
    ("last name", |r| r.personal_info.last_name.as_deref()),
    ("email", |r| r.personal_info.email.as_deref()),
    ("phone", |r| r.personal_info.phone.as_deref()),
    ("location", |r| r.personal_info.location.as_deref()),
];

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores a resume snapshot against the fixed ATS checklist.
///
/// Point allocation (additive, order-independent; issues in check order):
/// 1. all five contact fields present → 20, else one error (no partial credit)
/// 2. summary longer than 50 chars   → 15, else warning
/// 3. ≥1 experience entry            → 25, else error (skips check 4)
/// 4. any achievement with a digit   → 10, else suggestion
/// 5. ≥5 skills                      → 15, else warning
/// 6. ≥1 education entry             → 10, else suggestion
/// 7. ≥3 distinct keyword hits       →  5, else suggestion
///
/// Final score is capped at 100. Under the weights above the cap is exactly
/// reachable but never exceeded; it guards future weight changes.
pub fn analyze_resume(resume: &ResumeRecord) -> AtsReport {
    let mut points: u32 = 0;
    let mut issues = Vec::new();

    // 1. Required contact fields — all or nothing.
    let missing: Vec<&str> = REQUIRED_CONTACT_FIELDS
        .iter()
        .filter(|(_, get)| get(resume).map_or(true, str::is_empty))
        .map(|(label, _)| *label)
        .collect();
    if missing.is_empty() {
        points += CONTACT_POINTS;
    } else {
        issues.push(AtsIssue {
            severity: IssueSeverity::Error,
            category: "contact".to_string(),
            message: format!("Missing required contact fields: {}", missing.join(", ")),
            fix: "Fill in every contact field so recruiters and ATS parsers can identify you"
                .to_string(),
        });
    }

    // 2. Professional summary length.
    let summary_len = resume
        .personal_info
        .summary
        .as_deref()
        .map_or(0, |s| s.chars().count());
    if summary_len > SUMMARY_MIN_CHARS {
        points += SUMMARY_POINTS;
    } else {
        issues.push(AtsIssue {
            severity: IssueSeverity::Warning,
            category: "summary".to_string(),
            message: "Professional summary is missing or too short".to_string(),
            fix: format!(
                "Write a summary of more than {SUMMARY_MIN_CHARS} characters highlighting your strengths"
            ),
        });
    }

    // 3 + 4. Experience, then quantified achievements (only if 3 passed).
    if resume.experience.is_empty() {
        issues.push(AtsIssue {
            severity: IssueSeverity::Error,
            category: "experience".to_string(),
            message: "No work experience entries".to_string(),
            fix: "Add at least one work experience entry".to_string(),
        });
    } else {
        points += EXPERIENCE_POINTS;

        let has_quantified = resume
            .experience
            .iter()
            .flat_map(|e| e.achievements.iter())
            .any(|a| a.chars().any(|c| c.is_ascii_digit()));
        if has_quantified {
            points += QUANTIFIED_POINTS;
        } else {
            issues.push(AtsIssue {
                severity: IssueSeverity::Suggestion,
                category: "achievements".to_string(),
                message: "No quantified achievements found".to_string(),
                fix: "Add numbers to your achievements, e.g. 'cut build time by 40%'".to_string(),
            });
        }
    }

    // 5. Skill count.
    if resume.skills.len() >= SKILLS_MIN_COUNT {
        points += SKILLS_POINTS;
    } else {
        issues.push(AtsIssue {
            severity: IssueSeverity::Warning,
            category: "skills".to_string(),
            message: format!(
                "Only {} skills listed; ATS matching works best with {SKILLS_MIN_COUNT} or more",
                resume.skills.len()
            ),
            fix: "List more of the tools and technologies you work with".to_string(),
        });
    }

    // 6. Education.
    if resume.education.is_empty() {
        issues.push(AtsIssue {
            severity: IssueSeverity::Suggestion,
            category: "education".to_string(),
            message: "No education entries".to_string(),
            fix: "Add your degree or relevant coursework".to_string(),
        });
    } else {
        points += EDUCATION_POINTS;
    }

    // 7. Keyword density over a searchable serialization of the whole record.
    let haystack = searchable_text(resume);
    let hits = ATS_KEYWORDS
        .iter()
        .filter(|kw| haystack.contains(*kw))
        .count();
    if hits >= KEYWORD_MIN_HITS {
        points += KEYWORD_POINTS;
    } else {
        issues.push(AtsIssue {
            severity: IssueSeverity::Suggestion,
            category: "keywords".to_string(),
            message: format!(
                "Only {hits} of {} common ATS keywords found",
                ATS_KEYWORDS.len()
            ),
            fix: format!("Work in terms like {}", ATS_KEYWORDS.join(", ")),
        });
    }

    // 8. Defensive cap.
    let score = points.min(100);

    AtsReport {
        recommendations: recommendations_for_score(score),
        score,
        issues,
    }
}

/// Lowercased JSON rendering of the record, used for keyword scanning.
/// Serialization of these plain data types cannot fail.
fn searchable_text(resume: &ResumeRecord) -> String {
    serde_json::to_string(resume)
        .unwrap_or_default()
        .to_lowercase()
}

/// Fixed recommendation strings per score tier. Boundaries are inclusive at
/// the lower bound: 80 is "doing well", 60 is "room for improvement".
fn recommendations_for_score(score: u32) -> Vec<String> {
    let tier: &[&str] = if score >= 80 {
        &[
            "Your resume is well-optimized for applicant tracking systems.",
            "Keep achievements quantified as you add new roles.",
            "Tailor your summary keywords to each job posting.",
        ]
    } else if score >= 60 {
        &[
            "Your resume covers the basics but has room for improvement.",
            "Add measurable results to your experience achievements.",
            "Mirror more keywords from the job descriptions you target.",
        ]
    } else {
        &[
            "Your resume needs significant work to pass ATS filters.",
            "Complete every contact field so you are reachable.",
            "Add at least one work experience entry with concrete achievements.",
            "Write a professional summary that covers your strengths.",
        ]
    };
    tier.iter().map(|s| s.to_string()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo, SkillEntry};

    fn skill(name: &str) -> SkillEntry {
        SkillEntry {
            name: Some(name.to_string()),
            level: None,
        }
    }

    /// A resume that passes every check: score 100, zero issues.
    fn complete_resume() -> ResumeRecord {
        ResumeRecord {
            personal_info: PersonalInfo {
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                email: Some("ada@example.com".to_string()),
                phone: Some("+44 20 7946 0958".to_string()),
                location: Some("London, UK".to_string()),
                summary: Some(
                    "Engineering lead with a decade of experience shipping reliable systems."
                        .to_string(),
                ),
            },
            experience: vec![ExperienceEntry {
                company: Some("Analytical Engines Ltd".to_string()),
                role: Some("Lead Engineer".to_string()),
                // Carries both the digit and the keyword hits, so tests can
                // swap the summary without disturbing other checks.
                achievements: vec![
                    "Drove project management and team leadership for development of 3 analysis tools, cutting compute time by 40%"
                        .to_string(),
                ],
                ..Default::default()
            }],
            skills: vec![
                skill("Rust"),
                skill("PostgreSQL"),
                skill("Distributed systems"),
                skill("SQL"),
                skill("Mentoring"),
            ],
            education: vec![EducationEntry {
                institution: Some("University of London".to_string()),
                degree: Some("BSc".to_string()),
                field: Some("Mathematics".to_string()),
                ..Default::default()
            }],
        }
    }

    #[test]
    fn complete_resume_scores_100_with_no_issues() {
        let report = analyze_resume(&complete_resume());
        assert_eq!(report.score, 100);
        assert!(report.issues.is_empty(), "issues: {:?}", report.issues);
    }

    #[test]
    fn empty_resume_scores_zero_with_six_issues_in_check_order() {
        let report = analyze_resume(&ResumeRecord::default());
        assert_eq!(report.score, 0);
        assert_eq!(report.issues.len(), 6);

        let expected = [
            ("contact", IssueSeverity::Error),
            ("summary", IssueSeverity::Warning),
            ("experience", IssueSeverity::Error),
            ("skills", IssueSeverity::Warning),
            ("education", IssueSeverity::Suggestion),
            ("keywords", IssueSeverity::Suggestion),
        ];
        for (issue, (category, severity)) in report.issues.iter().zip(expected) {
            assert_eq!(issue.category, category);
            assert_eq!(issue.severity, severity);
        }
    }

    #[test]
    fn achievement_check_is_skipped_without_experience() {
        let report = analyze_resume(&ResumeRecord::default());
        assert!(report.issues.iter().all(|i| i.category != "achievements"));
    }

    #[test]
    fn missing_contact_field_forfeits_whole_category() {
        let mut resume = complete_resume();
        resume.personal_info.phone = Some(String::new()); // empty counts as missing
        let report = analyze_resume(&resume);
        assert_eq!(report.score, 80);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].category, "contact");
        assert!(report.issues[0].message.contains("phone"));
    }

    #[test]
    fn summary_of_exactly_50_chars_earns_nothing() {
        let mut resume = complete_resume();
        resume.personal_info.summary = Some("a".repeat(50));
        assert_eq!(analyze_resume(&resume).score, 100 - SUMMARY_POINTS);

        resume.personal_info.summary = Some("a".repeat(51));
        assert_eq!(analyze_resume(&resume).score, 100);
    }

    #[test]
    fn four_skills_warns_five_passes() {
        let mut resume = complete_resume();
        resume.skills.truncate(4);
        let report = analyze_resume(&resume);
        assert_eq!(report.score, 100 - SKILLS_POINTS);
        assert_eq!(report.issues[0].category, "skills");

        resume.skills.push(skill("CI/CD"));
        assert_eq!(analyze_resume(&resume).score, 100);
    }

    #[test]
    fn unquantified_achievements_emit_suggestion() {
        let mut resume = complete_resume();
        resume.experience[0].achievements = vec![
            "Improved project management, team leadership, and analysis practices".to_string(),
        ];
        let report = analyze_resume(&resume);
        assert_eq!(report.score, 100 - QUANTIFIED_POINTS);
        assert_eq!(report.issues[0].severity, IssueSeverity::Suggestion);
        assert_eq!(report.issues[0].category, "achievements");
    }

    #[test]
    fn missing_education_is_a_suggestion_not_an_error() {
        let mut resume = complete_resume();
        resume.education.clear();
        let report = analyze_resume(&resume);
        assert_eq!(report.score, 100 - EDUCATION_POINTS);
        assert_eq!(report.issues[0].severity, IssueSeverity::Suggestion);
    }

    #[test]
    fn fewer_than_three_keyword_hits_emits_suggestion() {
        let mut resume = complete_resume();
        // One keyword hit ("project"), digit still present.
        resume.experience[0].achievements =
            vec!["Cut costs by 15% on the flagship project".to_string()];
        let report = analyze_resume(&resume);
        assert_eq!(report.score, 100 - KEYWORD_POINTS);
        assert_eq!(report.issues[0].category, "keywords");
        assert_eq!(report.issues[0].severity, IssueSeverity::Suggestion);
    }

    #[test]
    fn keyword_scan_is_case_insensitive() {
        let mut resume = complete_resume();
        resume.experience[0].achievements =
            vec!["PROJECT MANAGEMENT and TEAM LEADERSHIP for 4 departments".to_string()];
        assert_eq!(analyze_resume(&resume).score, 100);
    }

    #[test]
    fn adding_a_qualifying_section_never_decreases_the_score() {
        let mut resume = ResumeRecord::default();
        let mut last = analyze_resume(&resume).score;

        resume.education.push(EducationEntry::default());
        let score = analyze_resume(&resume).score;
        assert!(score >= last);
        last = score;

        resume.experience.push(ExperienceEntry {
            achievements: vec!["Shipped 12 releases".to_string()],
            ..Default::default()
        });
        let score = analyze_resume(&resume).score;
        assert!(score >= last);
        last = score;

        resume.skills = (0..5).map(|i| skill(&format!("skill-{i}"))).collect();
        assert!(analyze_resume(&resume).score >= last);
    }

    #[test]
    fn analysis_is_idempotent() {
        let resume = complete_resume();
        assert_eq!(analyze_resume(&resume), analyze_resume(&resume));

        let empty = ResumeRecord::default();
        assert_eq!(analyze_resume(&empty), analyze_resume(&empty));
    }

    #[test]
    fn recommendation_tier_boundaries() {
        assert_eq!(recommendations_for_score(80).len(), 3);
        assert!(recommendations_for_score(80)[0].contains("well-optimized"));
        assert!(recommendations_for_score(79)[0].contains("room for improvement"));
        assert_eq!(recommendations_for_score(60).len(), 3);
        assert!(recommendations_for_score(60)[0].contains("room for improvement"));
        assert_eq!(recommendations_for_score(59).len(), 4);
        assert!(recommendations_for_score(59)[0].contains("significant work"));
        assert_eq!(recommendations_for_score(0).len(), 4);
    }

    #[test]
    fn report_carries_recommendations_for_its_own_score() {
        let report = analyze_resume(&complete_resume());
        assert_eq!(report.recommendations, recommendations_for_score(100));
    }
}
