//! Local ATS calculator — keyword overlap between a résumé and a job description.
//!
//! The score is a rough estimate: `keyword_match` plus a random bonus drawn
//! from `[0, 20)`, capped at 95. The bonus is intentional and tells the
//! reader this is a local approximation, not an authoritative score. The
//! generator is injected so callers (and tests) can pin it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ats::fuzzy::tokens_match;
use crate::ats::keywords::extract_keywords;
use crate::ats::recommendations::generate_recommendations;

/// Ceiling on `overall_score`; a local estimate never claims a perfect match.
pub const MAX_OVERALL_SCORE: f64 = 95.0;
/// Upper (exclusive) bound of the random bonus.
pub const MAX_VARIANCE: f64 = 20.0;
/// `similarity_score` sits this far below `overall_score`.
const SIMILARITY_OFFSET: f64 = 5.0;
const MAX_LISTED_KEYWORDS: usize = 10;
const MAX_DIAGNOSTIC_KEYWORDS: usize = 15;

/// Score record returned to the UI. Field names are part of the wire contract
/// and shared with the remote analysis backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsScoreRecord {
    pub overall_score: f64,
    pub similarity_score: f64,
    pub keyword_match: f64,
    #[serde(default)]
    pub matched_keywords: Vec<String>,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub job_keywords: Vec<String>,
    #[serde(default)]
    pub resume_keywords: Vec<String>,
}

/// Matched / missing verdicts for the job keywords, in job-keyword order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordClassification {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl KeywordClassification {
    /// Percentage of job keywords found in the résumé; 0 when there are none.
    pub fn match_percentage(&self) -> f64 {
        let total = self.matched.len() + self.missing.len();
        if total == 0 {
            return 0.0;
        }
        self.matched.len() as f64 / total as f64 * 100.0
    }
}

/// Classifies every job keyword against the résumé keywords.
pub fn classify_keywords(
    resume_keywords: &[String],
    job_keywords: &[String],
) -> KeywordClassification {
    let mut classification = KeywordClassification::default();
    for job_keyword in job_keywords {
        if resume_keywords.iter().any(|r| tokens_match(r, job_keyword)) {
            classification.matched.push(job_keyword.clone());
        } else {
            classification.missing.push(job_keyword.clone());
        }
    }
    classification
}

/// Computes the score record, drawing the variance bonus from `rng`.
pub fn calculate_ats<R: Rng + ?Sized>(
    resume_text: &str,
    job_description: &str,
    rng: &mut R,
) -> AtsScoreRecord {
    let variance = rng.gen_range(0.0..MAX_VARIANCE);
    calculate_ats_with_variance(resume_text, job_description, variance)
}

/// Deterministic core of [`calculate_ats`] with the bonus supplied by the caller.
///
/// The bonus is applied even when the job description yields no keywords.
pub fn calculate_ats_with_variance(
    resume_text: &str,
    job_description: &str,
    variance: f64,
) -> AtsScoreRecord {
    let resume_keywords = extract_keywords(resume_text);
    let job_keywords = extract_keywords(job_description);

    let classification = classify_keywords(&resume_keywords, &job_keywords);
    let keyword_match = classification.match_percentage();
    let overall_score = (keyword_match + variance).min(MAX_OVERALL_SCORE);

    let recommendations = generate_recommendations(
        overall_score,
        &classification.missing,
        &classification.matched,
    );

    let KeywordClassification {
        mut matched,
        mut missing,
    } = classification;
    matched.truncate(MAX_LISTED_KEYWORDS);
    missing.truncate(MAX_LISTED_KEYWORDS);

    AtsScoreRecord {
        overall_score: round2(overall_score),
        similarity_score: round2(overall_score - SIMILARITY_OFFSET),
        keyword_match: round2(keyword_match),
        matched_keywords: matched,
        missing_keywords: missing,
        recommendations,
        job_keywords: first_n(job_keywords, MAX_DIAGNOSTIC_KEYWORDS),
        resume_keywords: first_n(resume_keywords, MAX_DIAGNOSTIC_KEYWORDS),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn first_n(mut keywords: Vec<String>, n: usize) -> Vec<String> {
    keywords.truncate(n);
    keywords
}
