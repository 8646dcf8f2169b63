//! Recommendation rules. Every rule that applies appends its message, in table order.

pub const LOW_MATCH: &str = "🔴 Low match score. Consider significant resume improvements.";
pub const MODERATE_MATCH: &str = "🟡 Moderate match. Some improvements needed.";
pub const GOOD_MATCH: &str = "🟢 Good match! Your resume aligns well with the job.";
pub const EXCELLENT_MATCH: &str = "🌟 Excellent match! You're a strong candidate for this role.";

const MISSING_TERMS_PREFIX: &str = "📝 Add these key terms: ";
const MATCHED_SKILLS_PREFIX: &str = "✅ Great! You have these relevant skills: ";

const TACTICAL_TIPS: &[&str] = &[
    "💡 Use exact keywords from the job description",
    "📊 Quantify your achievements with numbers",
    "🎯 Tailor your resume for this specific role",
];

const LOW_SCORE_TIPS: &[&str] = &[
    "📋 Include relevant certifications and skills",
    "🔄 Reorganize your resume to highlight matching experience",
];

const MISSING_TERMS_SHOWN: usize = 5;
const MATCHED_SKILLS_SHOWN: usize = 3;

/// Builds the ordered recommendation list for a score and its keyword classification.
pub fn generate_recommendations(
    score: f64,
    missing_keywords: &[String],
    matched_keywords: &[String],
) -> Vec<String> {
    let mut recommendations = Vec::new();

    let band = if score < 30.0 {
        LOW_MATCH
    } else if score < 60.0 {
        MODERATE_MATCH
    } else if score < 80.0 {
        GOOD_MATCH
    } else {
        EXCELLENT_MATCH
    };
    recommendations.push(band.to_string());

    if !missing_keywords.is_empty() {
        recommendations.push(format!(
            "{MISSING_TERMS_PREFIX}{}",
            join_first(missing_keywords, MISSING_TERMS_SHOWN)
        ));
    }

    if !matched_keywords.is_empty() {
        recommendations.push(format!(
            "{MATCHED_SKILLS_PREFIX}{}",
            join_first(matched_keywords, MATCHED_SKILLS_SHOWN)
        ));
    }

    if score < 70.0 {
        recommendations.extend(TACTICAL_TIPS.iter().map(|tip| tip.to_string()));
    }

    if score < 50.0 {
        recommendations.extend(LOW_SCORE_TIPS.iter().map(|tip| tip.to_string()));
    }

    recommendations
}

fn join_first(keywords: &[String], n: usize) -> String {
    keywords
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
