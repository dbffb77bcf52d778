//! Scoring and grading.
//!
//! Reduces an [`AnalysisResult`] to a quality score from 0 to 100 (higher is
//! better) by subtracting fixed penalties from 100.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analyzer::AnalysisResult;

/// Points deducted per penalty tier.
pub mod penalties {
    pub const CYCLOMATIC_SEVERE: i32 = 20; // > 15
    pub const CYCLOMATIC_HIGH: i32 = 10; // > 10
    pub const CYCLOMATIC_MODERATE: i32 = 5; // > 5

    pub const COMMENTS_SPARSE: i32 = 10; // ratio < 0.1
    pub const COMMENTS_LOW: i32 = 5; // ratio < 0.4

    pub const NESTING_SEVERE: i32 = 15; // > 5
    pub const NESTING_HIGH: i32 = 8; // > 3
    pub const NESTING_MODERATE: i32 = 3; // > 1

    pub const PER_ISSUE: i32 = 3;
}

/// Default minimum score when no threshold is configured.
pub const DEFAULT_THRESHOLD: i32 = 60;

/// Grade thresholds (minimum score for each grade).
pub mod grades {
    pub const A_MIN: i32 = 90;
    pub const B_MIN: i32 = 80;
    pub const C_MIN: i32 = 70;
    pub const D_MIN: i32 = 60;
}

/// A graded quality score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityScore {
    /// Score from 0-100, higher = better
    pub score: i32,
    /// Letter grade: "A" (90+), "B" (80+), "C" (70+), "D" (60+), "F"
    pub grade: String,
    /// Points deducted by category
    pub breakdown: BTreeMap<String, i32>,
    /// Whether the score reached the threshold
    pub passed: bool,
    pub threshold: i32,
}

impl QualityScore {
    /// Score `result` and grade it against `threshold`.
    pub fn evaluate(result: &AnalysisResult, threshold: i32) -> Self {
        let breakdown = penalty_breakdown(result);
        let score = score_from_breakdown(&breakdown);

        Self {
            score,
            grade: calculate_grade(score),
            breakdown,
            passed: score >= threshold,
            threshold,
        }
    }

    /// Total points deducted before clamping.
    pub fn total_penalty(&self) -> i32 {
        self.breakdown.values().sum()
    }
}

fn cyclomatic_penalty(cyclomatic: usize) -> i32 {
    match cyclomatic {
        c if c > 15 => penalties::CYCLOMATIC_SEVERE,
        c if c > 10 => penalties::CYCLOMATIC_HIGH,
        c if c > 5 => penalties::CYCLOMATIC_MODERATE,
        _ => 0,
    }
}

fn comment_penalty(ratio: f64) -> i32 {
    if ratio < 0.1 {
        penalties::COMMENTS_SPARSE
    } else if ratio < 0.4 {
        penalties::COMMENTS_LOW
    } else {
        0
    }
}

fn nesting_penalty(nesting: usize) -> i32 {
    match nesting {
        n if n > 5 => penalties::NESTING_SEVERE,
        n if n > 3 => penalties::NESTING_HIGH,
        n if n > 1 => penalties::NESTING_MODERATE,
        _ => 0,
    }
}

fn penalty_breakdown(result: &AnalysisResult) -> BTreeMap<String, i32> {
    let issues = i32::try_from(result.potential_issues.len()).unwrap_or(i32::MAX);

    let mut breakdown = BTreeMap::new();
    breakdown.insert(
        "complexity".to_string(),
        cyclomatic_penalty(result.cyclomatic_complexity),
    );
    breakdown.insert("comments".to_string(), comment_penalty(result.comment_ratio));
    breakdown.insert("nesting".to_string(), nesting_penalty(result.nesting_length));
    breakdown.insert(
        "issues".to_string(),
        issues.saturating_mul(penalties::PER_ISSUE),
    );
    breakdown
}

fn score_from_breakdown(breakdown: &BTreeMap<String, i32>) -> i32 {
    let total = breakdown
        .values()
        .fold(0i32, |acc, points| acc.saturating_add(*points));
    100i32.saturating_sub(total).clamp(0, 100)
}

/// Determine the letter grade from a score.
fn calculate_grade(score: i32) -> String {
    match score {
        s if s >= grades::A_MIN => "A".to_string(),
        s if s >= grades::B_MIN => "B".to_string(),
        s if s >= grades::C_MIN => "C".to_string(),
        s if s >= grades::D_MIN => "D".to_string(),
        _ => "F".to_string(),
    }
}

/// Calculate the quality score of an analysis result, in `[0, 100]`.
pub fn calculate_quality(result: &AnalysisResult) -> i32 {
    score_from_breakdown(&penalty_breakdown(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(cyclomatic: usize, ratio: f64, nesting: usize, issues: usize) -> AnalysisResult {
        AnalysisResult {
            line_count: 10,
            comment_count: 0,
            comment_ratio: ratio,
            nesting_length: nesting,
            cyclomatic_complexity: cyclomatic,
            token_frequency: BTreeMap::new(),
            potential_issues: vec!["issue".to_string(); issues],
            suggestions: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    #[test]
    fn test_perfect_score() {
        assert_eq!(calculate_quality(&make_result(1, 0.5, 0, 0)), 100);
        assert_eq!(calculate_quality(&make_result(5, 0.4, 1, 0)), 100);
    }

    #[test]
    fn test_penalty_tiers() {
        assert_eq!(calculate_quality(&make_result(6, 0.5, 0, 0)), 95);
        assert_eq!(calculate_quality(&make_result(11, 0.5, 0, 0)), 90);
        assert_eq!(calculate_quality(&make_result(16, 0.5, 0, 0)), 80);

        assert_eq!(calculate_quality(&make_result(1, 0.39, 0, 0)), 95);
        assert_eq!(calculate_quality(&make_result(1, 0.0, 0, 0)), 90);

        assert_eq!(calculate_quality(&make_result(1, 0.5, 2, 0)), 97);
        assert_eq!(calculate_quality(&make_result(1, 0.5, 4, 0)), 92);
        assert_eq!(calculate_quality(&make_result(1, 0.5, 6, 0)), 85);

        assert_eq!(calculate_quality(&make_result(1, 0.5, 0, 2)), 94);
    }

    #[test]
    fn test_score_clamped_at_zero() {
        let result = make_result(20, 0.0, 9, 30);
        assert_eq!(calculate_quality(&result), 0);

        let quality = QualityScore::evaluate(&result, DEFAULT_THRESHOLD);
        assert_eq!(quality.score, 0);
        assert_eq!(quality.grade, "F");
        assert_eq!(quality.total_penalty(), 20 + 10 + 15 + 90);
    }

    #[test]
    fn test_score_is_monotonic() {
        let base = calculate_quality(&make_result(3, 0.5, 1, 0));
        assert!(calculate_quality(&make_result(12, 0.5, 1, 0)) <= base);
        assert!(calculate_quality(&make_result(3, 0.05, 1, 0)) <= base);
        assert!(calculate_quality(&make_result(3, 0.5, 4, 0)) <= base);
        assert!(calculate_quality(&make_result(3, 0.5, 1, 1)) <= base);

        let mut previous = 100;
        for issues in 0..50 {
            let score = calculate_quality(&make_result(3, 0.5, 1, issues));
            assert!(score <= previous);
            assert!((0..=100).contains(&score));
            previous = score;
        }
    }

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(calculate_grade(100), "A");
        assert_eq!(calculate_grade(90), "A");
        assert_eq!(calculate_grade(89), "B");
        assert_eq!(calculate_grade(80), "B");
        assert_eq!(calculate_grade(79), "C");
        assert_eq!(calculate_grade(70), "C");
        assert_eq!(calculate_grade(69), "D");
        assert_eq!(calculate_grade(60), "D");
        assert_eq!(calculate_grade(59), "F");
        assert_eq!(calculate_grade(0), "F");
    }

    #[test]
    fn test_evaluate_breakdown_and_threshold() {
        let result = make_result(11, 0.2, 2, 1);
        let quality = QualityScore::evaluate(&result, 80);

        assert_eq!(quality.breakdown.get("complexity"), Some(&10));
        assert_eq!(quality.breakdown.get("comments"), Some(&5));
        assert_eq!(quality.breakdown.get("nesting"), Some(&3));
        assert_eq!(quality.breakdown.get("issues"), Some(&3));
        assert_eq!(quality.score, 79);
        assert_eq!(quality.grade, "C");
        assert!(!quality.passed);

        assert!(QualityScore::evaluate(&result, 79).passed);
    }
}
