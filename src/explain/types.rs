use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// Title used when the model omits one.
pub const DEFAULT_TITLE: &str = "Restaurant Recommendations";

/// One restaurant picked and justified by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainedPick {
    pub restaurant_id: Option<String>,
    pub restaurant_name: String,
    /// 0-100 as reported by the model; not validated.
    pub match_score: Option<f64>,
    pub reason: String,
}

/// Parsed model output plus the raw text it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationExplanation {
    pub title: String,
    pub summary: String,
    pub recommendations: Vec<ExplainedPick>,
    #[serde(skip)]
    pub raw_response_text: String,
}

impl RecommendationExplanation {
    /// Plain-text rendering for display next to the ranked results.
    pub fn to_text(&self) -> String {
        let mut out = self.title.clone();
        if !self.summary.is_empty() {
            out.push_str("\n\n");
            out.push_str(&self.summary);
        }
        if !self.recommendations.is_empty() {
            out.push('\n');
        }
        for (i, pick) in self.recommendations.iter().enumerate() {
            let _ = write!(out, "\n{}. {}", i + 1, pick.restaurant_name);
            if let Some(score) = pick.match_score {
                let _ = write!(out, " (match {:.0})", score);
            }
            if !pick.reason.is_empty() {
                let _ = write!(out, ": {}", pick.reason);
            }
        }
        out
    }
}
