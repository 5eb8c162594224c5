//! Content analysis - the final stage of the pipeline
//!
//! Case-sensitive substring search against a fixed keyword set. No stemming,
//! no normalization; "http" does not match "HTTP".

use newsstand_types::ContentReport;

/// Keywords the buyer looks for in purchased content
pub const ANALYSIS_KEYWORDS: [&str; 6] = ["AI", "代理", "402", "支付", "區塊鏈", "HTTP"];

/// Scan `content` and produce the keyword report
///
/// The matched list preserves keyword-set order, and the relevance score is
/// the matched fraction of the full set. Length is counted in characters
/// (Unicode scalar values), not bytes.
pub fn analyze(content: &str) -> ContentReport {
    let matched_keywords: Vec<String> = ANALYSIS_KEYWORDS
        .iter()
        .filter(|keyword| content.contains(**keyword))
        .map(|keyword| keyword.to_string())
        .collect();

    ContentReport {
        char_count: content.chars().count(),
        relevance: matched_keywords.len() as f64 / ANALYSIS_KEYWORDS.len() as f64,
        matched_keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_of_keyword_set_scores_half() {
        // 支付 appears before 代理; the report must still follow set order.
        let report = analyze("HTTP 支付協議的代理程式");

        assert_eq!(report.matched_keywords, vec!["代理", "支付", "HTTP"]);
        assert!((report.relevance - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let report = analyze("the http protocol");
        assert!(report.matched_keywords.is_empty());
        assert_eq!(report.relevance, 0.0);
    }

    #[test]
    fn test_char_count_is_scalar_values() {
        let report = analyze("AI 代理 402 支付");
        assert_eq!(report.char_count, 12);
        assert_eq!(report.matched_keywords, vec!["AI", "代理", "402", "支付"]);
        assert!((report.relevance - 4.0 / 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_content() {
        let report = analyze("");
        assert_eq!(report.char_count, 0);
        assert!(report.matched_keywords.is_empty());
        assert_eq!(report.relevance, 0.0);
    }
}
