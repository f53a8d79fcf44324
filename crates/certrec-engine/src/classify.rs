//! Keyword-rule category prediction for new program names.

use std::collections::BTreeMap;

use certrec_config::{CategoryRule, ReconcilerConfig};
use certrec_model::{CategoryId, CategoryPrediction};

/// Ordered-rule classifier: the first category in rule order with any
/// matching keyword wins; ties across categories are resolved by list
/// position, never by specificity.
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    rules: Vec<CategoryRule>,
    ids: BTreeMap<String, CategoryId>,
}

impl CategoryClassifier {
    pub fn new(rules: Vec<CategoryRule>, ids: BTreeMap<String, CategoryId>) -> Self {
        Self { rules, ids }
    }

    pub fn from_config(config: &ReconcilerConfig) -> Self {
        Self::new(config.rules.clone(), config.categories.clone())
    }

    /// Predicts a category for a normalized (trimmed, lower-cased) name.
    ///
    /// No rule matching is not an error: the result is the
    /// [`certrec_model::UNCATEGORIZED`] sentinel with no id, which downstream
    /// script building filters out.
    pub fn classify(&self, normalized_name: &str) -> CategoryPrediction {
        for rule in &self.rules {
            let hit = rule
                .keywords
                .iter()
                .any(|keyword| contains_word(normalized_name, &keyword.to_lowercase()));
            if hit {
                return CategoryPrediction {
                    category: rule.category.clone(),
                    category_id: self.ids.get(&rule.category).copied(),
                };
            }
        }
        CategoryPrediction::uncategorized()
    }
}

/// Whole-word substring test: the match may not be flanked by word
/// characters (alphanumeric or `_`). Keywords themselves may contain
/// spaces or hyphens.
fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    for (start, matched) in haystack.match_indices(needle) {
        let end = start + matched.len();
        let boundary_before = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|ch| !is_word_char(ch));
        let boundary_after = haystack[end..]
            .chars()
            .next()
            .is_none_or(|ch| !is_word_char(ch));
        if boundary_before && boundary_after {
            return true;
        }
    }
    false
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(rules: &[(&str, &[&str])], ids: &[(&str, i64)]) -> CategoryClassifier {
        CategoryClassifier::new(
            rules
                .iter()
                .map(|(category, keywords)| CategoryRule {
                    category: (*category).to_string(),
                    keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
                })
                .collect(),
            ids.iter()
                .map(|(name, id)| ((*name).to_string(), CategoryId::new(*id)))
                .collect(),
        )
    }

    #[test]
    fn matches_whole_word_keyword() {
        let classifier = classifier(&[("IT", &["excel"])], &[("IT", 5)]);
        let prediction = classifier.classify("training microsoft excel level basic");
        assert_eq!(prediction.category, "IT");
        assert_eq!(prediction.category_id, Some(CategoryId::new(5)));
    }

    #[test]
    fn does_not_match_inside_a_word() {
        let classifier = classifier(&[("Accounting", &["cma"])], &[("Accounting", 2)]);
        assert_eq!(
            classifier.classify("training cmake for engineers").category,
            certrec_model::UNCATEGORIZED
        );
        assert_eq!(classifier.classify("training cma").category, "Accounting");
    }

    #[test]
    fn rule_order_decides_ties() {
        let rules = &[
            ("Management", &["bisnis"] as &[&str]),
            ("GenZ", &["genz", "bisnis"]),
        ];
        let classifier = classifier(rules, &[("Management", 4), ("GenZ", 14)]);
        // Both categories match; the earlier rule wins.
        assert_eq!(classifier.classify("genz bisnis pemula").category, "Management");
    }

    #[test]
    fn hyphenated_keywords_match() {
        let classifier = classifier(&[("GenZ", &["gen-z"])], &[("GenZ", 14)]);
        assert_eq!(
            classifier.classify("gen-z fashion design for beginner").category,
            "GenZ"
        );
    }

    #[test]
    fn unknown_category_id_yields_none() {
        let classifier = classifier(&[("Webinar", &["webinar"])], &[]);
        let prediction = classifier.classify("webinar nasional");
        assert_eq!(prediction.category, "Webinar");
        assert_eq!(prediction.category_id, None);
    }

    #[test]
    fn no_match_is_the_uncategorized_sentinel() {
        let classifier = classifier(&[("IT", &["excel"])], &[("IT", 5)]);
        let prediction = classifier.classify("makeup class ready set glow");
        assert_eq!(prediction.category, certrec_model::UNCATEGORIZED);
        assert_eq!(prediction.category_id, None);
    }

    #[test]
    fn is_deterministic() {
        let classifier = classifier(&[("IT", &["excel"])], &[("IT", 5)]);
        let name = "training microsoft excel level advance";
        assert_eq!(classifier.classify(name), classifier.classify(name));
    }
}
