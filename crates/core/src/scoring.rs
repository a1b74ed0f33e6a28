//! The risk-scoring engine.
//!
//! Converts a set of questionnaire answers into four category-level maturity
//! percentages and one overall percentage. The function is pure and
//! deterministic: identical inputs always produce identical output, there is
//! no hidden state, no I/O, and no error path.
//!
//! Scoring is two-level by design: within a category, questions are weighted
//! by criticality (`weight * 100` points each); across categories, the
//! overall score is the unweighted mean of the four category percentages,
//! NOT a global points ratio.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identifies the scoring algorithm revision stamped into every result.
pub const METHOD_VERSION: &str = "v1.0";

/// The four scoring dimensions of the compliance questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Governance,
    RiskManagement,
    Incident,
    Suppliers,
}

impl Category {
    /// All categories, in the order they appear in a [`ScoreResult`].
    pub const ALL: [Category; 4] = [
        Category::Governance,
        Category::RiskManagement,
        Category::Incident,
        Category::Suppliers,
    ];

    /// Canonical snake_case name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Governance => "governance",
            Category::RiskManagement => "risk_management",
            Category::Incident => "incident",
            Category::Suppliers => "suppliers",
        }
    }
}

/// One of exactly three symbolic answer values.
///
/// Only `Yes` earns points; `No` and `Not Sure` are equivalent to no answer.
/// Values outside this enumeration are rejected by serde before they reach
/// the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
    #[serde(rename = "Not Sure")]
    NotSure,
}

/// A static catalog entry for one questionnaire question.
///
/// Defined by configuration, never by end users. `weight` is a positive
/// integer: 1 = standard, higher = more critical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDef {
    pub id: String,
    pub category: Category,
    pub weight: u32,
}

/// Derived maturity scores. Immutable once computed.
///
/// All five percentages are integers in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub governance_score: i32,
    pub risk_management_score: i32,
    pub incident_score: i32,
    pub suppliers_score: i32,
    pub overall_score: i32,
    pub method_version: String,
}

impl ScoreResult {
    /// The category percentage for `category`.
    pub fn category_score(&self, category: Category) -> i32 {
        match category {
            Category::Governance => self.governance_score,
            Category::RiskManagement => self.risk_management_score,
            Category::Incident => self.incident_score,
            Category::Suppliers => self.suppliers_score,
        }
    }
}

/// The built-in question catalog.
///
/// Callers should treat this as a default configuration value and pass it
/// (or a substitute) explicitly into [`calculate_risk_score`] — the engine
/// never reads ambient state.
pub fn default_catalog() -> Vec<QuestionDef> {
    fn q(id: &str, category: Category, weight: u32) -> QuestionDef {
        QuestionDef {
            id: id.to_string(),
            category,
            weight,
        }
    }

    vec![
        q("q_gov_1", Category::Governance, 3),
        q("q_gov_2", Category::Governance, 1),
        q("q_risk_1", Category::RiskManagement, 2),
        q("q_risk_2", Category::RiskManagement, 2),
        q("q_inc_1", Category::Incident, 3),
        q("q_inc_2", Category::Incident, 1),
        q("q_sup_1", Category::Suppliers, 2),
        q("q_sup_2", Category::Suppliers, 1),
    ]
}

/// Compute category and overall maturity scores for a set of answers.
///
/// Answers for ids not present in the catalog are ignored; catalog questions
/// with no answer earn zero points. A category with no questions scores 0
/// (never a division by zero). Rounding is half-up, applied independently to
/// each category percentage and then again to the overall mean.
pub fn calculate_risk_score(
    answers: &HashMap<String, Answer>,
    catalog: &[QuestionDef],
) -> ScoreResult {
    let mut earned: HashMap<Category, u64> = HashMap::new();
    let mut total: HashMap<Category, u64> = HashMap::new();

    for question in catalog {
        let max_points = u64::from(question.weight) * 100;
        let earned_points = match answers.get(&question.id) {
            Some(Answer::Yes) => max_points,
            _ => 0,
        };
        *earned.entry(question.category).or_default() += earned_points;
        *total.entry(question.category).or_default() += max_points;
    }

    let pct = |category: Category| -> i32 {
        let total = total.get(&category).copied().unwrap_or(0);
        if total == 0 {
            return 0;
        }
        let earned = earned.get(&category).copied().unwrap_or(0);
        ((earned as f64 / total as f64) * 100.0).round() as i32
    };

    let governance_score = pct(Category::Governance);
    let risk_management_score = pct(Category::RiskManagement);
    let incident_score = pct(Category::Incident);
    let suppliers_score = pct(Category::Suppliers);

    let overall_score = (f64::from(
        governance_score + risk_management_score + incident_score + suppliers_score,
    ) / 4.0)
        .round() as i32;

    ScoreResult {
        governance_score,
        risk_management_score,
        incident_score,
        suppliers_score,
        overall_score,
        method_version: METHOD_VERSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, Answer)]) -> HashMap<String, Answer> {
        pairs
            .iter()
            .map(|(id, a)| (id.to_string(), *a))
            .collect()
    }

    fn two_question_category(weight_a: u32, weight_b: u32) -> Vec<QuestionDef> {
        vec![
            QuestionDef {
                id: "a".into(),
                category: Category::Governance,
                weight: weight_a,
            },
            QuestionDef {
                id: "b".into(),
                category: Category::Governance,
                weight: weight_b,
            },
        ]
    }

    // -----------------------------------------------------------------------
    // Bounds
    // -----------------------------------------------------------------------

    #[test]
    fn all_scores_stay_within_bounds() {
        let catalog = default_catalog();
        let mixes: Vec<HashMap<String, Answer>> = vec![
            answers(&[]),
            answers(&[("q_gov_1", Answer::Yes)]),
            answers(&[("q_gov_1", Answer::Yes), ("q_inc_1", Answer::NotSure)]),
            catalog
                .iter()
                .map(|q| (q.id.clone(), Answer::Yes))
                .collect(),
        ];

        for answers in &mixes {
            let result = calculate_risk_score(answers, &catalog);
            for category in Category::ALL {
                let score = result.category_score(category);
                assert!((0..=100).contains(&score), "{category:?} out of bounds");
            }
            assert!((0..=100).contains(&result.overall_score));
        }
    }

    // -----------------------------------------------------------------------
    // All-yes / all-non-yes extremes
    // -----------------------------------------------------------------------

    #[test]
    fn all_yes_scores_100_everywhere() {
        let catalog = default_catalog();
        let answers: HashMap<String, Answer> = catalog
            .iter()
            .map(|q| (q.id.clone(), Answer::Yes))
            .collect();

        let result = calculate_risk_score(&answers, &catalog);
        for category in Category::ALL {
            assert_eq!(result.category_score(category), 100);
        }
        assert_eq!(result.overall_score, 100);
    }

    #[test]
    fn no_yes_answers_score_zero_overall() {
        let catalog = default_catalog();

        // A mix of No, Not Sure, and entirely absent answers.
        let answers = answers(&[
            ("q_gov_1", Answer::No),
            ("q_risk_1", Answer::NotSure),
            ("q_inc_2", Answer::No),
        ]);

        let result = calculate_risk_score(&answers, &catalog);
        assert_eq!(result.overall_score, 0);
        for category in Category::ALL {
            assert_eq!(result.category_score(category), 0);
        }
    }

    #[test]
    fn empty_answer_map_scores_zero() {
        let result = calculate_risk_score(&HashMap::new(), &default_catalog());
        assert_eq!(result.overall_score, 0);
    }

    // -----------------------------------------------------------------------
    // Weighting within a category
    // -----------------------------------------------------------------------

    #[test]
    fn weight_3_of_4_yields_75() {
        let catalog = two_question_category(3, 1);
        let result = calculate_risk_score(&answers(&[("a", Answer::Yes)]), &catalog);
        assert_eq!(result.governance_score, 75);
    }

    #[test]
    fn weight_1_of_4_yields_25() {
        let catalog = two_question_category(3, 1);
        let result = calculate_risk_score(&answers(&[("b", Answer::Yes)]), &catalog);
        assert_eq!(result.governance_score, 25);
    }

    // -----------------------------------------------------------------------
    // Empty catalog / empty category
    // -----------------------------------------------------------------------

    #[test]
    fn category_without_questions_scores_zero() {
        // Catalog only covers governance; the other three categories have
        // zero total points and must score 0 without dividing by zero.
        let catalog = two_question_category(1, 1);
        let answers: HashMap<String, Answer> = catalog
            .iter()
            .map(|q| (q.id.clone(), Answer::Yes))
            .collect();

        let result = calculate_risk_score(&answers, &catalog);
        assert_eq!(result.governance_score, 100);
        assert_eq!(result.risk_management_score, 0);
        assert_eq!(result.incident_score, 0);
        assert_eq!(result.suppliers_score, 0);
        assert_eq!(result.overall_score, 25);
    }

    #[test]
    fn empty_catalog_scores_zero() {
        let result = calculate_risk_score(&answers(&[("q_gov_1", Answer::Yes)]), &[]);
        assert_eq!(result.overall_score, 0);
    }

    #[test]
    fn answers_for_unknown_ids_are_ignored() {
        let catalog = default_catalog();
        let with_unknown = answers(&[("q_gov_1", Answer::Yes), ("q_ghost_9", Answer::Yes)]);
        let without = answers(&[("q_gov_1", Answer::Yes)]);

        assert_eq!(
            calculate_risk_score(&with_unknown, &catalog),
            calculate_risk_score(&without, &catalog),
        );
    }

    // -----------------------------------------------------------------------
    // Determinism
    // -----------------------------------------------------------------------

    #[test]
    fn identical_inputs_produce_identical_output() {
        let catalog = default_catalog();
        let answers = answers(&[
            ("q_gov_1", Answer::Yes),
            ("q_risk_2", Answer::No),
            ("q_sup_1", Answer::Yes),
        ]);

        let first = calculate_risk_score(&answers, &catalog);
        let second = calculate_risk_score(&answers, &catalog);
        assert_eq!(first, second);
    }

    // -----------------------------------------------------------------------
    // End-to-end reference scenario against the built-in catalog
    // -----------------------------------------------------------------------

    #[test]
    fn reference_scenario_against_default_catalog() {
        let answers = answers(&[
            ("q_gov_1", Answer::Yes),
            ("q_gov_2", Answer::No),
            ("q_risk_1", Answer::Yes),
            ("q_risk_2", Answer::No),
            ("q_inc_1", Answer::No),
            ("q_inc_2", Answer::No),
            ("q_sup_1", Answer::No),
            ("q_sup_2", Answer::No),
        ]);

        let result = calculate_risk_score(&answers, &default_catalog());
        assert_eq!(result.governance_score, 75); // 300 of 400 points
        assert_eq!(result.risk_management_score, 50); // 200 of 400 points
        assert_eq!(result.incident_score, 0);
        assert_eq!(result.suppliers_score, 0);
        assert_eq!(result.overall_score, 31); // round((75+50+0+0)/4)
        assert_eq!(result.method_version, METHOD_VERSION);
    }

    #[test]
    fn overall_rounds_half_up() {
        // Governance 50, other categories empty: 50/4 = 12.5 -> 13.
        let catalog = two_question_category(1, 1);
        let result = calculate_risk_score(&answers(&[("a", Answer::Yes)]), &catalog);
        assert_eq!(result.governance_score, 50);
        assert_eq!(result.overall_score, 13);
    }

    // -----------------------------------------------------------------------
    // Serde forms
    // -----------------------------------------------------------------------

    #[test]
    fn answer_serde_uses_questionnaire_labels() {
        assert_eq!(serde_json::to_string(&Answer::Yes).unwrap(), "\"Yes\"");
        assert_eq!(serde_json::to_string(&Answer::No).unwrap(), "\"No\"");
        assert_eq!(
            serde_json::to_string(&Answer::NotSure).unwrap(),
            "\"Not Sure\""
        );

        let parsed: Answer = serde_json::from_str("\"Not Sure\"").unwrap();
        assert_eq!(parsed, Answer::NotSure);
    }

    #[test]
    fn malformed_answer_value_is_rejected_by_serde() {
        let result: Result<Answer, _> = serde_json::from_str("\"Maybe\"");
        assert!(result.is_err());
    }

    #[test]
    fn category_serde_is_snake_case() {
        assert_eq!(
            serde_json::to_string(&Category::RiskManagement).unwrap(),
            "\"risk_management\""
        );
    }
}
