use crate::item::Item;
use crate::key::key_string;
use crate::model::Model;
use crate::vec_sets::split_out;
use itertools::Itertools;
use ordered_float::OrderedFloat;

#[derive(Clone, Debug)]
pub struct Rule {
    pub antecedent: Vec<Item>,
    pub consequent: Vec<Item>,
    pub confidence: f64,
    pub lift: f64,
    pub support: f64,
}

impl Rule {
    // Creates a new Rule from (antecedent,consequent) if every itemset it
    // needs is in the model and it clears both thresholds. Both sides must be
    // in canonical order.
    pub fn make(
        antecedent: Vec<Item>,
        consequent: Vec<Item>,
        itemset_count: u32,
        model: &Model,
        min_confidence: f64,
        min_lift: f64,
    ) -> Option<Rule> {
        if antecedent.is_empty() || consequent.is_empty() {
            return None;
        }

        let a_count = model.count_of(&antecedent)?;
        let confidence = itemset_count as f64 / a_count as f64;
        if confidence < min_confidence {
            return None;
        }

        let c_count = model.count_of(&consequent)?;
        let lift = itemset_count as f64 / (a_count as f64 * c_count as f64);
        if lift < min_lift {
            return None;
        }

        Some(Rule {
            antecedent,
            consequent,
            confidence,
            lift,
            support: itemset_count as f64 / model.total_transactions() as f64,
        })
    }

    pub fn to_string(&self, model: &Model) -> String {
        let itemizer = model.itemizer();
        [
            key_string(itemizer, &self.antecedent),
            key_string(itemizer, &self.consequent),
        ]
        .join(" => ")
    }
}

/// Splits every itemset of two or more items into each (antecedent,
/// consequent) pair and keeps the rules that clear both thresholds. Lift is
/// the model's raw-count lift. Rules come back ordered by confidence,
/// highest first.
pub fn generate_rules(model: &Model, min_confidence: f64, min_lift: f64) -> Vec<Rule> {
    let mut rules: Vec<Rule> = vec![];
    for (itemset, count) in model.itemsets_by_item().filter(|(i, _)| i.len() > 1) {
        for size in 1..itemset.len() {
            for antecedent in itemset.iter().cloned().combinations(size) {
                let consequent = split_out(itemset, &antecedent);
                if let Some(rule) =
                    Rule::make(antecedent, consequent, count, model, min_confidence, min_lift)
                {
                    rules.push(rule);
                }
            }
        }
    }
    rules.sort_by_key(|r| (OrderedFloat(-r.confidence), OrderedFloat(-r.lift)));
    rules
}

#[cfg(test)]
mod tests {
    use super::generate_rules;
    use crate::model::train;
    use crate::threshold::Threshold;

    fn census() -> Vec<Vec<&'static str>> {
        vec![
            vec!["a", "b", "c"],
            vec!["d", "b", "c"],
            vec!["a", "b", "e"],
            vec!["f", "g", "c"],
            vec!["d", "g", "e"],
            vec!["f", "b", "c"],
            vec!["f", "b", "c"],
            vec!["a", "b", "e"],
            vec!["a", "b", "c"],
            vec!["a", "b", "e"],
            vec!["a", "b", "e"],
        ]
    }

    #[test]
    fn test_generate_rules() {
        let model = train(&census(), Threshold::default());
        let rules = generate_rules(&model, 0.0, 0.0);

        let rendered: Vec<String> = rules.iter().map(|r| r.to_string(&model)).collect();
        assert!(rendered.contains(&"a => b".to_string()));
        assert!(rendered.contains(&"b => a".to_string()));
        assert!(rendered.contains(&"a b => e".to_string()));
        assert!(rendered.contains(&"e => a b".to_string()));

        let a_b = rules.iter().find(|r| r.to_string(&model) == "a => b").unwrap();
        assert_eq!(a_b.confidence, 1.0);
        assert_eq!(a_b.lift, 6.0 / (6.0 * 9.0));
        assert_eq!(a_b.support, 6.0 / 11.0);

        let b_a = rules.iter().find(|r| r.to_string(&model) == "b => a").unwrap();
        assert_eq!(b_a.confidence, 6.0 / 9.0);

        // Highest confidence first.
        for pair in rules.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn test_generate_rules_thresholds() {
        let model = train(&census(), Threshold::default());
        let rules = generate_rules(&model, 0.9, 0.0);
        assert!(!rules.is_empty());
        assert!(rules.iter().all(|r| r.confidence >= 0.9));
        let rendered: Vec<String> = rules.iter().map(|r| r.to_string(&model)).collect();
        assert!(rendered.contains(&"c g => f".to_string()));
        assert!(!rendered.contains(&"b => a".to_string()));

        let strict = generate_rules(&model, 0.0, 0.5);
        assert!(strict.iter().all(|r| r.lift >= 0.5));
        assert!(strict.len() < generate_rules(&model, 0.0, 0.0).len());
    }

    #[test]
    fn test_no_rules_from_singletons() {
        let model = train(&[vec!["a"], vec!["b"]], Threshold::default());
        assert!(generate_rules(&model, 0.0, 0.0).is_empty());
    }
}
