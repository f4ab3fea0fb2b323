//! Rule composition for lexicographic ranking.

use std::cmp::Ordering;

/// A ranking key that assigns a priority value to an item.
///
/// Rules return `f64` keys where **lower is better**. A rule that prefers
/// larger values returns the negated value.
pub trait PriorityRule<T>: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes the key for the given item. Lower keys rank first.
    fn key(&self, item: &T) -> f64;
}

/// Engine applying rules in order; a later rule is only consulted when
/// every earlier rule ties exactly.
///
/// Items tied on every rule keep their input order.
///
/// # Examples
///
/// ```
/// use u_scoring::ranking::{PriorityRule, RuleEngine};
///
/// struct LargerFirst;
/// impl PriorityRule<u32> for LargerFirst {
///     fn name(&self) -> &str { "LargerFirst" }
///     fn key(&self, item: &u32) -> f64 { -(*item as f64) }
/// }
///
/// let engine = RuleEngine::new().with_rule(LargerFirst);
/// assert_eq!(engine.sort_indices(&[3, 7, 5]), vec![1, 2, 0]);
/// ```
pub struct RuleEngine<T> {
    rules: Vec<Box<dyn PriorityRule<T>>>,
}

impl<T> RuleEngine<T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule; rules added later only break earlier ties.
    pub fn with_rule<R: PriorityRule<T> + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the key vector of one item.
    pub fn keys(&self, item: &T) -> Vec<f64> {
        self.rules.iter().map(|r| r.key(item)).collect()
    }

    /// Sorts items by priority and returns indices into the original slice.
    pub fn sort_indices(&self, items: &[T]) -> Vec<usize> {
        let keys: Vec<Vec<f64>> = items.iter().map(|item| self.keys(item)).collect();
        let mut indices: Vec<usize> = (0..items.len()).collect();
        // `sort_by` is stable: full ties keep input order.
        indices.sort_by(|&a, &b| compare_keys(&keys[a], &keys[b]));
        indices
    }
}

impl<T> Default for RuleEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Compares two key vectors rule by rule.
fn compare_keys(a: &[f64], b: &[f64]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(va, vb)| va.partial_cmp(vb).unwrap_or(Ordering::Equal))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Item {
        value: f64,
        weight: f64,
    }

    struct ByValue;
    impl PriorityRule<Item> for ByValue {
        fn name(&self) -> &str {
            "ByValue"
        }
        fn key(&self, item: &Item) -> f64 {
            item.value
        }
    }

    struct HeavierFirst;
    impl PriorityRule<Item> for HeavierFirst {
        fn name(&self) -> &str {
            "HeavierFirst"
        }
        fn key(&self, item: &Item) -> f64 {
            -item.weight
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { value: 3.0, weight: 1.0 },
            Item { value: 1.0, weight: 2.0 },
            Item { value: 2.0, weight: 1.0 },
            Item { value: 1.0, weight: 3.0 },
        ]
    }

    #[test]
    fn test_single_rule_sort() {
        let engine = RuleEngine::new().with_rule(ByValue);
        assert_eq!(engine.sort_indices(&items()), vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_second_rule_breaks_ties() {
        let engine = RuleEngine::new().with_rule(ByValue).with_rule(HeavierFirst);
        // Items 1 and 3 tie on value; the heavier one comes first.
        assert_eq!(engine.sort_indices(&items()), vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let tied = vec![Item { value: 1.0, weight: 1.0 }; 4];
        let engine = RuleEngine::new().with_rule(ByValue).with_rule(HeavierFirst);
        assert_eq!(engine.sort_indices(&tied), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_no_rules_preserves_order() {
        let engine = RuleEngine::<Item>::new();
        assert_eq!(engine.sort_indices(&items()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_keys_compared_exactly() {
        let close = vec![
            Item { value: 1.0 + 1e-12, weight: 5.0 },
            Item { value: 1.0, weight: 1.0 },
        ];
        let engine = RuleEngine::new().with_rule(ByValue).with_rule(HeavierFirst);
        assert_eq!(engine.sort_indices(&close), vec![1, 0]);
    }

    #[test]
    fn test_rule_names() {
        let engine = RuleEngine::<Item>::new()
            .with_rule(ByValue)
            .with_rule(HeavierFirst);
        assert_eq!(engine.rule_names(), vec!["ByValue", "HeavierFirst"]);
    }
}
