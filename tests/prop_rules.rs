use proptest::prelude::*;
use warden_core::rules::{self, Rule, RuleSet};
use warden_core::types::{Action, SubjectType};

fn any_action() -> impl Strategy<Value = Action> {
    (0u8..5).prop_map(|tag| Action::try_from(tag).unwrap())
}

fn any_subject() -> impl Strategy<Value = SubjectType> {
    prop_oneof![
        Just(SubjectType::All),
        Just(SubjectType::USER),
        Just(SubjectType::Entity("Report")),
    ]
}

fn any_rule() -> impl Strategy<Value = Rule> {
    (any_action(), any_subject()).prop_map(|(action, subject)| Rule::new(action, subject))
}

proptest! {
    /// A set allows iff some single rule in it allows.
    #[test]
    fn prop_matches_is_existential(
        rules in prop::collection::vec(any_rule(), 0..8),
        action in any_action(),
        subject in any_subject(),
    ) {
        let set: RuleSet = rules.iter().copied().collect();
        let any_single = rules.iter().any(|r| {
            let single: RuleSet = std::iter::once(*r).collect();
            rules::matches(&single, action, subject)
        });
        prop_assert_eq!(rules::matches(&set, action, subject), any_single);
    }

    /// Reordering rules never changes a decision.
    #[test]
    fn prop_order_irrelevant(
        rules in prop::collection::vec(any_rule(), 0..8),
        action in any_action(),
        subject in any_subject(),
    ) {
        let forward: RuleSet = rules.iter().copied().collect();
        let backward: RuleSet = rules.iter().rev().copied().collect();
        prop_assert_eq!(
            rules::matches(&forward, action, subject),
            rules::matches(&backward, action, subject)
        );
    }

    /// Adding a rule can only widen what is allowed.
    #[test]
    fn prop_adding_rule_is_monotonic(
        rules in prop::collection::vec(any_rule(), 0..8),
        extra in any_rule(),
        action in any_action(),
        subject in any_subject(),
    ) {
        let before: RuleSet = rules.iter().copied().collect();
        let mut after = before.clone();
        after.push(extra);
        if rules::matches(&before, action, subject) {
            prop_assert!(rules::matches(&after, action, subject));
        }
    }

    /// The full-access rule matches every request.
    #[test]
    fn prop_manage_all_matches_everything(action in any_action(), subject in any_subject()) {
        prop_assert!(Rule::new(Action::Manage, SubjectType::All).matches(action, subject));
    }
}
