use proptest::prelude::*;
use warden_core::ability::{build_ability, rules_for_role};
use warden_core::types::{Action, Role, SubjectType, UserId};
use warden_core::user::User;

const SUBJECT_NAMES: [&str; 4] = ["User", "Report", "Invoice", "Order"];

fn any_action() -> impl Strategy<Value = Action> {
    prop::sample::select(Action::ALL.to_vec())
}

fn any_subject() -> impl Strategy<Value = SubjectType> {
    prop_oneof![
        Just(SubjectType::All),
        prop::sample::select(SUBJECT_NAMES.to_vec()).prop_map(SubjectType::Entity),
    ]
}

fn any_user() -> impl Strategy<Value = User> {
    (any::<u128>(), any::<bool>(), "[a-z]{1,8}").prop_map(|(id, is_admin, name)| User {
        id: UserId(uuid::Uuid::from_u128(id)),
        email: format!("{}@example.com", name),
        name,
        is_admin,
    })
}

proptest! {
    /// Administrators are allowed every action on every subject.
    #[test]
    fn prop_admin_can_everything(
        mut user in any_user(),
        action in any_action(),
        subject in any_subject(),
    ) {
        user.is_admin = true;
        let ability = build_ability(&user).unwrap();
        prop_assert!(ability.can(action, &subject));
    }

    /// Non-admins are allowed exactly `read` on `User`.
    #[test]
    fn prop_member_only_reads_users(
        mut user in any_user(),
        action in any_action(),
        subject in any_subject(),
    ) {
        user.is_admin = false;
        let ability = build_ability(&user).unwrap();
        let expected = action == Action::Read && subject == SubjectType::USER;
        prop_assert_eq!(ability.can(action, &subject), expected);
    }

    /// `cannot` never diverges from `!can`.
    #[test]
    fn prop_cannot_is_strict_complement(
        user in any_user(),
        action in any_action(),
        subject in any_subject(),
    ) {
        let ability = build_ability(&user).unwrap();
        prop_assert_eq!(ability.cannot(action, &subject), !ability.can(action, &subject));
    }

    /// Building twice for the same principal answers identically.
    #[test]
    fn prop_build_is_deterministic(
        user in any_user(),
        action in any_action(),
        subject in any_subject(),
    ) {
        let first = build_ability(&user).unwrap();
        let second = build_ability(&user).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.can(action, &subject), second.can(action, &subject));
    }

    /// Every user instance is checked as `User`, whatever its fields.
    #[test]
    fn prop_user_instances_share_subject_type(
        a in any_user(),
        b in any_user(),
        action in any_action(),
    ) {
        let ability = build_ability(&a).unwrap();
        prop_assert_eq!(ability.can(action, &b), ability.can(action, &SubjectType::USER));
    }

    /// The rule set depends on the role alone.
    #[test]
    fn prop_rules_depend_only_on_role(user in any_user()) {
        let ability = build_ability(&user).unwrap();
        let role = if user.is_admin { Role::Admin } else { Role::Member };
        prop_assert_eq!(ability.rules(), &rules_for_role(role));
    }
}
