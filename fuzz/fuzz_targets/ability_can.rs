#![no_main]

// Harness: ability_can
// Focus: admin totality, member narrowness, and `cannot == !can` on arbitrary
// principals and action tags.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use warden_core::{
    ability::build_ability,
    types::{Action, SubjectType, UserId},
    user::User,
};

#[derive(Arbitrary, Debug, Clone)]
struct DecisionFrame {
    principal_id: u128,
    is_admin: bool,
    action_tag: u8,
    // Selects the wildcard, `User`, or a foreign entity type.
    subject_selector: u8,
}

fuzz_target!(|frame: DecisionFrame| {
    let Ok(action) = Action::try_from(frame.action_tag) else {
        return;
    };
    let subject = match frame.subject_selector % 3 {
        0 => SubjectType::All,
        1 => SubjectType::USER,
        _ => SubjectType::Entity("Report"),
    };

    let principal = User {
        id: UserId(uuid::Uuid::from_u128(frame.principal_id)),
        name: String::new(),
        email: String::new(),
        is_admin: frame.is_admin,
    };
    let ability = match build_ability(&principal) {
        Ok(ability) => ability,
        Err(e) => panic!("well-formed principal rejected: {e}"),
    };

    let allowed = ability.can(action, &subject);
    assert_eq!(ability.cannot(action, &subject), !allowed);
    if frame.is_admin {
        assert!(allowed);
    } else {
        assert_eq!(allowed, action == Action::Read && subject == SubjectType::USER);
    }
});
