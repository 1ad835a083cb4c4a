#![no_main]

// Harness: ability_can_named
// Strategy: feed arbitrary action/subject text; unknown names must come back as
// errors, never as a decision, and known names must agree with the typed path.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use warden_core::{
    ability::build_ability,
    subject::resolve_name,
    types::{Action, UserId},
    user::Claims,
};

#[derive(Arbitrary, Debug, Clone)]
struct NamedFrame {
    is_admin: Option<bool>,
    action: String,
    subject: String,
}

fuzz_target!(|frame: NamedFrame| {
    let claims = Claims { id: UserId(uuid::Uuid::nil()), is_admin: frame.is_admin };
    let ability = match build_ability(&claims) {
        Ok(ability) => ability,
        Err(_) => {
            assert!(frame.is_admin.is_none());
            return;
        }
    };

    let typed = match (frame.action.parse::<Action>(), resolve_name(&frame.subject)) {
        (Ok(action), Ok(subject)) => Some(ability.can(action, &subject)),
        _ => None,
    };
    assert_eq!(ability.can_named(&frame.action, &frame.subject).ok(), typed);
});
