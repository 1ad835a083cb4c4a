//!
//! Guarded user operations.
//!
//! Every handler follows the same order: define the caller's ability, check the
//! requested action against it, and only then touch the store. A denied check
//! returns `PolicyError::Forbidden` and leaves the store unchanged.

use crate::ability::{Ability, AbilityFactory, Principal};
use crate::error::PolicyError;
use crate::types::{Action, SubjectType, UserId};
use crate::user::entity::{CreateUserDto, UpdateUserDto, User};
use crate::user::service::UserService;

/// Denial message for write operations on users.
pub const ADMIN_ONLY: &str = "only admin!!";

#[derive(Debug, Clone, Default)]
pub struct UserController {
    service: UserService,
    abilities: AbilityFactory,
}

impl UserController {
    pub fn new(service: UserService) -> Self {
        UserController {
            service,
            abilities: AbilityFactory::new(),
        }
    }

    pub fn service(&self) -> &UserService {
        &self.service
    }

    pub fn create<P: Principal + ?Sized>(
        &mut self,
        principal: &P,
        dto: CreateUserDto,
    ) -> Result<User, PolicyError> {
        let ability = self.abilities.define_ability(principal)?;
        if ability.cannot(Action::Create, &SubjectType::USER) {
            tracing::warn!(principal = %principal.id(), "Create user denied");
            return Err(PolicyError::forbidden(ADMIN_ONLY, Action::Create, SubjectType::USER));
        }
        dto.validate()?;
        let user = self.service.create(dto);
        tracing::debug!(principal = %principal.id(), user = %user.id, "Created user");
        Ok(user)
    }

    pub fn find_all<P: Principal + ?Sized>(
        &self,
        principal: &P,
    ) -> Result<Vec<User>, PolicyError> {
        let ability = self.abilities.define_ability(principal)?;
        ability.check(Action::Read, &SubjectType::USER, PolicyError::DEFAULT_FORBIDDEN)?;
        Ok(self.service.find_all().to_vec())
    }

    pub fn find_one<P: Principal + ?Sized>(
        &self,
        principal: &P,
        id: UserId,
    ) -> Result<User, PolicyError> {
        let ability = self.abilities.define_ability(principal)?;
        ability.check(Action::Read, &SubjectType::USER, PolicyError::DEFAULT_FORBIDDEN)?;
        let user = self.service.find_one(id).ok_or(PolicyError::NotFound(id))?;
        ability.check(Action::Read, user, PolicyError::DEFAULT_FORBIDDEN)?;
        Ok(user.clone())
    }

    pub fn update<P: Principal + ?Sized>(
        &mut self,
        principal: &P,
        id: UserId,
        dto: UpdateUserDto,
    ) -> Result<User, PolicyError> {
        let ability = self.abilities.define_ability(principal)?;
        self.guard_write(&ability, principal, Action::Update, id)?;
        dto.validate()?;
        self.service.update(id, &dto).ok_or(PolicyError::NotFound(id))
    }

    pub fn remove<P: Principal + ?Sized>(
        &mut self,
        principal: &P,
        id: UserId,
    ) -> Result<User, PolicyError> {
        let ability = self.abilities.define_ability(principal)?;
        self.guard_write(&ability, principal, Action::Delete, id)?;
        self.service.remove(id).ok_or(PolicyError::NotFound(id))
    }

    // Type-level check precedes the lookup: without the grant, unknown and
    // existing ids are both denied. The instance-level check follows the lookup.
    fn guard_write<P: Principal + ?Sized>(
        &self,
        ability: &Ability,
        principal: &P,
        action: Action,
        id: UserId,
    ) -> Result<(), PolicyError> {
        let checked = ability
            .check(action, &SubjectType::USER, ADMIN_ONLY)
            .and_then(|()| {
                let target = self.service.find_one(id).ok_or(PolicyError::NotFound(id))?;
                ability.check(action, target, ADMIN_ONLY)
            });
        if let Err(err) = &checked {
            if err.is_denial() {
                tracing::warn!(
                    principal = %principal.id(),
                    user = %id,
                    %action,
                    "User write denied"
                );
            }
        }
        checked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AbilityError;
    use crate::user::entity::Claims;

    fn principal(is_admin: bool) -> User {
        User {
            id: UserId::new_v4(),
            name: if is_admin { "root".into() } else { "guest".into() },
            email: "someone@example.com".into(),
            is_admin,
        }
    }

    fn new_user() -> CreateUserDto {
        CreateUserDto { name: "Ada".into(), email: "ada@example.com".into(), is_admin: false }
    }

    #[test]
    fn test_admin_creates_user() {
        let mut controller = UserController::default();
        let created = controller.create(&principal(true), new_user()).unwrap();
        assert_eq!(created.name, "Ada");
        assert_eq!(controller.service().len(), 1);
    }

    #[test]
    fn test_member_create_is_forbidden_and_store_untouched() {
        let mut controller = UserController::default();
        let err = controller.create(&principal(false), new_user()).unwrap_err();
        assert_eq!(err, PolicyError::forbidden(ADMIN_ONLY, Action::Create, SubjectType::USER));
        assert_eq!(err.to_string(), "only admin!!");
        assert!(controller.service().is_empty());
    }

    #[test]
    fn test_denial_is_reported_before_validation() {
        let mut controller = UserController::default();
        let bad = CreateUserDto { name: String::new(), ..new_user() };
        assert!(controller.create(&principal(false), bad.clone()).unwrap_err().is_denial());
        assert!(matches!(controller.create(&principal(true), bad), Err(PolicyError::Invalid(_))));
    }

    #[test]
    fn test_member_reads_but_cannot_write() {
        let mut controller = UserController::default();
        let admin = principal(true);
        let member = principal(false);
        let ada = controller.create(&admin, new_user()).unwrap();

        assert_eq!(controller.find_all(&member).unwrap(), vec![ada.clone()]);
        assert_eq!(controller.find_one(&member, ada.id).unwrap(), ada);

        let patch = UpdateUserDto { name: Some("Augusta".into()), ..Default::default() };
        assert!(controller.update(&member, ada.id, patch.clone()).unwrap_err().is_denial());
        assert!(controller.remove(&member, ada.id).unwrap_err().is_denial());
        assert_eq!(controller.find_one(&admin, ada.id).unwrap().name, "Ada");

        assert_eq!(controller.update(&admin, ada.id, patch).unwrap().name, "Augusta");
        assert_eq!(controller.remove(&admin, ada.id).unwrap().id, ada.id);
        assert!(controller.service().is_empty());
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut controller = UserController::default();
        let admin = principal(true);
        let missing = UserId::new_v4();
        let not_found = Err(PolicyError::NotFound(missing));
        assert_eq!(controller.find_one(&admin, missing), not_found);
        assert_eq!(controller.update(&admin, missing, UpdateUserDto::default()), not_found);
        assert_eq!(controller.remove(&admin, missing), not_found);
    }

    #[test]
    fn test_member_write_on_unknown_id_is_denied_not_missing() {
        let mut controller = UserController::default();
        let member = principal(false);
        let missing = UserId::new_v4();

        let err = controller.update(&member, missing, UpdateUserDto::default()).unwrap_err();
        assert_eq!(err, PolicyError::forbidden(ADMIN_ONLY, Action::Update, SubjectType::USER));
        assert_eq!(err.status_code(), 403);

        let err = controller.remove(&member, missing).unwrap_err();
        assert_eq!(err, PolicyError::forbidden(ADMIN_ONLY, Action::Delete, SubjectType::USER));
        assert_eq!(err.status_code(), 403);

        // Reads are granted, so an unknown id is reported as missing.
        assert_eq!(controller.find_one(&member, missing), Err(PolicyError::NotFound(missing)));
    }

    #[test]
    fn test_malformed_principal_is_not_a_denial() {
        let mut controller = UserController::default();
        let claims = Claims { id: UserId::new_v4(), is_admin: None };
        let err = controller.create(&claims, new_user()).unwrap_err();
        let expected = AbilityError::MalformedPrincipal(claims.id.to_string());
        assert_eq!(err, PolicyError::Ability(expected));
        assert_eq!(err.status_code(), 500);
        assert!(controller.service().is_empty());
    }
}
