//!
//! Subject type resolution.
//!
//! Rules are written against subject *types* ("all Users") while checks are made
//! against instances ("this user record"). Every subject value supplies its own
//! tag through the `Subject` trait; there is no runtime type inspection.

use crate::error::AbilityError;
use crate::types::SubjectType;

/// Anything an action can target.
///
/// Implemented by entity types (instance-level checks) and by `SubjectType`
/// itself (type-level checks and the `all` wildcard).
pub trait Subject {
    /// Canonical type tag. Must be the same for every instance of a logical type.
    fn subject_type(&self) -> SubjectType;
}

impl Subject for SubjectType {
    #[inline]
    fn subject_type(&self) -> SubjectType {
        *self
    }
}

impl<S: Subject + ?Sized> Subject for &S {
    #[inline]
    fn subject_type(&self) -> SubjectType {
        (**self).subject_type()
    }
}

/// Maps a subject value to the tag used for rule matching.
#[inline]
pub fn resolve<S: Subject + ?Sized>(subject: &S) -> SubjectType {
    subject.subject_type()
}

/// Resolves a subject tag given as text against `SubjectType::VOCABULARY`.
///
/// Names are case-sensitive: `"all"` and `"User"`.
pub fn resolve_name(name: &str) -> Result<SubjectType, AbilityError> {
    SubjectType::VOCABULARY
        .into_iter()
        .find(|known| known.as_str() == name)
        .ok_or_else(|| AbilityError::UnresolvableSubject(name.to_string()))
}
