//!
//! Shared vocabulary for the authorization engine.
//!
//! `Action` and `SubjectType` are the constant table every rule and every check
//! is expressed in. They are process-wide and read-only.

use std::fmt;
use std::str::FromStr;

use crate::error::AbilityError;

/// An operation a principal may attempt on a subject.
///
/// `Manage` is the wildcard: a rule granting `Manage` covers every other action.
/// The `u8` tags are stable and used by compact encodings (see `TryFrom<u8>`).
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Wildcard covering all actions.
    Manage = 0,
    Create = 1,
    Read = 2,
    Update = 3,
    Delete = 4,
}

impl Action {
    /// Every member of the vocabulary, wildcard first.
    pub const ALL: [Action; 5] = [
        Action::Manage,
        Action::Create,
        Action::Read,
        Action::Update,
        Action::Delete,
    ];

    /// The lowercase name used in text forms and serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Manage => "manage",
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }

    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Action::Manage)
    }
}

impl TryFrom<u8> for Action {
    type Error = AbilityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::Manage),
            1 => Ok(Action::Create),
            2 => Ok(Action::Read),
            3 => Ok(Action::Update),
            4 => Ok(Action::Delete),
            _ => Err(AbilityError::UnknownAction(format!("tag {}", value))),
        }
    }
}

impl FromStr for Action {
    type Err = AbilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| AbilityError::UnknownAction(s.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical identifier for the kind of thing an action targets.
///
/// `All` is the wildcard token. `Entity` carries the canonical type name that
/// every instance of that logical type resolves to (e.g. `"User"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubjectType {
    /// Wildcard matching every subject type.
    All,
    Entity(&'static str),
}

impl SubjectType {
    /// Text form of the wildcard.
    pub const ALL_TOKEN: &'static str = "all";

    /// Canonical tag for user records.
    pub const USER: SubjectType = SubjectType::Entity("User");

    /// Subject tags known to the process, in their text form.
    /// Used when a subject arrives as a name rather than a typed value.
    pub const VOCABULARY: [SubjectType; 2] = [SubjectType::All, SubjectType::USER];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectType::All => Self::ALL_TOKEN,
            SubjectType::Entity(name) => *name,
        }
    }

    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, SubjectType::All)
    }
}

impl fmt::Display for SubjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Both directions accept only names from `VOCABULARY`, so anything that
// serializes reads back as the same value. On the way in, the `&'static str`
// payload is taken from the table, never from the input.
impl serde::Serialize for SubjectType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match crate::subject::resolve_name(self.as_str()) {
            Ok(known) if known == *self => serializer.serialize_str(known.as_str()),
            _ => Err(<S::Error as serde::ser::Error>::custom(
                AbilityError::UnresolvableSubject(self.as_str().to_string()),
            )),
        }
    }
}

impl<'de> serde::Deserialize<'de> for SubjectType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        crate::subject::resolve_name(&name).map_err(<D::Error as serde::de::Error>::custom)
    }
}

/// Stable identifier of a user record.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub uuid::Uuid);

impl UserId {
    pub fn new_v4() -> Self {
        UserId(uuid::Uuid::new_v4())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Role classification of a principal. Selects which rule set gets built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    pub fn from_is_admin(is_admin: bool) -> Self {
        if is_admin {
            Role::Admin
        } else {
            Role::Member
        }
    }
}
