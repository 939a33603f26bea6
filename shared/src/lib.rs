use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Manager,
    Admin,
}

/// A named access right. Roles grant capabilities; nothing else does.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    Display,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Capability {
    ManagerAccess,
    AdminAccess,
    ViewHostels,
    BookHostel,
    ManageOwnHostels,
    ManageAllHostels,
    ManageUsers,
}

const USER_CAPABILITIES: &[Capability] = &[Capability::ViewHostels, Capability::BookHostel];

const MANAGER_CAPABILITIES: &[Capability] = &[
    Capability::ManagerAccess,
    Capability::ViewHostels,
    Capability::ManageOwnHostels,
];

const ADMIN_CAPABILITIES: &[Capability] = &[
    Capability::ManagerAccess,
    Capability::AdminAccess,
    Capability::ViewHostels,
    Capability::BookHostel,
    Capability::ManageOwnHostels,
    Capability::ManageAllHostels,
    Capability::ManageUsers,
];

impl Role {
    pub fn capabilities(self) -> &'static [Capability] {
        match self {
            Role::User => USER_CAPABILITIES,
            Role::Manager => MANAGER_CAPABILITIES,
            Role::Admin => ADMIN_CAPABILITIES,
        }
    }

    pub fn can(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

/// Cached user profile written next to the token at login.
///
/// Only `role` is read by the access checks. Every other field the login flow
/// writes is kept as-is, known ones typed and the rest in `extra`. A known
/// field holding a value of another shape stays in `extra` untouched, so any
/// JSON object reads back.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UserData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<'de> Deserialize<'de> for UserData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut extra = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self {
            role: take_field(&mut extra, "role"),
            id: take_field(&mut extra, "id"),
            email: take_field(&mut extra, "email"),
            name: take_field(&mut extra, "name"),
            avatar: take_field(&mut extra, "avatar"),
            extra,
        })
    }
}

fn take_field<T: DeserializeOwned>(fields: &mut Map<String, Value>, key: &str) -> Option<T> {
    let value = T::deserialize(fields.get(key)?).ok()?;
    fields.remove(key);
    Some(value)
}

impl UserData {
    pub fn with_role(role: Role) -> Self {
        Self {
            role: Some(role),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInResponse {
    pub token: String,
    pub user: UserData,
}
