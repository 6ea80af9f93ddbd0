use std::fmt;

use serde::{Deserialize, Serialize};

use super::envelope::string_or_number;

/// Account role as reported by the user service.
/// Unknown role names are kept verbatim so the table still shows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Staff,
    Donor,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Donor => "donor",
            Role::Other(name) => name,
        }
    }

    /// CSS classes for the role badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Role::Admin => "badge badge-purple",
            Role::Staff => "badge badge-blue",
            Role::Donor => "badge badge-green",
            Role::Other(_) => "badge badge-gray",
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "admin" => Role::Admin,
            "staff" => Role::Staff,
            "donor" => Role::Donor,
            _ => Role::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity record owned by the user-management service; read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub blood_type: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn blood_type_label(&self) -> &str {
        self.blood_type.as_deref().unwrap_or("")
    }
}

/// Role selector of the user management panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Admin,
    Staff,
    Donor,
}

impl RoleFilter {
    pub const ALL: [RoleFilter; 4] = [RoleFilter::All, RoleFilter::Admin, RoleFilter::Staff, RoleFilter::Donor];

    /// Unrecognised values select every role.
    pub fn parse(value: &str) -> Self {
        match value {
            "admin" => RoleFilter::Admin,
            "staff" => RoleFilter::Staff,
            "donor" => RoleFilter::Donor,
            _ => RoleFilter::All,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            RoleFilter::All => "all",
            RoleFilter::Admin => "admin",
            RoleFilter::Staff => "staff",
            RoleFilter::Donor => "donor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoleFilter::All => "All Roles",
            RoleFilter::Admin => "Administrators",
            RoleFilter::Staff => "Staff Members",
            RoleFilter::Donor => "Donors",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_user_with_numeric_id() {
        let user: User = serde_json::from_str(
            r#"{"id":7,"firstName":"Ada","lastName":"Okafor","email":"ada@example.org","role":"donor","bloodType":"O-"}"#,
        )
        .expect("parse user");
        assert_eq!(user.id, "7");
        assert_eq!(user.role, Role::Donor);
        assert_eq!(user.full_name(), "Ada Okafor");
        assert_eq!(user.blood_type_label(), "O-");
    }

    #[test]
    fn unknown_role_is_kept_verbatim() {
        let user: User = serde_json::from_str(
            r#"{"id":"u1","firstName":"Sam","lastName":"Lee","email":"sam@example.org","role":"auditor"}"#,
        )
        .expect("parse user");
        assert_eq!(user.role.to_string(), "auditor");
        assert_eq!(user.role.badge_class(), "badge badge-gray");
        assert_eq!(user.blood_type_label(), "");
    }

    #[test]
    fn role_filter_falls_back_to_all() {
        assert_eq!(RoleFilter::parse("staff"), RoleFilter::Staff);
        assert_eq!(RoleFilter::parse("superuser"), RoleFilter::All);
        assert_eq!(RoleFilter::parse(""), RoleFilter::All);
    }
}
