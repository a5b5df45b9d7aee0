use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Roles an admin is allowed to assign when creating an account.
pub const ALLOWED_ROLES: [&str; 4] = ["ADMIN", "RECEPTION", "MEDICAL", "PARENT"];

/// Self-registered accounts that never show up in admin listings.
pub const ROLE_GUEST: &str = "GUEST";

pub fn is_allowed_role(role: &str) -> bool {
    ALLOWED_ROLES.contains(&role)
}

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String, // stored as the caller provided it, see PasswordScheme
    pub full_name: String,
    pub phone_number: String,
    pub role: String,
    pub is_active: bool,
    pub image_url: Option<String>,
    pub created_at: Option<OffsetDateTime>,
    pub updated_at: Option<OffsetDateTime>,
    pub last_login: Option<OffsetDateTime>,
}

/// Input for `create_user`; the generated id comes back in the returned row.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone_number: String,
    pub role: String,
    pub is_active: bool,
    pub image_url: Option<String>,
}

impl User {
    /// Projection used by admin listing and editing screens. Carries only
    /// what those screens render; the password never leaves this type.
    pub fn admin_view(&self) -> Map<String, Value> {
        let mut view = Map::new();
        view.insert("user_id".into(), json!(self.user_id));
        view.insert("email".into(), json!(self.email));
        view.insert("full_name".into(), json!(self.full_name));
        view.insert("phone_number".into(), json!(self.phone_number));
        view.insert("role".into(), json!(self.role));
        view.insert("is_active".into(), json!(self.is_active));
        view.insert("created_at".into(), json!(self.created_at));
        view.insert("last_login".into(), json!(self.last_login));
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample_user() -> User {
        User {
            user_id: 7,
            email: "nurse@clinic.example".into(),
            password: "s3cret".into(),
            full_name: "Nurse Joy".into(),
            phone_number: "0123456789".into(),
            role: "MEDICAL".into(),
            is_active: true,
            image_url: Some("https://cdn.example/nurse.png".into()),
            created_at: Some(datetime!(2024-03-01 09:30 UTC)),
            updated_at: None,
            last_login: None,
        }
    }

    #[test]
    fn admin_view_carries_listing_fields_only() {
        let view = sample_user().admin_view();
        let keys: Vec<&str> = view.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "user_id",
                "email",
                "full_name",
                "phone_number",
                "role",
                "is_active",
                "created_at",
                "last_login"
            ]
        );
        assert!(!view.contains_key("password"));
        assert!(!view.contains_key("image_url"));
    }

    #[test]
    fn admin_view_serializes_timestamps() {
        let view = sample_user().admin_view();
        assert!(view["created_at"].is_string());
        assert!(view["last_login"].is_null());
        assert_eq!(view["user_id"], json!(7));
        assert_eq!(view["is_active"], json!(true));
    }

    #[test]
    fn serde_never_exposes_password() {
        let body = serde_json::to_value(sample_user()).expect("serialize user");
        assert!(body.get("password").is_none());
        assert_eq!(body["email"], json!("nurse@clinic.example"));
    }

    #[test]
    fn role_allow_list_matches_admin_roles() {
        for role in ALLOWED_ROLES {
            assert!(is_allowed_role(role));
        }
        assert!(!is_allowed_role(ROLE_GUEST));
        assert!(!is_allowed_role("SUPERADMIN"));
        assert!(!is_allowed_role("admin")); // exact match, case matters
    }
}
