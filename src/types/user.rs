use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Nutritionist,
    Client,
}

/// A platform account.
///
/// `nutritionist_id` links a client to their nutritionist and is only set
/// when `role` is [`UserRole::Client`]; the type layer does not enforce this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub role: UserRole,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub language_preference: String,
    #[serde(with = "time::serde::rfc3339")]
    pub signup_date: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutritionist_id: Option<String>,
}

/// A user together with resolved relations. The back-references are loose:
/// a nutritionist does not own its clients, it is merely linked by them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithRelations {
    #[serde(flatten)]
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutritionist: Option<Box<User>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clients: Option<Vec<User>>,
}
