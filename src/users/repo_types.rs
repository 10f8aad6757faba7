use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,                   // unique user ID
    pub name: String,               // display name
    pub email: String,              // normalized email
    pub password_hash: String,      // Argon2 PHC string, never exposed
    pub created_at: OffsetDateTime, // creation timestamp
}

/// A validated signup ready to be stored.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Public part of the user returned to clients.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            created_at: u.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_serializes_without_password() {
        let user = User {
            id: Uuid::new_v4(),
            name: "A".into(),
            email: "a@b.com".into(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".into(),
            created_at: OffsetDateTime::now_utc(),
        };

        let json = serde_json::to_value(PublicUser::from(user)).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["name"], "A");
        assert_eq!(obj["email"], "a@b.com");
        assert!(obj.contains_key("createdAt"));
        assert!(!obj.keys().any(|k| k.to_lowercase().contains("password")));
    }
}
