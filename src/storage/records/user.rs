use crate::domain::user::User;
use time::OffsetDateTime;

#[derive(sqlx::FromRow)]
pub(crate) struct UserRecord {
    pub id: String,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub bio: String,
    pub website: String,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            full_name: record.full_name,
            username: record.username,
            email: record.email,
            password: record.password,
            bio: record.bio,
            website: record.website,
            created_at: Some(record.created_at),
            updated_at: record.updated_at,
        }
    }
}

/// `RETURNING created_at, updated_at` projection of inserts and updates.
#[derive(sqlx::FromRow)]
pub(crate) struct UserTimestamps {
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

impl UserTimestamps {
    pub(crate) fn stamp(self, mut user: User) -> User {
        user.created_at = Some(self.created_at);
        user.updated_at = self.updated_at;
        user
    }
}
