use time::OffsetDateTime;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub bio: String,
    pub website: String,
    /// Set by the store on insert.
    pub created_at: Option<OffsetDateTime>,
    /// `None` until the first update.
    pub updated_at: Option<OffsetDateTime>,
}
