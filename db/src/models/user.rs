use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{OnConflict, StringLen};
use sea_orm::{ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Represents a user in the `users` table.
///
/// Users are created by the identity provider on first login and refreshed on
/// every subsequent login.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Identifier issued by the external identity provider. Unique.
    pub open_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    /// How the user authenticated (e.g. "google", "email").
    pub login_method: Option<String>,
    /// Authorization role.
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Refreshed on every login.
    pub last_signed_in: DateTime<Utc>,
}

/// Binary role model: regular users scan, admins manage booths and students.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[sea_orm(string_value = "user")]
    User,

    #[sea_orm(string_value = "admin")]
    Admin,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Booths this user administers.
    #[sea_orm(has_many = "super::booth::Entity")]
    Booths,
}

impl Related<super::booth::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booths.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Profile data reported by the identity provider on login.
///
/// `None` fields are left untouched on an existing user.
#[derive(Debug, Clone, Default)]
pub struct LoginProfile {
    pub open_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub login_method: Option<String>,
    pub role: Option<Role>,
}

impl Model {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub async fn find_by_id<C>(db: &C, id: i64) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_open_id<C>(db: &C, open_id: &str) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::OpenId.eq(open_id))
            .one(db)
            .await
    }

    /// Inserts the user or, when `open_id` already exists, updates the
    /// provided fields and refreshes `last_signed_in`.
    ///
    /// Runs as a single `INSERT .. ON CONFLICT DO UPDATE`, so concurrent first
    /// logins cannot create two rows.
    pub async fn upsert_login<C>(
        db: &C,
        profile: LoginProfile,
        signed_in_at: DateTime<Utc>,
    ) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut update_columns = vec![Column::LastSignedIn, Column::UpdatedAt];

        let mut user = ActiveModel {
            id: NotSet,
            open_id: Set(profile.open_id),
            created_at: Set(signed_in_at),
            updated_at: Set(signed_in_at),
            last_signed_in: Set(signed_in_at),
            ..Default::default()
        };

        if let Some(name) = profile.name {
            user.name = Set(Some(name));
            update_columns.push(Column::Name);
        }
        if let Some(email) = profile.email {
            user.email = Set(Some(email));
            update_columns.push(Column::Email);
        }
        if let Some(method) = profile.login_method {
            user.login_method = Set(Some(method));
            update_columns.push(Column::LoginMethod);
        }
        match profile.role {
            Some(role) => {
                user.role = Set(role);
                update_columns.push(Column::Role);
            }
            None => user.role = Set(Role::User),
        }

        Entity::insert(user)
            .on_conflict(
                OnConflict::column(Column::OpenId)
                    .update_columns(update_columns)
                    .to_owned(),
            )
            .exec_with_returning(db)
            .await
    }
}
