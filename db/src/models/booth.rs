use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder};
use serde::Serialize;

/// A staffed station students visit during the event.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "booths")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// Owning admin. Back-reference only.
    pub admin_id: Option<i64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AdminId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Admin,

    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Admin.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields for a new booth. New booths start active.
#[derive(Debug, Clone, Default)]
pub struct NewBooth {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub admin_id: Option<i64>,
}

/// Partial update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct BoothPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    /// `Some(None)` clears the booth's admin.
    pub admin_id: Option<Option<i64>>,
    pub is_active: Option<bool>,
}

impl BoothPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.admin_id.is_none()
            && self.is_active.is_none()
    }
}

impl Model {
    pub async fn create<C>(db: &C, new: NewBooth) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        let booth = ActiveModel {
            name: Set(new.name),
            description: Set(new.description),
            location: Set(new.location),
            admin_id: Set(new.admin_id),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        booth.insert(db).await
    }

    pub async fn find_all<C>(db: &C) -> Result<Vec<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find().order_by_asc(Column::Id).all(db).await
    }

    pub async fn find_by_id<C>(db: &C, id: i64) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find_by_id(id).one(db).await
    }

    /// Booths whose owning admin is `admin_id`.
    pub async fn find_by_admin<C>(db: &C, admin_id: i64) -> Result<Vec<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::AdminId.eq(admin_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// Applies `patch` to booth `id`. Returns `None` when the booth does not exist.
    pub async fn update<C>(db: &C, id: i64, patch: BoothPatch) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        let Some(existing) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(existing));
        }

        let mut booth: ActiveModel = existing.into();
        if let Some(name) = patch.name {
            booth.name = Set(name);
        }
        if let Some(description) = patch.description {
            booth.description = Set(Some(description));
        }
        if let Some(location) = patch.location {
            booth.location = Set(Some(location));
        }
        if let Some(admin_id) = patch.admin_id {
            booth.admin_id = Set(admin_id);
        }
        if let Some(is_active) = patch.is_active {
            booth.is_active = Set(is_active);
        }
        booth.updated_at = Set(Utc::now());

        booth.update(db).await.map(Some)
    }

    /// Deletes booth `id`. Returns `false` when nothing was deleted.
    pub async fn delete<C>(db: &C, id: i64) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_user, setup_test_db};
    use crate::models::user::Role;

    fn booth(name: &str, admin_id: Option<i64>) -> NewBooth {
        NewBooth {
            name: name.into(),
            admin_id,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_and_find_by_admin() {
        let db = setup_test_db().await;
        let admin = create_user(&db, "oid-admin", Role::Admin).await;

        let owned = Model::create(&db, booth("IT Booth", Some(admin.id))).await.unwrap();
        Model::create(&db, booth("Unowned", None)).await.unwrap();

        assert!(owned.is_active);
        let mine = Model::find_by_admin(&db, admin.id).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].name, "IT Booth");
        assert_eq!(Model::find_all(&db).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_applies_only_given_fields() {
        let db = setup_test_db().await;
        let created = Model::create(
            &db,
            NewBooth {
                location: Some("Hall A".into()),
                ..booth("Marketing", None)
            },
        )
        .await
        .unwrap();

        let updated = Model::update(
            &db,
            created.id,
            BoothPatch {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

        assert!(!updated.is_active);
        assert_eq!(updated.name, "Marketing");
        assert_eq!(updated.location.as_deref(), Some("Hall A"));
    }

    #[tokio::test]
    async fn update_and_delete_missing_booth() {
        let db = setup_test_db().await;

        let patch = BoothPatch {
            name: Some("Ghost".into()),
            ..Default::default()
        };
        assert!(Model::update(&db, 404, patch).await.unwrap().is_none());
        assert!(!Model::delete(&db, 404).await.unwrap());
    }
}
