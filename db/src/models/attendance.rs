use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder};
use serde::Serialize;

use super::{booth, student};

/// One recorded visit of a student to a booth.
///
/// Rows are written once by a scan and never updated. The pair
/// `(student_id, booth_id)` is unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub booth_id: i64,
    pub scanned_at: DateTime<Utc>,
    /// User who performed the scan.
    pub scanned_by: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_delete = "Restrict"
    )]
    Student,

    #[sea_orm(
        belongs_to = "super::booth::Entity",
        from = "Column::BoothId",
        to = "super::booth::Column::Id",
        on_delete = "Restrict"
    )]
    Booth,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ScannedBy",
        to = "super::user::Column::Id"
    )]
    Scanner,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::booth::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booth.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scanner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a visit. Fails with a unique violation when the student has
    /// already been recorded at this booth.
    pub async fn record<C>(
        db: &C,
        student_id: i64,
        booth_id: i64,
        scanned_by: i64,
        scanned_at: DateTime<Utc>,
    ) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let row = ActiveModel {
            student_id: Set(student_id),
            booth_id: Set(booth_id),
            scanned_by: Set(scanned_by),
            scanned_at: Set(scanned_at),
            ..Default::default()
        };

        row.insert(db).await
    }

    pub async fn exists_for<C>(db: &C, student_id: i64, booth_id: i64) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        let found = Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::BoothId.eq(booth_id))
            .one(db)
            .await?;
        Ok(found.is_some())
    }

    /// Visits recorded at `booth_id`, oldest first, each left-joined to its student.
    pub async fn by_booth<C>(
        db: &C,
        booth_id: i64,
    ) -> Result<Vec<(Model, Option<student::Model>)>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::BoothId.eq(booth_id))
            .find_also_related(student::Entity)
            .order_by_asc(Column::ScannedAt)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// Visits made by `student_id`, oldest first, each left-joined to its booth.
    pub async fn by_student<C>(
        db: &C,
        student_id: i64,
    ) -> Result<Vec<(Model, Option<booth::Model>)>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .find_also_related(booth::Entity)
            .order_by_asc(Column::ScannedAt)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }
}
