use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder};
use serde::Serialize;

/// Represents a student in the `students` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Institutional student number. Unique.
    pub student_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub major: Option<String>,
    /// Year of study.
    pub year: Option<i32>,
    /// Payload encoded in the student's QR code. Unique.
    pub qr_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default)]
pub struct NewStudent {
    pub student_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub major: Option<String>,
    pub year: Option<i32>,
    pub qr_code: String,
}

/// Partial update. `None` leaves the column unchanged. The QR payload is
/// fixed at creation.
#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub student_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub major: Option<String>,
    pub year: Option<i32>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.student_id.is_none()
            && self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.major.is_none()
            && self.year.is_none()
    }
}

impl Model {
    pub async fn create<C>(db: &C, new: NewStudent) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        let student = ActiveModel {
            student_id: Set(new.student_id),
            name: Set(new.name),
            email: Set(new.email),
            phone: Set(new.phone),
            major: Set(new.major),
            year: Set(new.year),
            qr_code: Set(new.qr_code),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        student.insert(db).await
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

    pub async fn find_by_student_id<C>(db: &C, student_id: &str) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .one(db)
            .await
    }

    pub async fn find_by_qr_code<C>(db: &C, qr_code: &str) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::QrCode.eq(qr_code))
            .one(db)
            .await
    }

    /// Applies `patch` to student `id`. Returns `None` when the student does not exist.
    pub async fn update<C>(db: &C, id: i64, patch: StudentPatch) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        let Some(existing) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(existing));
        }

        let mut student: ActiveModel = existing.into();
        if let Some(student_id) = patch.student_id {
            student.student_id = Set(student_id);
        }
        if let Some(name) = patch.name {
            student.name = Set(name);
        }
        if let Some(email) = patch.email {
            student.email = Set(Some(email));
        }
        if let Some(phone) = patch.phone {
            student.phone = Set(Some(phone));
        }
        if let Some(major) = patch.major {
            student.major = Set(Some(major));
        }
        if let Some(year) = patch.year {
            student.year = Set(Some(year));
        }
        student.updated_at = Set(Utc::now());

        student.update(db).await.map(Some)
    }

    /// Deletes student `id`. Returns `false` when nothing was deleted.
    pub async fn delete<C>(db: &C, id: i64) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}
