use db::errors::{is_unique_violation, violation_detail};
use db::models::student::{Model as Student, NewStudent, StudentPatch};
use sea_orm::{DatabaseConnection, DbErr};
use tracing::info;

use crate::caller::Caller;
use crate::error::{degrade, AppError, AppResult};
use crate::policy::{authorize, require_caller, Operation};

#[derive(Debug, Clone, Default)]
pub struct CreateStudent {
    pub student_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub major: Option<String>,
    pub year: Option<i32>,
    /// Defaults to `student_id` when omitted.
    pub qr_code: Option<String>,
}

/// Fields an admin may change. The QR payload is fixed once printed.
#[derive(Debug, Clone, Default)]
pub struct UpdateStudent {
    pub student_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub major: Option<String>,
    pub year: Option<i32>,
}

fn required(field: &str, value: &str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(value.to_owned())
}

const DUPLICATE_STUDENT_ID: &str = "student id already exists";

/// Rejects `student_id` when another student (other than `except`) already holds it.
async fn ensure_student_id_free(
    db: &DatabaseConnection,
    student_id: &str,
    except: Option<i64>,
) -> AppResult<()> {
    match Student::find_by_student_id(db, student_id).await? {
        Some(existing) if Some(existing.id) != except => {
            Err(AppError::Conflict(DUPLICATE_STUDENT_ID.into()))
        }
        _ => Ok(()),
    }
}

fn write_error(err: DbErr) -> AppError {
    if is_unique_violation(&err) {
        let msg = if violation_detail(&err).contains("qr_code") {
            "qr code is already assigned to another student"
        } else {
            DUPLICATE_STUDENT_ID
        };
        return AppError::Conflict(msg.into());
    }
    AppError::from_write(err, "student already exists", "student has recorded attendance")
}

pub struct StudentService;

impl StudentService {
    /// All students in id order. Admin only.
    pub async fn list(db: &DatabaseConnection, caller: Option<&Caller>) -> AppResult<Vec<Student>> {
        authorize(caller, Operation::ListStudents)?;
        degrade(Student::find_all(db).await, Vec::new(), "list_students")
    }

    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> AppResult<Option<Student>> {
        authorize(None, Operation::GetStudent)?;
        degrade(Student::find_by_id(db, id).await, None, "get_student")
    }

    pub async fn get_by_qr_code(db: &DatabaseConnection, qr_code: &str) -> AppResult<Option<Student>> {
        authorize(None, Operation::GetStudentByQrCode)?;
        degrade(
            Student::find_by_qr_code(db, qr_code.trim()).await,
            None,
            "get_student_by_qr_code",
        )
    }

    pub async fn create(
        db: &DatabaseConnection,
        caller: Option<&Caller>,
        input: CreateStudent,
    ) -> AppResult<Student> {
        let caller = require_caller(caller, Operation::CreateStudent)?;
        let student_id = required("student_id", &input.student_id)?;
        let name = required("name", &input.name)?;
        let qr_code = match input.qr_code.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => code.to_owned(),
            _ => student_id.clone(),
        };
        ensure_student_id_free(db, &student_id, None).await?;

        let student = Student::create(
            db,
            NewStudent {
                student_id,
                name,
                email: input.email,
                phone: input.phone,
                major: input.major,
                year: input.year,
                qr_code,
            },
        )
        .await
        .map_err(write_error)?;

        info!(student_id = student.id, by = caller.id, "student created");
        Ok(student)
    }

    pub async fn update(
        db: &DatabaseConnection,
        caller: Option<&Caller>,
        id: i64,
        input: UpdateStudent,
    ) -> AppResult<()> {
        let caller = require_caller(caller, Operation::UpdateStudent)?;
        let student_id = input
            .student_id
            .as_deref()
            .map(|v| required("student_id", v))
            .transpose()?;
        let name = input.name.as_deref().map(|v| required("name", v)).transpose()?;
        if let Some(student_id) = &student_id {
            ensure_student_id_free(db, student_id, Some(id)).await?;
        }

        let patch = StudentPatch {
            student_id,
            name,
            email: input.email,
            phone: input.phone,
            major: input.major,
            year: input.year,
        };

        Student::update(db, id, patch)
            .await
            .map_err(write_error)?
            .ok_or(AppError::NotFound("student"))?;

        info!(student_id = id, by = caller.id, "student updated");
        Ok(())
    }

    /// Deletes a student. Refused with `Conflict` while attendance references it.
    pub async fn delete(db: &DatabaseConnection, caller: Option<&Caller>, id: i64) -> AppResult<()> {
        let caller = require_caller(caller, Operation::DeleteStudent)?;

        if !Student::delete(db, id).await.map_err(write_error)? {
            return Err(AppError::NotFound("student"));
        }

        info!(student_id = id, by = caller.id, "student deleted");
        Ok(())
    }
}
