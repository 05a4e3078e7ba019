use chrono::{DateTime, Utc};
use db::errors::{is_foreign_key_violation, is_unique_violation};
use db::models::attendance::Model as Attendance;
use db::models::booth::Model as Booth;
use db::models::student::Model as Student;
use db::models::user::Model as User;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::{info, warn};

use crate::caller::Caller;
use crate::error::{degrade, AppError, AppResult};
use crate::policy::{require_caller, Operation};

const ALREADY_ATTENDED: &str = "already attended this booth";

/// Result of a successful scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutcome {
    pub student: Student,
    pub attendance: Attendance,
}

/// One visit to a booth, with the visiting student if it still exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoothAttendance {
    pub attendance_id: i64,
    pub scanned_at: DateTime<Utc>,
    pub student: Option<Student>,
}

/// One booth a student visited, if the booth still exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentAttendance {
    pub attendance_id: i64,
    pub scanned_at: DateTime<Utc>,
    pub booth: Option<Booth>,
}

pub struct AttendanceService;

impl AttendanceService {
    /// Records that the student owning `qr_code` visited `booth_id`.
    ///
    /// The lookups are plain reads and the visit is a single autocommit
    /// insert, so a rejected scan writes nothing. Two scans racing on the same
    /// pair serialize on the insert and the loser trips the unique index.
    pub async fn scan(
        db: &DatabaseConnection,
        caller: Option<&Caller>,
        qr_code: &str,
        booth_id: i64,
    ) -> AppResult<ScanOutcome> {
        let caller = require_caller(caller, Operation::ScanAttendance)?;
        let code = qr_code.trim();
        if code.is_empty() {
            return Err(AppError::Validation("qr code must not be empty".into()));
        }

        let outcome = record_visit(db, caller.id, code, booth_id).await?;
        info!(
            student_id = outcome.student.id,
            booth_id,
            scanned_by = caller.id,
            "attendance recorded"
        );
        Ok(outcome)
    }

    /// Visits at a booth, oldest first.
    pub async fn by_booth(
        db: &DatabaseConnection,
        caller: Option<&Caller>,
        booth_id: i64,
    ) -> AppResult<Vec<BoothAttendance>> {
        require_caller(caller, Operation::AttendanceByBooth)?;
        let rows = degrade(Attendance::by_booth(db, booth_id).await, Vec::new(), "attendance_by_booth")?;

        Ok(rows
            .into_iter()
            .map(|(visit, student)| BoothAttendance {
                attendance_id: visit.id,
                scanned_at: visit.scanned_at,
                student,
            })
            .collect())
    }

    /// Booths a student visited, oldest first.
    pub async fn by_student(
        db: &DatabaseConnection,
        caller: Option<&Caller>,
        student_id: i64,
    ) -> AppResult<Vec<StudentAttendance>> {
        require_caller(caller, Operation::AttendanceByStudent)?;
        let rows = degrade(
            Attendance::by_student(db, student_id).await,
            Vec::new(),
            "attendance_by_student",
        )?;

        Ok(rows
            .into_iter()
            .map(|(visit, booth)| StudentAttendance {
                attendance_id: visit.id,
                scanned_at: visit.scanned_at,
                booth,
            })
            .collect())
    }
}

async fn record_visit(
    db: &DatabaseConnection,
    scanned_by: i64,
    qr_code: &str,
    booth_id: i64,
) -> AppResult<ScanOutcome> {
    if User::find_by_id(db, scanned_by).await?.is_none() {
        return Err(AppError::Unauthenticated);
    }

    let student = Student::find_by_qr_code(db, qr_code)
        .await?
        .ok_or(AppError::NotFound("student"))?;

    Booth::find_by_id(db, booth_id)
        .await?
        .ok_or(AppError::NotFound("booth"))?;

    if Attendance::exists_for(db, student.id, booth_id).await? {
        return Err(AppError::Conflict(ALREADY_ATTENDED.into()));
    }

    match Attendance::record(db, student.id, booth_id, scanned_by, Utc::now()).await {
        Ok(attendance) => Ok(ScanOutcome { student, attendance }),
        Err(err) if is_unique_violation(&err) => Err(AppError::Conflict(ALREADY_ATTENDED.into())),
        Err(err) if is_foreign_key_violation(&err) => {
            warn!(student_id = student.id, booth_id, scanned_by, "scan lost a row to a concurrent delete");
            Err(missing_reference(db, student.id, booth_id, scanned_by).await)
        }
        Err(err) => Err(err.into()),
    }
}

/// Names the referenced row that disappeared between lookup and insert.
async fn missing_reference(
    db: &DatabaseConnection,
    student_id: i64,
    booth_id: i64,
    scanned_by: i64,
) -> AppError {
    match Student::find_by_id(db, student_id).await {
        Ok(None) => return AppError::NotFound("student"),
        Err(err) => return err.into(),
        Ok(Some(_)) => {}
    }
    match Booth::find_by_id(db, booth_id).await {
        Ok(None) => return AppError::NotFound("booth"),
        Err(err) => return err.into(),
        Ok(Some(_)) => {}
    }
    match User::find_by_id(db, scanned_by).await {
        Ok(None) => AppError::Unauthenticated,
        Err(err) => err.into(),
        Ok(Some(_)) => AppError::Conflict("referenced row changed during scan".into()),
    }
}
