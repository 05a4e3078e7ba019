use serde::{Deserialize, Serialize};
use services::attendance_service::{BoothAttendance, ScanOutcome, StudentAttendance};
use validator::Validate;

use crate::routes::booths::common::BoothResponse;
use crate::routes::students::common::StudentResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct ScanRequest {
    #[validate(length(min = 1, max = 255, message = "QR code is required"))]
    pub qr_code: String,
    pub booth_id: i64,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub attendance_id: i64,
    pub booth_id: i64,
    pub scanned_at: String,
    pub scanned_by: i64,
    pub student: StudentResponse,
}

impl From<ScanOutcome> for ScanResponse {
    fn from(outcome: ScanOutcome) -> Self {
        Self {
            attendance_id: outcome.attendance.id,
            booth_id: outcome.attendance.booth_id,
            scanned_at: outcome.attendance.scanned_at.to_rfc3339(),
            scanned_by: outcome.attendance.scanned_by,
            student: outcome.student.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BoothVisitResponse {
    pub attendance_id: i64,
    pub scanned_at: String,
    pub student: Option<StudentResponse>,
}

impl From<BoothAttendance> for BoothVisitResponse {
    fn from(row: BoothAttendance) -> Self {
        Self {
            attendance_id: row.attendance_id,
            scanned_at: row.scanned_at.to_rfc3339(),
            student: row.student.map(StudentResponse::from),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StudentVisitResponse {
    pub attendance_id: i64,
    pub scanned_at: String,
    pub booth: Option<BoothResponse>,
}

impl From<StudentAttendance> for StudentVisitResponse {
    fn from(row: StudentAttendance) -> Self {
        Self {
            attendance_id: row.attendance_id,
            scanned_at: row.scanned_at.to_rfc3339(),
            booth: row.booth.map(BoothResponse::from),
        }
    }
}
