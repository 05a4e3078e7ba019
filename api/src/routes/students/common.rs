use db::models::student::Model as StudentModel;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+()\-. ]{0,20}$").expect("valid phone regex"));

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, max = 50, message = "Student ID must be 1-50 characters"))]
    pub student_id: String,
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(regex(path = *PHONE_REGEX, message = "Phone must be at most 20 digits or separators"))]
    pub phone: Option<String>,
    #[validate(length(max = 255))]
    pub major: Option<String>,
    #[validate(range(min = 1, max = 10, message = "Year must be between 1 and 10"))]
    pub year: Option<i32>,
    /// Defaults to `student_id`.
    #[validate(length(min = 1, max = 255, message = "QR code must be 1-255 characters"))]
    pub qr_code: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, max = 50, message = "Student ID must be 1-50 characters"))]
    pub student_id: Option<String>,
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(regex(path = *PHONE_REGEX, message = "Phone must be at most 20 digits or separators"))]
    pub phone: Option<String>,
    #[validate(length(max = 255))]
    pub major: Option<String>,
    #[validate(range(min = 1, max = 10, message = "Year must be between 1 and 10"))]
    pub year: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StudentResponse {
    pub id: i64,
    pub student_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub major: Option<String>,
    pub year: Option<i32>,
    pub qr_code: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<StudentModel> for StudentResponse {
    fn from(student: StudentModel) -> Self {
        Self {
            id: student.id,
            student_id: student.student_id,
            name: student.name,
            email: student.email,
            phone: student.phone,
            major: student.major,
            year: student.year,
            qr_code: student.qr_code,
            created_at: student.created_at.to_rfc3339(),
            updated_at: student.updated_at.to_rfc3339(),
        }
    }
}
