pub mod attendance_service;
pub mod booth_service;
pub mod caller;
pub mod error;
pub mod policy;
pub mod student_service;
pub mod user_service;

pub use caller::Caller;
pub use error::AppError;
pub use policy::{AccessPolicy, Operation, Requirement, RolePolicy};
