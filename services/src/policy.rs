//! Role requirements for every service operation.
//!
//! The table in [`Operation::requirement`] is the single source of truth. The
//! services consult it before touching the store and the HTTP guards consult
//! it before running a handler, so both layers always agree.

use strum::{Display, EnumIter};

use crate::caller::Caller;
use crate::error::AppError;

/// Minimum identity an operation needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Public,
    Authenticated,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    ListBooths,
    GetBooth,
    CreateBooth,
    UpdateBooth,
    DeleteBooth,
    MyBooths,
    ListStudents,
    GetStudent,
    GetStudentByQrCode,
    CreateStudent,
    UpdateStudent,
    DeleteStudent,
    ScanAttendance,
    AttendanceByBooth,
    AttendanceByStudent,
    CurrentUser,
}

impl Operation {
    pub fn requirement(self) -> Requirement {
        use Operation::*;
        match self {
            ListBooths | GetBooth | GetStudent | GetStudentByQrCode => Requirement::Public,
            CreateBooth | UpdateBooth | DeleteBooth => Requirement::Admin,
            ListStudents | CreateStudent | UpdateStudent | DeleteStudent => Requirement::Admin,
            ScanAttendance | AttendanceByBooth | AttendanceByStudent => Requirement::Authenticated,
            MyBooths | CurrentUser => Requirement::Authenticated,
        }
    }
}

/// Decides whether a caller may perform an operation.
pub trait AccessPolicy: Send + Sync {
    fn check(&self, caller: Option<&Caller>, op: Operation) -> Result<(), AppError>;
}

/// Default policy: compares the caller's role with [`Operation::requirement`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RolePolicy;

impl AccessPolicy for RolePolicy {
    fn check(&self, caller: Option<&Caller>, op: Operation) -> Result<(), AppError> {
        match (op.requirement(), caller) {
            (Requirement::Public, _) => Ok(()),
            (_, None) => Err(AppError::Unauthenticated),
            (Requirement::Authenticated, Some(_)) => Ok(()),
            (Requirement::Admin, Some(c)) if c.is_admin() => Ok(()),
            (Requirement::Admin, Some(_)) => Err(AppError::Forbidden(op)),
        }
    }
}

/// Checks `op` against the default [`RolePolicy`].
pub fn authorize(caller: Option<&Caller>, op: Operation) -> Result<(), AppError> {
    RolePolicy.check(caller, op)
}

/// Like [`authorize`] but also returns the caller, for operations that need its id.
pub fn require_caller(caller: Option<&Caller>, op: Operation) -> Result<&Caller, AppError> {
    authorize(caller, op)?;
    caller.ok_or(AppError::Unauthenticated)
}
