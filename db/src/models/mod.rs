pub mod attendance;
pub mod booth;
pub mod student;
pub mod user;

pub use attendance::Entity as Attendance;
pub use booth::Entity as Booth;
pub use student::Entity as Student;
pub use user::Entity as User;
