pub mod m202510140001_create_users;
pub mod m202510140002_create_booths;
pub mod m202510140003_create_students;
pub mod m202510140004_create_attendance;
