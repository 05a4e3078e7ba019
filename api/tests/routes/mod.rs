mod attendance_test;
mod auth_test;
mod booths_test;
mod health_test;
mod students_test;
