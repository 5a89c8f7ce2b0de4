mod browse_tests;
mod json_tests;
mod profile_tests;
