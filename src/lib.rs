pub mod config;
pub mod model;
pub mod payroll;
pub mod utils;
