// Calendar Layout Library
// Event placement for calendar day, week and month views

pub mod models;
pub mod services;
pub mod utils;
