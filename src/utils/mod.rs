// Utility modules
// Pure date and time helpers with no dependency on the models

pub mod date;
pub mod time;
