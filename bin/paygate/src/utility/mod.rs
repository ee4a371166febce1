pub mod logging;
pub mod tasks;
