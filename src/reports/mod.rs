mod charts;
mod console;
mod json;

pub use console::{ConsoleOptions, generate as generate_console, write_error};
pub use json::generate as generate_json;
