pub mod check;
pub mod clean;
mod command_result;
pub mod fmt;
pub mod helper;
pub mod init;
pub mod stats;
pub mod tr;

pub use command_result::*;
