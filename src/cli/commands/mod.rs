pub mod combine;
mod command_result;
pub mod extract;
pub mod init;

pub use command_result::*;
