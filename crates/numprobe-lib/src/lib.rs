// numprobe-lib: phone number lookups and the command layer behind the numprobe binary

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logger;
pub mod output;
pub mod phone;
