pub mod alphabet;
pub mod config;
pub mod scheme;
pub mod text;
