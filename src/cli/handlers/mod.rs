pub mod config;
pub mod decode;
pub mod detect;
pub mod encode;
