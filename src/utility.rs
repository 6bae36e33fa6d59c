pub mod encoding;
pub mod input;
