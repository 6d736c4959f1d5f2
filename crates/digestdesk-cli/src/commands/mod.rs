pub mod context;
pub mod digests;
pub mod display;
pub mod favorites;
pub mod generate;
pub mod index;
pub mod prompt;
pub mod token;
