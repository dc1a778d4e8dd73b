pub mod generate;
pub mod output;
pub mod types;
pub mod verify;
