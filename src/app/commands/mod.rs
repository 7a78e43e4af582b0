pub mod generate;
pub mod list;
