pub mod generate;
pub mod path;
