pub mod command;
pub mod gradient;
pub mod grid;
pub mod mapping;
