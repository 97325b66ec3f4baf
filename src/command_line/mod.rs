pub mod arguments;
pub mod procedures;
