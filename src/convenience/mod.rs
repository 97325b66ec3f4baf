pub mod compose;
pub mod flatten;
pub mod stride;
