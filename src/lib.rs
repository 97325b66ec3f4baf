pub mod command_line;
pub mod convenience;
pub mod corpus;
pub mod formatting;
pub mod harness;
pub mod parsing;
pub mod scanning;
pub mod syntax_tree;
