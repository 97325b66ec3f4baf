use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

pub mod table;

pub trait Node: Clone + Debug + Eq + PartialEq + FromStr + Display {}
