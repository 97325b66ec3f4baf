use {
    crate::{
        formatting::table::default::Format,
        parsing::{table::TableParser, Parser as _},
        syntax_tree::Node,
    },
    anyhow::{Context, Result},
    std::{fmt, path::Path, str::FromStr},
};

/// A single cell of a table, inferred from the raw field text.
///
/// Inference tries integers first, then floats; a blank field is `Empty`,
/// anything else is kept verbatim as `Text`.
#[derive(Clone, Debug)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
    Empty,
}

impl Value {
    pub fn infer(field: &str) -> Value {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            Value::Empty
        } else if let Ok(n) = trimmed.parse() {
            Value::Integer(n)
        } else if let Ok(x) = trimmed.parse() {
            Value::Float(x)
        } else {
            Value::Text(field.to_string())
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            // total order so that tables stay `Eq` and comparison is
            // deterministic even in the presence of NaN cells
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b).is_eq(),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Empty, Value::Empty) => true,
            _ => false,
        }
    }
}

impl Eq for Value {}

/// A labeled table: a header of column names and rows of cells, every row
/// exactly as wide as the header.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Table> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("could not read file `{}`", path.display()))?;
        content
            .parse()
            .with_context(|| format!("could not parse file `{}`", path.display()))
    }
}

impl Node for Table {}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Format(self))
    }
}

impl FromStr for Table {
    type Err = <TableParser as crate::parsing::Parser>::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableParser::parse(s)
    }
}
