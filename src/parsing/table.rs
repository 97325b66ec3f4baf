use {
    crate::syntax_tree::table::{Table, Value},
    pest::Parser as _,
    thiserror::Error,
};

#[derive(pest_derive::Parser)]
#[grammar = "parsing/table.pest"]
struct Grammar;

#[derive(Debug, Error)]
pub enum TableParseError {
    #[error(transparent)]
    Syntax(#[from] Box<pest::error::Error<Rule>>),

    #[error("line {line} has {found} fields but the header declares {expected} columns")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("the table does not contain a header row")]
    MissingHeader,
}

/// Parses a delimited text table: a header record of column names followed by
/// one data record per line, fields separated by commas. Blank lines are
/// skipped; every data record must match the header width.
pub struct TableParser;

impl crate::parsing::Parser for TableParser {
    type Node = Table;
    type Error = TableParseError;

    fn parse<S: AsRef<str>>(input: S) -> Result<Table, TableParseError> {
        let pairs = Grammar::parse(Rule::table, input.as_ref()).map_err(Box::new)?;

        let mut columns: Option<Vec<String>> = None;
        let mut rows = Vec::new();

        for record in pairs.flatten().filter(|pair| pair.as_rule() == Rule::record) {
            if record.as_str().is_empty() {
                continue;
            }

            let line = record.as_span().start_pos().line_col().0;
            let fields: Vec<&str> = record.into_inner().map(|field| field.as_str()).collect();

            match &columns {
                None => columns = Some(fields.iter().map(|field| field.to_string()).collect()),
                Some(header) => {
                    if fields.len() != header.len() {
                        return Err(TableParseError::Ragged {
                            line,
                            expected: header.len(),
                            found: fields.len(),
                        });
                    }
                    rows.push(fields.into_iter().map(Value::infer).collect());
                }
            }
        }

        let columns = columns.ok_or(TableParseError::MissingHeader)?;
        Ok(Table { columns, rows })
    }
}
