use {
    crate::syntax_tree::table::{Table, Value},
    itertools::Itertools as _,
    std::fmt::{self, Display, Formatter},
};

pub struct Format<'a, N>(pub &'a N);

impl Display for Format<'_, Value> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Empty => Ok(()),
        }
    }
}

/// Renders a table as a column-aligned dump, one line for the header and one
/// per row, meant to be diffed by eye in failure reports.
impl Display for Format<'_, Table> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let table = self.0;

        let mut widths: Vec<usize> = table.columns.iter().map(String::len).collect();
        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, value)| {
                        let cell = Format(value).to_string();
                        widths[i] = widths[i].max(cell.len());
                        cell
                    })
                    .collect()
            })
            .collect();

        let line = |cells: Vec<String>| {
            cells
                .into_iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:>width$}"))
                .join("  ")
        };

        writeln!(f, "{}", line(table.columns.clone()))?;
        for row in rows {
            writeln!(f, "{}", line(row))?;
        }

        Ok(())
    }
}
