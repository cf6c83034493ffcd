// src/csv.rs
//
// Delimited text in both directions. Quoting follows the usual rules:
// a cell containing the separator, a quote, CR or LF is wrapped in quotes
// and inner quotes are doubled. Rows end in a bare `\n`.

use std::io::{self, Write};
use std::mem::take;

/* ---------------- Writing ---------------- */

fn needs_quotes(cell: &str, sep: char) -> bool {
    cell.contains(sep) || cell.contains(['"', '\n', '\r'])
}

/// Write one row (cells joined by `sep`, terminated by `\n`).
pub fn write_row<W, S>(mut w: W, row: &[S], sep: char) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{sep}")?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    writeln!(w)
}

/* ---------------- Parsing ---------------- */

/// Split delimited text into rows of cells. Tolerates CRLF and quoted
/// cells spanning lines; blank lines are dropped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut cell = s!();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    cell.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            c if c == sep && !in_quotes => row.push(take(&mut cell)),
            '\r' | '\n' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(take(&mut cell));
                flush_row(&mut rows, &mut row);
            }
            _ => cell.push(ch),
        }
    }

    // Trailing row without a final newline (or with unterminated quotes)
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        flush_row(&mut rows, &mut row);
    }
    rows
}

fn flush_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    let blank = row.len() == 1 && row[0].is_empty();
    if blank {
        row.clear();
    } else {
        rows.push(take(row));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_str(row: &[&str]) -> String {
        let mut buf = Vec::new();
        write_row(&mut buf, row, ',').unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_cells_are_not_quoted() {
        assert_eq!(row_str(&["text", "author"]), "text,author\n");
    }

    #[test]
    fn special_cells_are_quoted() {
        assert_eq!(
            row_str(&["“Hi,” she said", "Jane \"JJ\" Doe", "a\nb"]),
            "\"“Hi,” she said\",\"Jane \"\"JJ\"\" Doe\",\"a\nb\"\n"
        );
    }

    #[test]
    fn parse_handles_crlf_blank_lines_and_quotes() {
        let text = "a,b\r\n\r\n\"x,1\",\"say \"\"hi\"\"\"\n\"multi\nline\",z";
        let rows = parse_rows(text, ',');
        assert_eq!(
            rows,
            vec![
                vec!["a", "b"],
                vec!["x,1", "say \"hi\""],
                vec!["multi\nline", "z"],
            ]
        );
    }
}
