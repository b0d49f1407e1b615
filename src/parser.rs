//! Best-effort CSV parsing for workout exports
//!
//! The first line is the header, every later line is one row. Inside a
//! double-quoted span commas are literal; each `"` only toggles the quote
//! state, so `""` is not an escaped quote. Short rows are padded with empty
//! strings and extra cells are ignored. Nothing here fails.

use crate::models::RawRow;

/// Parse CSV text into rows keyed by header name.
///
/// Text with fewer than two lines (no data rows) yields an empty vec.
pub fn parse_csv(text: &str) -> Vec<RawRow> {
  let mut lines = text.trim().split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l));

  let header_line = match lines.next() {
    Some(line) => line,
    None => return Vec::new(),
  };

  let headers: Vec<String> = header_line
    .split(',')
    .map(|h| strip_quote_pair(h).to_string())
    .collect();

  lines
    .map(|line| {
      let values = split_line(line);
      headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
          let value = values.get(idx).map(String::as_str).unwrap_or("");
          (header.clone(), value.to_string())
        })
        .collect::<RawRow>()
    })
    .collect()
}

/// Split a data line on commas that sit outside quotes
pub fn split_line(line: &str) -> Vec<String> {
  let mut values = Vec::new();
  let mut current = String::new();
  let mut in_quotes = false;

  for ch in line.chars() {
    match ch {
      '"' => in_quotes = !in_quotes,
      ',' if !in_quotes => {
        values.push(strip_quote_pair(&current).to_string());
        current.clear();
      }
      _ => current.push(ch),
    }
  }
  values.push(strip_quote_pair(&current).to_string());

  values
}

/// Remove one leading and one trailing `"` if present
fn strip_quote_pair(value: &str) -> &str {
  let value = value.strip_prefix('"').unwrap_or(value);
  value.strip_suffix('"').unwrap_or(value)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
