//! SQL identifier quoting utilities
//!
//! Table, column and index names come from configuration and are spliced
//! into DDL, so they are always quoted before use.

/// Quote a SQL identifier to prevent injection.
///
/// Wraps the identifier in double quotes and escapes any embedded double quotes
/// by doubling them, following the SQL standard.
///
/// # Examples
/// ```
/// use rq_core::sql_utils::quote_ident;
/// assert_eq!(quote_ident("requisitions"), r#""requisitions""#);
/// assert_eq!(quote_ident(r#"my"table"#), r#""my""table""#);
/// ```
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Check that a declared column type is a plain SQL type name.
///
/// Accepts names like `INTEGER`, `TEXT`, `VARCHAR(64)` or `DOUBLE PRECISION`.
/// Anything carrying punctuation beyond a parenthesized size is rejected,
/// since the type is the one part of an `ADD COLUMN` that cannot be quoted.
pub fn is_valid_type_name(sql_type: &str) -> bool {
    let trimmed = sql_type.trim();
    if trimmed.is_empty() || !trimmed.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return false;
    }

    let (base, size) = match trimmed.find('(') {
        Some(pos) => (&trimmed[..pos], Some(&trimmed[pos..])),
        None => (trimmed, None),
    };

    let base_ok = base
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ' ');

    let size_ok = match size {
        None => true,
        Some(s) => {
            s.len() > 2
                && s.ends_with(')')
                && s[1..s.len() - 1]
                    .chars()
                    .all(|c| c.is_ascii_digit() || c == ',' || c == ' ')
        }
    };

    base_ok && size_ok
}

#[cfg(test)]
#[path = "sql_utils_test.rs"]
mod tests;
