//! Custom template filters.

use minijinja::{Error, ErrorKind, Value};

/// `format_each(iterable, s)` — formats every element of `iterable` with the
/// single-placeholder format string `s`, preserving input order.
///
/// Placeholder rules cover the `str.format` subset templates actually use:
/// `{}` and `{0}` substitute the element, `{{` and `}}` are brace escapes.
/// Any other replacement field, or an unbalanced brace, is an error.
pub fn format_each(values: Value, fmt: String) -> Result<Value, Error> {
    let mut out = Vec::new();
    for item in values.try_iter()? {
        out.push(substitute(&fmt, &item)?);
    }
    Ok(Value::from(out))
}

fn substitute(fmt: &str, value: &Value) -> Result<String, Error> {
    let mut out = String::with_capacity(fmt.len());
    let mut chars = fmt.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut field = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) => field.push(ch),
                        None => {
                            return Err(Error::new(
                                ErrorKind::InvalidOperation,
                                "unmatched '{' in format string",
                            ))
                        }
                    }
                }
                if !(field.is_empty() || field == "0") {
                    return Err(Error::new(
                        ErrorKind::InvalidOperation,
                        format!("unsupported replacement field '{{{field}}}' in format string"),
                    ));
                }
                out.push_str(&value.to_string());
            }
            '}' => {
                return Err(Error::new(
                    ErrorKind::InvalidOperation,
                    "single '}' encountered in format string",
                ))
            }
            other => out.push(other),
        }
    }
    Ok(out)
}
