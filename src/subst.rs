//! Placeholder substitution for location strings.
//!
//! # Responsibilities
//! - Expand `${name}` placeholders against a caller-supplied lookup
//! - Support `${name:-default}` default values
//! - Leave undefined placeholders verbatim (never fail)

/// Expand `${name}` placeholders in `raw` using `lookup`.
///
/// `${name:-default}` substitutes `default` when `name` is undefined.
/// An undefined placeholder without a default is copied through
/// unchanged, as is an unterminated `${`.
pub fn expand<F>(raw: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            // Unterminated placeholder: keep the remainder as-is.
            out.push_str(&rest[start..]);
            return out;
        };
        let body = &after[..end];
        let (name, default) = match body.split_once(":-") {
            Some((name, default)) => (name, Some(default)),
            None => (body, None),
        };
        match lookup(name) {
            Some(value) => out.push_str(&value),
            None => match default {
                Some(default) => out.push_str(default),
                None => {
                    out.push_str("${");
                    out.push_str(body);
                    out.push('}');
                }
            },
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

/// Expand placeholders from the process environment.
pub fn expand_env(raw: &str) -> String {
    expand(raw, |name| std::env::var(name).ok())
}
