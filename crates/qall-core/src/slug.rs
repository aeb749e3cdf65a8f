//! Field name ↔ property key conversion.
//!
//! Schema property keys are machine-safe slugs derived from the
//! human-readable field name. The reverse direction (`humanize`) is a
//! best-effort display convenience, not an inverse: "API Key" slugifies to
//! `api_key`, which humanizes back as "Api Key".

/// Derive a machine-safe property key from a field name.
///
/// Lowercases the input, collapses every run of non-alphanumeric characters
/// to a single underscore, and trims leading/trailing underscores. May
/// return an empty string (e.g. for a name of pure punctuation), in which
/// case the field is not representable as a schema property.
///
/// # Example
///
/// ```
/// use qall_core::slug::slugify;
///
/// assert_eq!(slugify("Customer Name"), "customer_name");
/// assert_eq!(slugify("  API Key!! "), "api_key");
/// assert_eq!(slugify("???"), "");
/// ```
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect::<String>()
        .split('_')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Derive a display name from a property key.
///
/// Replaces underscores with spaces, collapses whitespace, and uppercases
/// the first letter of each word. Lossy by design: capitalization beyond
/// the first letter is not recoverable from a slug.
///
/// # Example
///
/// ```
/// use qall_core::slug::humanize;
///
/// assert_eq!(humanize("customer_name"), "Customer Name");
/// assert_eq!(humanize("api_key"), "Api Key");
/// ```
pub fn humanize(key: &str) -> String {
    key.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
