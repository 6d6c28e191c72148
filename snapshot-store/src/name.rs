//! Container-name derivation from raw query parameters.
//!
//! MongoDB database names may not contain `>` or `<`, which show up in
//! star-range filters like `>1000`. The codec concatenates the query
//! parameters and escapes the first comparison operator it finds.

/// Derives a storage-legal container name for a query identity.
///
/// Concatenates `language + query + stars` (empty fields contribute
/// nothing), then escapes the first `>` as `gr`, or failing that the first
/// `<` as `lo`. Only the first occurrence is replaced, and the `>` branch
/// wins even when a `<` appears earlier in the string; a filter containing
/// several comparison operators is therefore not fully sanitized. Both
/// quirks are long-standing observable behavior and are kept as-is.
///
/// The function is total and deterministic; the empty tuple maps to the
/// empty string.
pub fn container_name(language: &str, query: &str, stars: &str) -> String {
    let mut raw = String::with_capacity(language.len() + query.len() + stars.len());
    raw.push_str(language);
    raw.push_str(query);
    raw.push_str(stars);

    if raw.contains('>') {
        return raw.replacen('>', "gr", 1);
    }
    if raw.contains('<') {
        return raw.replacen('<', "lo", 1);
    }
    raw
}
