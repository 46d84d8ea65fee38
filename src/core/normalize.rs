/// Canonicalize a raw candidate into a parameter name.
///
/// Strips exactly one leading `/`, then truncates at the first `.`.
/// Case and whitespace are left untouched, and an empty input yields an
/// empty string.
///
/// ```
/// use paramscan::core::normalize;
///
/// assert_eq!(normalize("/login.php"), "login");
/// assert_eq!(normalize("a.b.c"), "a");
/// ```
pub fn normalize(raw: &str) -> String {
    let stripped = raw.strip_prefix('/').unwrap_or(raw);
    match stripped.split_once('.') {
        Some((prefix, _)) => prefix.to_string(),
        None => stripped.to_string(),
    }
}
