/// Upper-cases the first character of `s`, leaving the rest untouched.
///
/// Uses the default Unicode uppercase mapping, so a single character may
/// expand (`"ßa"` becomes `"SSa"`). Empty input yields an empty string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
