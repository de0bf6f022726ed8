/// Turn an identifier such as `my-part_name` into a display title
/// (`My Part Name`).
///
/// `-` and `_` count as spaces, runs of whitespace collapse, and each word
/// gets an upper-case first letter with the rest lower-cased.
pub fn variable_name_to_title(text: &str) -> String {
    text.replace(|c: char| c == '-' || c == '_', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
