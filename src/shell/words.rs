/// Splits a command segment into whitespace-delimited words.
pub fn split_words(segment: &str) -> Vec<String> {
    segment.split_whitespace().map(str::to_string).collect()
}
