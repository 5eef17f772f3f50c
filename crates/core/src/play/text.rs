//! Input normalization and output styling.

/// Whitespace-delimited tokens of `line`.
pub fn split_tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Keep only letters, `_`, `'` and `-`, then uppercase.
///
/// Punctuation-only tokens normalize to the empty string.
pub fn normalize_word(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || matches!(c, '_' | '\'' | '-'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Normalize each token, keeping positions aligned with the input.
pub fn normalize_words<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens.iter().map(|t| normalize_word(t.as_ref())).collect()
}

/// Index of the original token whose style generated word `i` borrows.
///
/// The last word maps to the last token, the first to the first, and
/// interior words to the same position clamped short of the last token.
fn reference_index(i: usize, num_words: usize, num_tokens: usize) -> usize {
    if i + 1 == num_words {
        num_tokens - 1
    } else if i == 0 {
        0
    } else {
        i.min(num_tokens.saturating_sub(2))
    }
}

/// Trailing run of non-letter characters, e.g. "," in "Hello," or "?!" in "what?!".
fn trailing_punctuation(token: &str) -> &str {
    let cut = token
        .char_indices()
        .rev()
        .take_while(|(_, c)| !c.is_ascii_alphabetic())
        .last()
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    &token[cut..]
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn style_word(word: &str, token: &str) -> String {
    let lower = word.to_lowercase();
    let mut styled = if token.chars().count() > 1 && token == token.to_uppercase() {
        lower.to_uppercase()
    } else if token.starts_with(|c: char| c.is_ascii_uppercase()) {
        capitalize(&lower)
    } else {
        lower
    };
    styled.push_str(trailing_punctuation(token));
    styled
}

/// Copy capitalization and trailing punctuation from `tokens` onto `words`.
///
/// Always returns one styled word per input word.
pub fn stylize<W, T>(words: &[W], tokens: &[T]) -> Vec<String>
where
    W: AsRef<str>,
    T: AsRef<str>,
{
    if tokens.is_empty() {
        return words.iter().map(|w| w.as_ref().to_lowercase()).collect();
    }
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let token = tokens[reference_index(i, words.len(), tokens.len())].as_ref();
            style_word(word.as_ref(), token)
        })
        .collect()
}
