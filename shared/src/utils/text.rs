// Text helpers for names and addresses typed into forms.

/// Upper-cases the first character of every word and leaves everything else untouched.
///
/// A word starts at a word character (alphanumeric or `_`) that begins the string or
/// follows a non-word character. Existing casing and runs of whitespace are preserved:
/// `"hElLo WoRLd"` becomes `"HElLo WoRLd"`.
pub fn capitalize_words(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut previous_is_word = false;

    for c in s.chars() {
        let is_word = is_word_char(c);
        if is_word && !previous_is_word {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        previous_is_word = is_word;
    }

    result
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
