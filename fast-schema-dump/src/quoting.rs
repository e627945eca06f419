/// Escapes a free-text value for embedding in a double-quoted schema.rb
/// string literal.
///
/// Backslashes must be escaped before anything else so the later
/// substitutions never re-escape the backslashes they introduce themselves.
pub fn escape_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quotes_and_control_characters() {
        assert_eq!(escape_string("plain"), "plain");
        assert_eq!(escape_string("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_string("line1\nline2"), "line1\\nline2");
        assert_eq!(escape_string("a\rb\tc"), "a\\rb\\tc");
    }

    #[test]
    fn escapes_backslash_before_everything_else() {
        // A literal backslash-n must not collapse into an escaped newline.
        assert_eq!(escape_string("\\n"), "\\\\n");
        assert_eq!(escape_string("\\\""), "\\\\\\\"");
    }
}
