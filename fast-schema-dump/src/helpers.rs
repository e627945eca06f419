pub(crate) trait StringExt {
    fn push_join(&mut self, separator: &str, items: impl IntoIterator<Item = impl AsRef<str>>);
}

impl StringExt for String {
    fn push_join(&mut self, separator: &str, items: impl IntoIterator<Item = impl AsRef<str>>) {
        for (idx, v) in items.into_iter().enumerate() {
            if idx > 0 {
                self.push_str(separator);
            }
            self.push_str(v.as_ref());
        }
    }
}

/// Singularizes a table name the way the migration tool infers foreign key
/// column names. Intentionally covers only the rules the reference dumper
/// applies, not a full inflection library.
pub(crate) fn singularize(word: &str) -> String {
    if word == "news" {
        // news is both singular and plural
        word.to_string()
    } else if let Some(root) = word.strip_suffix("ies") {
        format!("{root}y")
    } else if word.ends_with("ses") {
        word[..word.len() - 2].to_string()
    } else if let Some(root) = word.strip_suffix('s') {
        root.to_string()
    } else {
        word.to_string()
    }
}

pub(crate) fn balanced_parentheses(text: &str) -> bool {
    let mut depth: i32 = 0;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singularizes_table_names() {
        assert_eq!(singularize("users"), "user");
        assert_eq!(singularize("posts"), "post");
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("statuses"), "status");
        assert_eq!(singularize("news"), "news");
        assert_eq!(singularize("staff"), "staff");
    }

    #[test]
    fn detects_balanced_parentheses() {
        assert!(balanced_parentheses("(a > 0) and (b > 0)"));
        assert!(balanced_parentheses("a > 0"));
        assert!(balanced_parentheses(""));
        assert!(!balanced_parentheses("a > 0) and (b > 0"));
        assert!(!balanced_parentheses("(a > 0"));
    }

    #[test]
    fn push_join_inserts_separators_between_items() {
        let mut s = String::from("t.index ");
        s.push_join(", ", ["\"a\"", "\"b\""]);
        assert_eq!(s, "t.index \"a\", \"b\"");
    }
}
