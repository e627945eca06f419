use crate::helpers::balanced_parentheses;
use crate::quoting::escape_string;

/// Prefix of constraint names the migration tool generates itself; those
/// names are never restated in the output.
const GENERATED_NAME_PREFIX: &str = "chk_rails_";

#[derive(Debug, Eq, PartialEq, Default)]
pub struct MysqlCheckConstraint {
    pub name: String,
    /// Raw clause text as stored in the catalog.
    pub clause: String,
}

impl MysqlCheckConstraint {
    pub fn get_check_constraint_statement(&self) -> String {
        let mut clause = self.clause.clone();

        // The catalog wraps the whole clause in one extra pair of
        // parentheses. Only strip them when the interior stays balanced;
        // `(a > 0) and (b > 0)` owns its outer characters.
        if clause.starts_with('(') && clause.ends_with(')') && clause.len() >= 2 {
            let inner = &clause[1..clause.len() - 1];
            if balanced_parentheses(inner) {
                clause = inner.to_string();
            }
        }

        // The canonical form does not escape single quotes
        let clause = clause.replace("\\'", "'");

        let mut line = format!("t.check_constraint \"{}\"", escape_string(&clause));

        if !self.name.starts_with(GENERATED_NAME_PREFIX) {
            line.push_str(&format!(", name: \"{}\"", self.name));
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraint(name: &str, clause: &str) -> MysqlCheckConstraint {
        MysqlCheckConstraint {
            name: name.to_string(),
            clause: clause.to_string(),
        }
    }

    #[test]
    fn strips_redundant_outer_parentheses() {
        let ck = constraint("chk_rails_abc123", "((a > 0) and (b > 0))");
        assert_eq!(
            ck.get_check_constraint_statement(),
            "t.check_constraint \"(a > 0) and (b > 0)\""
        );
    }

    #[test]
    fn keeps_outer_characters_of_separate_groups() {
        let ck = constraint("chk_rails_abc123", "(a > 0) and (b > 0)");
        assert_eq!(
            ck.get_check_constraint_statement(),
            "t.check_constraint \"(a > 0) and (b > 0)\""
        );
    }

    #[test]
    fn unescapes_single_quotes() {
        let ck = constraint("chk_rails_abc123", "(`status` in (\\'draft\\',\\'live\\'))");
        assert_eq!(
            ck.get_check_constraint_statement(),
            "t.check_constraint \"`status` in ('draft','live')\""
        );
    }

    #[test]
    fn restates_custom_constraint_names_only() {
        let ck = constraint("price_positive", "(`price` > 0)");
        assert_eq!(
            ck.get_check_constraint_statement(),
            "t.check_constraint \"`price` > 0\", name: \"price_positive\""
        );

        let ck = constraint("chk_rails_5c8ed3a2d8", "(`price` > 0)");
        assert_eq!(
            ck.get_check_constraint_statement(),
            "t.check_constraint \"`price` > 0\""
        );
    }
}
