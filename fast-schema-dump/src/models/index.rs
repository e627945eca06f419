use crate::quoting::escape_string;
use itertools::Itertools;

/// One index with its columns in sequence-in-index order. The index named
/// `PRIMARY` never reaches generic rendering; the table extracts it for the
/// primary-key clause.
#[derive(Debug, Eq, PartialEq, Default)]
pub struct MysqlIndex {
    pub name: String,
    pub columns: Vec<String>,
    pub unique: bool,
    /// Columns the catalog flags with the descending marker, in column order.
    pub descending_columns: Vec<String>,
    pub comment: String,
}

impl MysqlIndex {
    pub fn get_index_statement(&self) -> String {
        let mut line = "t.index ".to_string();

        if self.columns.len() == 1 {
            line.push_str(&format!("[\"{}\"]", self.columns[0]));
        } else {
            line.push_str(&format!(
                "[{}]",
                self.columns.iter().map(|c| format!("\"{c}\"")).join(", ")
            ));
        }

        line.push_str(&format!(", name: \"{}\"", self.name));

        if self.unique {
            line.push_str(", unique: true");
        }

        let descending = self
            .columns
            .iter()
            .filter(|c| self.descending_columns.contains(c))
            .collect_vec();

        if !descending.is_empty() {
            if self.columns.len() == 1 {
                line.push_str(", order: :desc");
            } else {
                // ascending columns are left out of the mapping entirely
                line.push_str(&format!(
                    ", order: {{ {} }}",
                    descending.iter().map(|c| format!("{c}: :desc")).join(", ")
                ));
            }
        }

        if !self.comment.is_empty() {
            line.push_str(&format!(", comment: \"{}\"", escape_string(&self.comment)));
        }

        line
    }
}
