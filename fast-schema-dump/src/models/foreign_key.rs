use crate::helpers::singularize;

/// Prefix of foreign key names the migration tool generates itself.
const GENERATED_NAME_PREFIX: &str = "fk_rails_";

/// One foreign key collapsed to a single source column. The catalog exposes
/// one row per referenced column; composite keys keep only the first, which
/// is what the reference dumper renders.
#[derive(Debug, Eq, PartialEq, Default)]
pub struct MysqlForeignKey {
    pub table_name: String,
    pub constraint_name: String,
    pub column: String,
    pub referenced_table: String,
    pub referenced_column: String,
    /// Referential rules carried for completeness, not rendered.
    pub delete_rule: String,
    pub update_rule: String,
}

impl MysqlForeignKey {
    pub fn get_add_foreign_key_statement(&self) -> String {
        let mut line = format!(
            "add_foreign_key \"{}\", \"{}\"",
            self.table_name, self.referenced_table
        );

        // The migration tool infers the column from the referenced table
        // name, so only one of column/name ever needs restating.
        let inferred_column = format!("{}_id", singularize(&self.referenced_table));

        if self.column != inferred_column {
            line.push_str(&format!(", column: \"{}\"", self.column));
        } else if !self.constraint_name.starts_with(GENERATED_NAME_PREFIX) {
            line.push_str(&format!(", name: \"{}\"", self.constraint_name));
        }

        line
    }
}
