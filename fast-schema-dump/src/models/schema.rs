use crate::models::foreign_key::MysqlForeignKey;
use crate::models::table::MysqlTable;
use crate::Result;
use itertools::Itertools;

/// The fully aggregated schema, ready to render. Tables are ordered by name;
/// foreign keys are the flattened global list across all tables.
#[derive(Debug, Eq, PartialEq, Default)]
pub struct MysqlSchema {
    pub tables: Vec<MysqlTable>,
    pub foreign_keys: Vec<MysqlForeignKey>,
}

impl MysqlSchema {
    /// Renders the complete schema definition document. Table blocks are
    /// separated by blank lines, with one blank line between the last table
    /// and the foreign key statements.
    pub fn to_schema_definition(&self) -> Result<String> {
        let mut lines: Vec<String> = Vec::new();

        for table in &self.tables {
            table.write_lines(&mut lines)?;
            lines.push(String::new());
        }

        let mut foreign_keys = self.foreign_keys.iter().collect_vec();
        foreign_keys.sort_by(|a, b| {
            (&a.table_name, &a.referenced_table, &a.column)
                .cmp(&(&b.table_name, &b.referenced_table, &b.column))
        });

        for foreign_key in foreign_keys {
            lines.push(foreign_key.get_add_foreign_key_statement());
        }

        Ok(lines.join("\n"))
    }
}
