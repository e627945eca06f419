use crate::helpers::StringExt;
use crate::models::check_constraint::MysqlCheckConstraint;
use crate::models::column::MysqlColumn;
use crate::models::index::MysqlIndex;
use crate::quoting::escape_string;
use crate::Result;
use itertools::Itertools;

/// The index name MySQL reserves for the primary key.
pub const PRIMARY_KEY_INDEX_NAME: &str = "PRIMARY";

/// The underlying type the migration tool gives primary keys when nothing is
/// overridden.
const DEFAULT_PRIMARY_KEY_TYPE: &str = "bigint";

#[derive(Debug, Eq, PartialEq, Default)]
pub struct MysqlTable {
    pub name: String,
    pub options: MysqlTableOptions,
    /// Ordered by ordinal position.
    pub columns: Vec<MysqlColumn>,
    /// The extracted `PRIMARY` index, if the table has one.
    pub primary_key: Option<MysqlIndex>,
    /// Remaining indexes, ordered by name.
    pub indexes: Vec<MysqlIndex>,
    pub check_constraints: Vec<MysqlCheckConstraint>,
}

#[derive(Debug, Eq, PartialEq, Default)]
pub struct MysqlTableOptions {
    pub collation: Option<String>,
    pub comment: String,
}

impl MysqlTable {
    /// Renders the whole `create_table ... do |t| ... end` block, one output
    /// line per entry.
    pub fn write_lines(&self, out: &mut Vec<String>) -> Result<()> {
        out.push(self.get_create_table_line());

        // the id column is owned by the primary-key clause
        for column in self.columns.iter().filter(|c| c.name != "id") {
            out.push(format!("  {}", column.get_column_statement()?));
        }

        for index in self.sorted_indexes() {
            out.push(format!("  {}", index.get_index_statement()));
        }

        let mut check_constraints = self.check_constraints.iter().collect_vec();
        check_constraints.sort_by(|a, b| a.clause.cmp(&b.clause));
        for check_constraint in check_constraints {
            out.push(format!(
                "  {}",
                check_constraint.get_check_constraint_statement()
            ));
        }

        out.push("end".to_string());

        Ok(())
    }

    fn get_create_table_line(&self) -> String {
        let mut line = format!("create_table \"{}\"", self.name);

        match &self.primary_key {
            Some(pk) if pk.columns.len() == 1 && pk.columns[0] == "id" => {
                if let Some(id_column) = self.columns.iter().find(|c| c.name == "id") {
                    let mut id_options: Vec<String> = Vec::new();

                    if id_column.data_type != DEFAULT_PRIMARY_KEY_TYPE {
                        id_options.push(format!("type: :{}", id_column.data_type));
                    }

                    if !id_column.comment.is_empty() {
                        id_options
                            .push(format!("comment: \"{}\"", escape_string(&id_column.comment)));
                    }

                    if id_column.column_type.contains("unsigned") {
                        id_options.push("unsigned: true".to_string());
                    }

                    // other overrides force the bag, so the default type is
                    // restated first
                    if !id_options.is_empty() && id_column.data_type == DEFAULT_PRIMARY_KEY_TYPE {
                        id_options.insert(0, format!("type: :{DEFAULT_PRIMARY_KEY_TYPE}"));
                    }

                    if !id_options.is_empty() {
                        line.push_str(", id: { ");
                        line.push_join(", ", &id_options);
                        line.push_str(" }");
                    }
                }
            }
            // no primary key, composite keys and non-id single columns all
            // collapse to the same override
            _ => line.push_str(", id: false"),
        }

        if let Some(collation) = &self.options.collation {
            let charset = collation.split('_').next().unwrap_or(collation);
            line.push_str(&format!(", charset: \"{charset}\""));
            line.push_str(&format!(", collation: \"{collation}\""));
        }

        if !self.options.comment.is_empty() {
            line.push_str(&format!(
                ", comment: \"{}\"",
                escape_string(&self.options.comment)
            ));
        }

        line.push_str(", force: :cascade do |t|");

        line
    }

    /// Indexes sort lexicographically by their column-name tuple, with
    /// shorter tuples padded using a sentinel that sorts after every real
    /// column name. That pushes `["a"]` after `["a","b"]` but before
    /// anything starting with `"b"`. The sentinel repeats the highest code
    /// point past the 64-character identifier limit so even a name made of
    /// that code point still sorts before it.
    fn sorted_indexes(&self) -> Vec<&MysqlIndex> {
        let max_columns = self
            .indexes
            .iter()
            .map(|i| i.columns.len())
            .max()
            .unwrap_or(1);

        let sentinel = char::MAX.to_string().repeat(100);

        let mut indexes = self.indexes.iter().collect_vec();
        indexes.sort_by_cached_key(|index| {
            let mut key = index.columns.clone();
            key.resize(max_columns, sentinel.clone());
            (key, index.name.clone())
        });

        indexes
    }
}
