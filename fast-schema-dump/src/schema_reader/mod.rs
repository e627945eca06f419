use crate::models::{
    MysqlCheckConstraint, MysqlForeignKey, MysqlIndex, MysqlSchema, MysqlTable, MysqlTableOptions,
    PRIMARY_KEY_INDEX_NAME,
};
use crate::mysql_client_wrapper::MysqlConnectionWrapper;
use crate::schema_reader::check_constraint::CheckConstraintResult;
use crate::schema_reader::foreign_key::ForeignKeyResult;
use crate::schema_reader::index::IndexStatisticsResult;
use crate::schema_reader::table::TablesResult;
use crate::schema_reader::table_column::TableColumnsResult;
use crate::schema_reader::table_options::TableOptionsResult;
use crate::Result;
use itertools::Itertools;
use std::collections::{HashMap, HashSet};
use tracing::instrument;

mod check_constraint;
mod foreign_key;
mod index;
mod table;
mod table_column;
mod table_options;

pub struct SchemaReader<'a> {
    connection: &'a MysqlConnectionWrapper,
}

impl SchemaReader<'_> {
    pub fn new(connection: &MysqlConnectionWrapper) -> SchemaReader {
        SchemaReader { connection }
    }

    /// Reads the whole catalog in a handful of bulk queries and aggregates
    /// the rows into one renderable schema. Queries run sequentially on the
    /// single connection so each one sees the pool in a settled state.
    #[instrument(skip_all)]
    pub async fn introspect_schema(&self) -> Result<MysqlSchema> {
        let tables = self.get_tables().await?;
        let columns = self.get_columns().await?;
        let indexes = self.get_indexes().await?;
        let table_options = self.get_table_options().await?;
        let foreign_keys = self.get_foreign_keys().await?;

        // The check constraint view only exists on MySQL 8.0.16 and later.
        // Older servers degrade to an empty set.
        let check_constraints = if self.supports_check_constraints().await? {
            self.get_check_constraints().await?
        } else {
            vec![]
        };

        Ok(Self::aggregate(
            tables,
            columns,
            indexes,
            table_options,
            foreign_keys,
            check_constraints,
        ))
    }

    #[instrument(skip_all)]
    async fn supports_check_constraints(&self) -> Result<bool> {
        let count: i64 = self
            .connection
            .get_single_result(
                r#"
SELECT COUNT(*)
FROM INFORMATION_SCHEMA.TABLES
WHERE TABLE_SCHEMA = 'information_schema'
  AND TABLE_NAME = 'CHECK_CONSTRAINTS';
"#,
            )
            .await?;

        Ok(count > 0)
    }

    fn aggregate(
        tables: Vec<TablesResult>,
        columns: Vec<TableColumnsResult>,
        indexes: Vec<IndexStatisticsResult>,
        table_options: Vec<TableOptionsResult>,
        foreign_keys: Vec<ForeignKeyResult>,
        check_constraints: Vec<CheckConstraintResult>,
    ) -> MysqlSchema {
        let mut columns_by_table: HashMap<String, Vec<_>> = HashMap::new();
        for column in columns {
            columns_by_table
                .entry(column.table_name.clone())
                .or_default()
                .push(column.to_mysql_column());
        }
        for columns in columns_by_table.values_mut() {
            columns.sort_by_key(|c| c.ordinal_position);
        }

        let mut indexes_by_table: HashMap<String, HashMap<String, IndexAccumulator>> =
            HashMap::new();
        for row in indexes {
            let accumulator = indexes_by_table
                .entry(row.table_name)
                .or_default()
                .entry(row.index_name)
                .or_insert_with(|| IndexAccumulator {
                    columns: Vec::new(),
                    unique: row.unique,
                    comment: row.comment,
                });

            accumulator
                .columns
                .push((row.seq_in_index, row.column_name, row.descending));
        }

        let mut options_by_table: HashMap<String, MysqlTableOptions> = table_options
            .into_iter()
            .map(|row| {
                (
                    row.table_name,
                    MysqlTableOptions {
                        collation: row.collation,
                        comment: row.comment,
                    },
                )
            })
            .collect();

        let mut check_constraints_by_table: HashMap<String, Vec<MysqlCheckConstraint>> =
            HashMap::new();
        for row in check_constraints {
            check_constraints_by_table
                .entry(row.table_name)
                .or_default()
                .push(MysqlCheckConstraint {
                    name: row.constraint_name,
                    clause: row.check_clause,
                });
        }

        // The catalog exposes one row per referenced column. Composite keys
        // keep only the first column for each (table, constraint) pair.
        let mut seen_constraints = HashSet::new();
        let mut all_foreign_keys = Vec::new();
        for fk in foreign_keys {
            if seen_constraints.insert((fk.table_name.clone(), fk.constraint_name.clone())) {
                all_foreign_keys.push(MysqlForeignKey {
                    table_name: fk.table_name,
                    constraint_name: fk.constraint_name,
                    column: fk.column_name,
                    referenced_table: fk.referenced_table_name,
                    referenced_column: fk.referenced_column_name,
                    delete_rule: fk.delete_rule,
                    update_rule: fk.update_rule,
                });
            }
        }

        let mut schema = MysqlSchema::default();

        let table_names = tables.into_iter().map(|t| t.table_name).sorted();
        for table_name in table_names {
            let mut index_map = indexes_by_table.remove(&table_name).unwrap_or_default();

            let primary_key = index_map
                .remove(PRIMARY_KEY_INDEX_NAME)
                .map(|accumulator| accumulator.build(PRIMARY_KEY_INDEX_NAME.to_string()));

            let indexes = index_map
                .into_iter()
                .sorted_by(|a, b| a.0.cmp(&b.0))
                .map(|(name, accumulator)| accumulator.build(name))
                .collect();

            schema.tables.push(MysqlTable {
                columns: columns_by_table.remove(&table_name).unwrap_or_default(),
                options: options_by_table.remove(&table_name).unwrap_or_default(),
                primary_key,
                indexes,
                check_constraints: check_constraints_by_table
                    .remove(&table_name)
                    .unwrap_or_default(),
                name: table_name,
            });
        }

        schema.foreign_keys = all_foreign_keys;

        schema
    }
}

struct IndexAccumulator {
    /// (sequence in index, column name, descending flag)
    columns: Vec<(i64, String, bool)>,
    unique: bool,
    comment: String,
}

impl IndexAccumulator {
    fn build(mut self, name: String) -> MysqlIndex {
        self.columns.sort_by_key(|(seq, _, _)| *seq);

        MysqlIndex {
            name,
            descending_columns: self
                .columns
                .iter()
                .filter(|(_, _, descending)| *descending)
                .map(|(_, column, _)| column.clone())
                .collect(),
            columns: self
                .columns
                .into_iter()
                .map(|(_, column, _)| column)
                .collect(),
            unique: self.unique,
            comment: self.comment,
        }
    }
}

macro_rules! define_working_query {
    ($fn_name:ident, $result:ident, $query:literal) => {
        impl $crate::schema_reader::SchemaReader<'_> {
            #[tracing::instrument(skip_all)]
            pub(in crate::schema_reader) async fn $fn_name(&self) -> $crate::Result<Vec<$result>> {
                self.connection.get_results($query).await
            }
        }
    };
}

pub(crate) use define_working_query;
