use crate::mysql_client_wrapper::FromRow;
use crate::schema_reader::define_working_query;
use sqlx::mysql::MySqlRow;
use sqlx::Row;

#[derive(Debug, Eq, PartialEq)]
pub struct TablesResult {
    pub table_name: String,
}

impl FromRow for TablesResult {
    fn from_row(row: MySqlRow) -> crate::Result<Self> {
        Ok(TablesResult {
            table_name: row.try_get(0)?,
        })
    }
}

// Migration bookkeeping tables never appear in the dump.
//language=mysql
define_working_query!(
    get_tables,
    TablesResult,
    r#"
SELECT CAST(TABLE_NAME AS CHAR)
FROM INFORMATION_SCHEMA.TABLES
WHERE TABLE_SCHEMA = DATABASE()
  AND TABLE_TYPE = 'BASE TABLE'
  AND TABLE_NAME NOT IN ('ar_internal_metadata', 'schema_migrations')
ORDER BY TABLE_NAME;
"#
);
