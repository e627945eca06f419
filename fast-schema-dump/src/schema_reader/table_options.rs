use crate::mysql_client_wrapper::FromRow;
use crate::schema_reader::define_working_query;
use sqlx::mysql::MySqlRow;
use sqlx::Row;

#[derive(Debug, Eq, PartialEq)]
pub struct TableOptionsResult {
    pub table_name: String,
    pub collation: Option<String>,
    pub comment: String,
}

impl FromRow for TableOptionsResult {
    fn from_row(row: MySqlRow) -> crate::Result<Self> {
        Ok(TableOptionsResult {
            table_name: row.try_get(0)?,
            collation: row.try_get(1)?,
            comment: row.try_get(2)?,
        })
    }
}

//language=mysql
define_working_query!(
    get_table_options,
    TableOptionsResult,
    r#"
SELECT CAST(TABLE_NAME AS CHAR),
       CAST(TABLE_COLLATION AS CHAR),
       CAST(TABLE_COMMENT AS CHAR)
FROM INFORMATION_SCHEMA.TABLES
WHERE TABLE_SCHEMA = DATABASE()
  AND TABLE_TYPE = 'BASE TABLE';
"#
);
