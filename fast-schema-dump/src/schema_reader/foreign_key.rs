use crate::mysql_client_wrapper::FromRow;
use crate::schema_reader::define_working_query;
use sqlx::mysql::MySqlRow;
use sqlx::Row;

/// One row per referenced column; composite keys produce several rows with
/// the same constraint name, ordered by their position in the key.
#[derive(Debug, Eq, PartialEq)]
pub struct ForeignKeyResult {
    pub table_name: String,
    pub constraint_name: String,
    pub column_name: String,
    pub referenced_table_name: String,
    pub referenced_column_name: String,
    pub delete_rule: String,
    pub update_rule: String,
}

impl FromRow for ForeignKeyResult {
    fn from_row(row: MySqlRow) -> crate::Result<Self> {
        Ok(ForeignKeyResult {
            table_name: row.try_get(0)?,
            constraint_name: row.try_get(1)?,
            column_name: row.try_get(2)?,
            referenced_table_name: row.try_get(3)?,
            referenced_column_name: row.try_get(4)?,
            delete_rule: row.try_get(5)?,
            update_rule: row.try_get(6)?,
        })
    }
}

//language=mysql
define_working_query!(
    get_foreign_keys,
    ForeignKeyResult,
    r#"
SELECT CAST(kcu.TABLE_NAME AS CHAR),
       CAST(kcu.CONSTRAINT_NAME AS CHAR),
       CAST(kcu.COLUMN_NAME AS CHAR),
       CAST(kcu.REFERENCED_TABLE_NAME AS CHAR),
       CAST(kcu.REFERENCED_COLUMN_NAME AS CHAR),
       CAST(rc.DELETE_RULE AS CHAR),
       CAST(rc.UPDATE_RULE AS CHAR)
FROM INFORMATION_SCHEMA.KEY_COLUMN_USAGE kcu
         JOIN INFORMATION_SCHEMA.REFERENTIAL_CONSTRAINTS rc
              ON kcu.CONSTRAINT_SCHEMA = rc.CONSTRAINT_SCHEMA
                  AND kcu.CONSTRAINT_NAME = rc.CONSTRAINT_NAME
WHERE kcu.TABLE_SCHEMA = DATABASE()
  AND kcu.REFERENCED_TABLE_NAME IS NOT NULL
ORDER BY kcu.TABLE_NAME, kcu.CONSTRAINT_NAME, kcu.ORDINAL_POSITION;
"#
);
