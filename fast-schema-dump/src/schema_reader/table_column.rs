use crate::models::MysqlColumn;
use crate::mysql_client_wrapper::FromRow;
use crate::schema_reader::define_working_query;
use sqlx::mysql::MySqlRow;
use sqlx::Row;

#[derive(Debug, Eq, PartialEq)]
pub struct TableColumnsResult {
    pub table_name: String,
    pub column_name: String,
    pub ordinal_position: i64,
    pub column_default: Option<String>,
    pub is_nullable: bool,
    pub data_type: String,
    pub character_maximum_length: Option<i64>,
    pub numeric_precision: Option<i64>,
    pub numeric_scale: Option<i64>,
    pub column_type: String,
    pub comment: String,
    pub datetime_precision: Option<i64>,
    pub collation_name: Option<String>,
}

impl FromRow for TableColumnsResult {
    fn from_row(row: MySqlRow) -> crate::Result<Self> {
        Ok(TableColumnsResult {
            table_name: row.try_get(0)?,
            column_name: row.try_get(1)?,
            ordinal_position: row.try_get(2)?,
            column_default: row.try_get(3)?,
            is_nullable: row.try_get::<i64, _>(4)? == 1,
            data_type: row.try_get(5)?,
            character_maximum_length: row.try_get(6)?,
            numeric_precision: row.try_get(7)?,
            numeric_scale: row.try_get(8)?,
            column_type: row.try_get(9)?,
            comment: row.try_get(10)?,
            datetime_precision: row.try_get(11)?,
            collation_name: row.try_get(12)?,
        })
    }
}

impl TableColumnsResult {
    pub fn to_mysql_column(&self) -> MysqlColumn {
        MysqlColumn {
            name: self.column_name.clone(),
            ordinal_position: self.ordinal_position,
            data_type: self.data_type.clone(),
            column_type: self.column_type.clone(),
            is_nullable: self.is_nullable,
            default_value: self.column_default.clone(),
            character_maximum_length: self.character_maximum_length,
            numeric_precision: self.numeric_precision,
            numeric_scale: self.numeric_scale,
            datetime_precision: self.datetime_precision,
            comment: self.comment.clone(),
            collation: self.collation_name.clone(),
        }
    }
}

// The casts pin every column to a plain char/signed representation; several
// information_schema columns otherwise come back with driver-hostile types
// such as unsigned bigint or utf8mb3 text.
//language=mysql
define_working_query!(
    get_columns,
    TableColumnsResult,
    r#"
SELECT CAST(TABLE_NAME AS CHAR),
       CAST(COLUMN_NAME AS CHAR),
       CAST(ORDINAL_POSITION AS SIGNED),
       CAST(COLUMN_DEFAULT AS CHAR),
       CAST(IF(IS_NULLABLE = 'YES', 1, 0) AS SIGNED),
       CAST(DATA_TYPE AS CHAR),
       CAST(CHARACTER_MAXIMUM_LENGTH AS SIGNED),
       CAST(NUMERIC_PRECISION AS SIGNED),
       CAST(NUMERIC_SCALE AS SIGNED),
       CAST(COLUMN_TYPE AS CHAR),
       CAST(COLUMN_COMMENT AS CHAR),
       CAST(DATETIME_PRECISION AS SIGNED),
       CAST(COLLATION_NAME AS CHAR)
FROM INFORMATION_SCHEMA.COLUMNS
WHERE TABLE_SCHEMA = DATABASE()
ORDER BY TABLE_NAME, ORDINAL_POSITION;
"#
);
