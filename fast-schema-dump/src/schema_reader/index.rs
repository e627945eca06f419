use crate::mysql_client_wrapper::FromRow;
use crate::schema_reader::define_working_query;
use sqlx::mysql::MySqlRow;
use sqlx::Row;

/// One row of the statistics view, one per (index, column) pair.
#[derive(Debug, Eq, PartialEq)]
pub struct IndexStatisticsResult {
    pub table_name: String,
    pub index_name: String,
    pub unique: bool,
    pub column_name: String,
    pub seq_in_index: i64,
    pub comment: String,
    /// The statistics view marks descending columns with collation 'D'.
    pub descending: bool,
}

impl FromRow for IndexStatisticsResult {
    fn from_row(row: MySqlRow) -> crate::Result<Self> {
        Ok(IndexStatisticsResult {
            table_name: row.try_get(0)?,
            index_name: row.try_get(1)?,
            unique: row.try_get::<i64, _>(2)? == 0,
            column_name: row.try_get(3)?,
            seq_in_index: row.try_get(4)?,
            comment: row.try_get(5)?,
            descending: row.try_get::<i64, _>(6)? == 1,
        })
    }
}

//language=mysql
define_working_query!(
    get_indexes,
    IndexStatisticsResult,
    r#"
SELECT CAST(s.TABLE_NAME AS CHAR),
       CAST(s.INDEX_NAME AS CHAR),
       CAST(s.NON_UNIQUE AS SIGNED),
       CAST(s.COLUMN_NAME AS CHAR),
       CAST(s.SEQ_IN_INDEX AS SIGNED),
       CAST(s.INDEX_COMMENT AS CHAR),
       CAST(IF(s.COLLATION = 'D', 1, 0) AS SIGNED)
FROM INFORMATION_SCHEMA.STATISTICS s
WHERE s.TABLE_SCHEMA = DATABASE()
ORDER BY s.TABLE_NAME, s.INDEX_NAME, s.SEQ_IN_INDEX;
"#
);
