use crate::mysql_client_wrapper::FromRow;
use crate::schema_reader::define_working_query;
use sqlx::mysql::MySqlRow;
use sqlx::Row;

#[derive(Debug, Eq, PartialEq)]
pub struct CheckConstraintResult {
    pub constraint_name: String,
    pub table_name: String,
    pub check_clause: String,
}

impl FromRow for CheckConstraintResult {
    fn from_row(row: MySqlRow) -> crate::Result<Self> {
        Ok(CheckConstraintResult {
            constraint_name: row.try_get(0)?,
            table_name: row.try_get(1)?,
            check_clause: row.try_get(2)?,
        })
    }
}

//language=mysql
define_working_query!(
    get_check_constraints,
    CheckConstraintResult,
    r#"
SELECT CAST(tc.CONSTRAINT_NAME AS CHAR),
       CAST(tc.TABLE_NAME AS CHAR),
       CAST(cc.CHECK_CLAUSE AS CHAR)
FROM INFORMATION_SCHEMA.TABLE_CONSTRAINTS tc
         JOIN INFORMATION_SCHEMA.CHECK_CONSTRAINTS cc
              ON tc.CONSTRAINT_SCHEMA = cc.CONSTRAINT_SCHEMA
                  AND tc.CONSTRAINT_NAME = cc.CONSTRAINT_NAME
WHERE tc.TABLE_SCHEMA = DATABASE()
  AND tc.CONSTRAINT_TYPE = 'CHECK'
ORDER BY tc.TABLE_NAME, tc.CONSTRAINT_NAME;
"#
);
