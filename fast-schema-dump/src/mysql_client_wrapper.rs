use crate::Result;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::{Decode, MySql, Type};

/// Thin wrapper around a sqlx MySQL pool that decodes query results into
/// typed row structs.
pub struct MysqlConnectionWrapper {
    pool: MySqlPool,
}

impl MysqlConnectionWrapper {
    /// Connects with a single pooled connection. The engine issues its
    /// catalog queries sequentially, so one connection also gives the most
    /// consistent snapshot the catalog can offer without a transaction.
    pub async fn new(connection_string: &str) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect(connection_string)
            .await?;

        Ok(MysqlConnectionWrapper { pool })
    }

    /// Wraps an externally managed pool.
    pub fn from_pool(pool: MySqlPool) -> Self {
        MysqlConnectionWrapper { pool }
    }

    pub async fn get_results<T: FromRow>(&self, sql: &str) -> Result<Vec<T>> {
        let rows = sqlx::query(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| crate::FastSchemaDumpError::MysqlErrorWithQuery {
                source: e,
                query: sql.to_string(),
            })?;

        let mut output = Vec::with_capacity(rows.len());

        for row in rows.into_iter() {
            output.push(T::from_row(row)?);
        }

        Ok(output)
    }

    pub async fn get_result<T: FromRow>(&self, sql: &str) -> Result<T> {
        let results = self.get_results(sql).await?;
        if results.len() != 1 {
            return Err(crate::FastSchemaDumpError::InvalidNumberOfResults {
                actual: results.len(),
                expected: 1,
            });
        }

        // Safe, we have just checked the length of the vector
        let r = results.into_iter().next().unwrap();

        Ok(r)
    }

    pub async fn get_single_result<T>(&self, sql: &str) -> Result<T>
    where
        T: for<'r> Decode<'r, MySql> + Type<MySql>,
    {
        let result = self.get_result::<(T,)>(sql).await?;
        Ok(result.0)
    }
}

pub trait FromRow: Sized {
    fn from_row(row: MySqlRow) -> Result<Self>;
}

impl<T1> FromRow for (T1,)
where
    T1: for<'r> Decode<'r, MySql> + Type<MySql>,
{
    fn from_row(row: MySqlRow) -> Result<Self> {
        use sqlx::Row;
        Ok((row.try_get(0)?,))
    }
}
