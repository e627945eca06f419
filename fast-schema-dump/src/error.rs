use thiserror::Error;

#[derive(Error, Debug)]
pub enum FastSchemaDumpError {
    #[error("Error from mysql: `{0}`")]
    MysqlError(#[from] sqlx::Error),

    #[error("Error from mysql: `{source}` when executing query: `{query}`")]
    MysqlErrorWithQuery {
        query: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Invalid number of results returned from query. Expected `{expected}`, got `{actual}`")]
    InvalidNumberOfResults { actual: usize, expected: usize },

    #[error("Malformed default value `{value}` for {data_type} column `{column}`")]
    MalformedDefaultValue {
        column: String,
        data_type: String,
        value: String,
    },

    #[error("io error: `{0}`")]
    IoError(#[from] std::io::Error),
}

pub type Result<T = ()> = std::result::Result<T, FastSchemaDumpError>;
