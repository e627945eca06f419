use crate::models::MysqlSchema;
use crate::mysql_client_wrapper::MysqlConnectionWrapper;
use crate::schema_reader::SchemaReader;
use crate::Result;
use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tracing::instrument;

/// A schema definition sink. The document is rendered fully in memory first
/// so a failing catalog read never leaves partial output behind.
pub struct SchemaFile<F: AsyncWrite + Unpin + Send + Sync> {
    file: F,
}

impl<F: AsyncWrite + Unpin + Send + Sync> SchemaFile<F> {
    pub async fn new(path: &str) -> Result<SchemaFile<BufWriter<File>>> {
        let file = File::create(path).await?;
        Ok(SchemaFile {
            file: BufWriter::new(file),
        })
    }

    pub fn from_writer(writer: F) -> Self {
        SchemaFile { file: writer }
    }

    pub async fn write_schema(&mut self, schema: &MysqlSchema) -> Result {
        let text = schema.to_schema_definition()?;
        self.file.write_all(text.as_bytes()).await?;
        self.file.flush().await?;

        Ok(())
    }
}

/// Strategy seam for producing the schema definition text, so callers can
/// swap in a different dumper when comparing outputs.
#[async_trait]
pub trait SchemaDumper {
    async fn dump_to_string(&self, connection: &MysqlConnectionWrapper) -> Result<String>;
}

/// The bulk-query dumper. One pass over information_schema instead of
/// per-table round trips.
pub struct FastSchemaDumper;

#[async_trait]
impl SchemaDumper for FastSchemaDumper {
    async fn dump_to_string(&self, connection: &MysqlConnectionWrapper) -> Result<String> {
        dump_schema_to_string(connection).await
    }
}

#[instrument(skip_all)]
pub async fn dump_schema_to_string(connection: &MysqlConnectionWrapper) -> Result<String> {
    let reader = SchemaReader::new(connection);
    let schema = reader.introspect_schema().await?;

    schema.to_schema_definition()
}

#[instrument(skip_all)]
pub async fn dump_schema<F: AsyncWrite + Unpin + Send + Sync>(
    connection: &MysqlConnectionWrapper,
    target: &mut SchemaFile<F>,
) -> Result {
    let reader = SchemaReader::new(connection);
    let schema = reader.introspect_schema().await?;

    target.write_schema(&schema).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default;
    use crate::models::{
        MysqlCheckConstraint, MysqlColumn, MysqlForeignKey, MysqlIndex, MysqlTable,
        MysqlTableOptions,
    };
    use indoc::indoc;
    use similar_asserts::assert_eq;

    fn blog_schema() -> MysqlSchema {
        let posts = MysqlTable {
            name: "posts".to_string(),
            options: MysqlTableOptions {
                collation: Some("utf8mb4_general_ci".to_string()),
                comment: String::new(),
            },
            columns: vec![
                MysqlColumn {
                    name: "id".to_string(),
                    ordinal_position: 1,
                    data_type: "bigint".to_string(),
                    column_type: "bigint".to_string(),
                    ..default()
                },
                MysqlColumn {
                    name: "user_id".to_string(),
                    ordinal_position: 2,
                    data_type: "bigint".to_string(),
                    column_type: "bigint".to_string(),
                    is_nullable: false,
                    ..default()
                },
                MysqlColumn {
                    name: "title".to_string(),
                    ordinal_position: 3,
                    data_type: "varchar".to_string(),
                    column_type: "varchar(255)".to_string(),
                    character_maximum_length: Some(255),
                    is_nullable: false,
                    ..default()
                },
                MysqlColumn {
                    name: "body".to_string(),
                    ordinal_position: 4,
                    data_type: "mediumtext".to_string(),
                    column_type: "mediumtext".to_string(),
                    is_nullable: true,
                    ..default()
                },
                MysqlColumn {
                    name: "published".to_string(),
                    ordinal_position: 5,
                    data_type: "tinyint".to_string(),
                    column_type: "tinyint(1)".to_string(),
                    is_nullable: true,
                    default_value: Some("0".to_string()),
                    ..default()
                },
                MysqlColumn {
                    name: "rating".to_string(),
                    ordinal_position: 6,
                    data_type: "decimal".to_string(),
                    column_type: "decimal(10,2)".to_string(),
                    is_nullable: true,
                    numeric_precision: Some(10),
                    numeric_scale: Some(2),
                    default_value: Some("1.50".to_string()),
                    ..default()
                },
            ],
            primary_key: Some(MysqlIndex {
                name: "PRIMARY".to_string(),
                columns: vec!["id".to_string()],
                unique: true,
                ..default()
            }),
            indexes: vec![MysqlIndex {
                name: "index_posts_on_user_id".to_string(),
                columns: vec!["user_id".to_string()],
                ..default()
            }],
            check_constraints: vec![MysqlCheckConstraint {
                name: "chk_rails_7f3d1a9b2c".to_string(),
                clause: "(`rating` >= 0)".to_string(),
            }],
        };

        let users = MysqlTable {
            name: "users".to_string(),
            options: MysqlTableOptions {
                collation: Some("utf8mb4_general_ci".to_string()),
                comment: String::new(),
            },
            columns: vec![
                MysqlColumn {
                    name: "id".to_string(),
                    ordinal_position: 1,
                    data_type: "bigint".to_string(),
                    column_type: "bigint unsigned".to_string(),
                    ..default()
                },
                MysqlColumn {
                    name: "email".to_string(),
                    ordinal_position: 2,
                    data_type: "varchar".to_string(),
                    column_type: "varchar(255)".to_string(),
                    character_maximum_length: Some(255),
                    is_nullable: false,
                    ..default()
                },
                MysqlColumn {
                    name: "name".to_string(),
                    ordinal_position: 3,
                    data_type: "varchar".to_string(),
                    column_type: "varchar(100)".to_string(),
                    character_maximum_length: Some(100),
                    is_nullable: true,
                    ..default()
                },
                MysqlColumn {
                    name: "created_at".to_string(),
                    ordinal_position: 4,
                    data_type: "datetime".to_string(),
                    column_type: "datetime".to_string(),
                    datetime_precision: Some(0),
                    is_nullable: false,
                    ..default()
                },
            ],
            primary_key: Some(MysqlIndex {
                name: "PRIMARY".to_string(),
                columns: vec!["id".to_string()],
                unique: true,
                ..default()
            }),
            indexes: vec![MysqlIndex {
                name: "index_users_on_email".to_string(),
                columns: vec!["email".to_string()],
                unique: true,
                ..default()
            }],
            check_constraints: vec![],
        };

        MysqlSchema {
            tables: vec![posts, users],
            foreign_keys: vec![MysqlForeignKey {
                table_name: "posts".to_string(),
                constraint_name: "fk_rails_5b5ddfd518".to_string(),
                column: "user_id".to_string(),
                referenced_table: "users".to_string(),
                referenced_column: "id".to_string(),
                delete_rule: "NO ACTION".to_string(),
                update_rule: "NO ACTION".to_string(),
            }],
        }
    }

    #[test]
    fn renders_the_full_document() {
        let expected = indoc! {r#"
            create_table "posts", charset: "utf8mb4", collation: "utf8mb4_general_ci", force: :cascade do |t|
              t.bigint "user_id", null: false
              t.string "title", null: false
              t.text "body", size: :medium
              t.boolean "published", default: false
              t.decimal "rating", precision: 10, scale: 2, default: "1.5"
              t.index ["user_id"], name: "index_posts_on_user_id"
              t.check_constraint "`rating` >= 0"
            end

            create_table "users", id: { type: :bigint, unsigned: true }, charset: "utf8mb4", collation: "utf8mb4_general_ci", force: :cascade do |t|
              t.string "email", null: false
              t.string "name", limit: 100
              t.datetime "created_at", precision: nil, null: false
              t.index ["email"], name: "index_users_on_email", unique: true
            end

            add_foreign_key "posts", "users"
        "#};

        let actual = blog_schema().to_schema_definition().unwrap();

        assert_eq!(actual, expected.trim_end());
    }

    #[test]
    fn rendering_is_idempotent() {
        let first = blog_schema().to_schema_definition().unwrap();
        let second = blog_schema().to_schema_definition().unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn writes_the_document_to_a_sink() {
        let mut target = SchemaFile::from_writer(Vec::new());
        target.write_schema(&blog_schema()).await.unwrap();

        let written = String::from_utf8(target.file).unwrap();
        assert_eq!(written, blog_schema().to_schema_definition().unwrap());
    }
}
