use crate::quoting::escape_string;
use crate::{FastSchemaDumpError, Result};
use bigdecimal::BigDecimal;
use std::str::FromStr;

/// One column as reported by information_schema, with both the bare data
/// type and the full declared type (which carries display width and the
/// unsigned marker).
#[derive(Debug, Eq, PartialEq, Default)]
pub struct MysqlColumn {
    pub name: String,
    pub ordinal_position: i64,
    pub data_type: String,
    pub column_type: String,
    pub is_nullable: bool,
    pub default_value: Option<String>,
    pub character_maximum_length: Option<i64>,
    pub numeric_precision: Option<i64>,
    pub numeric_scale: Option<i64>,
    pub datetime_precision: Option<i64>,
    pub comment: String,
    pub collation: Option<String>,
}

impl MysqlColumn {
    /// The symbolic migration type for this column. `tinyint(1)` is the
    /// boolean synonym and wins over the general integer rule.
    pub fn migration_type(&self) -> &str {
        if self.column_type == "tinyint(1)" {
            return "boolean";
        }

        match self.data_type.as_str() {
            "varchar" | "char" => "string",
            "int" | "tinyint" | "smallint" | "mediumint" => "integer",
            "bigint" => "bigint",
            "text" | "tinytext" | "mediumtext" | "longtext" => "text",
            "datetime" | "timestamp" => "datetime",
            "date" => "date",
            "time" => "time",
            "decimal" => "decimal",
            "float" | "double" => "float",
            "json" => "json",
            "binary" | "varbinary" => "binary",
            "blob" | "tinyblob" | "mediumblob" | "longblob" => "binary",
            _ => self.data_type.as_str(),
        }
    }

    pub fn get_column_statement(&self) -> Result<String> {
        let mut line = format!("t.{} \"{}\"", self.migration_type(), self.name);

        if matches!(self.data_type.as_str(), "varchar" | "char") {
            if let Some(limit) = self.character_maximum_length {
                if limit != 255 {
                    line.push_str(&format!(", limit: {limit}"));
                }
            }
        }

        match self.data_type.as_str() {
            // tinyint(1) is a boolean and carries no limit
            "tinyint" if self.column_type != "tinyint(1)" => line.push_str(", limit: 1"),
            "smallint" => line.push_str(", limit: 2"),
            "mediumint" => line.push_str(", limit: 3"),
            _ => {}
        }

        match self.data_type.as_str() {
            "mediumtext" => line.push_str(", size: :medium"),
            "longtext" => line.push_str(", size: :long"),
            _ => {}
        }

        // The host defaults datetime precision to a non-zero value, so an
        // explicit zero from the catalog must be stated as nil.
        if self.data_type == "datetime" && self.datetime_precision == Some(0) {
            line.push_str(", precision: nil");
        }

        if self.data_type == "decimal" {
            if let Some(precision) = self.numeric_precision {
                line.push_str(&format!(", precision: {precision}"));
                if let Some(scale) = self.numeric_scale {
                    line.push_str(&format!(", scale: {scale}"));
                }
            }
        }

        if let Some(default) = self.format_default_value()? {
            line.push_str(&format!(", default: {default}"));
        }

        if !self.is_nullable {
            line.push_str(", null: false");
        }

        if !self.comment.is_empty() {
            line.push_str(&format!(", comment: \"{}\"", escape_string(&self.comment)));
        }

        if self.column_type.contains("unsigned") {
            line.push_str(", unsigned: true");
        }

        if let Some(collation) = &self.collation {
            if (self.data_type.contains("char") || self.data_type.contains("text"))
                && collation == "utf8mb4_bin"
            {
                line.push_str(&format!(", collation: \"{collation}\""));
            }
        }

        Ok(line)
    }

    /// Canonicalizes the raw catalog default into the literal the migration
    /// tool renders. Returns None when there is no default to emit.
    fn format_default_value(&self) -> Result<Option<String>> {
        let Some(default) = &self.default_value else {
            return Ok(None);
        };

        if default == "NULL" {
            return Ok(None);
        }

        // Boolean-shaped columns win over every type-based rule
        if self.column_type == "tinyint(1)" {
            let literal = if default == "1" { "true" } else { "false" };
            return Ok(Some(literal.to_string()));
        }

        let rendered = match self.data_type.as_str() {
            "varchar" | "char" | "text" => format!("\"{}\"", escape_string(default)),
            "int" | "tinyint" | "smallint" | "mediumint" | "bigint" => default.clone(),
            "datetime" | "timestamp" => {
                if default == "CURRENT_TIMESTAMP" {
                    "-> { \"CURRENT_TIMESTAMP\" }".to_string()
                } else {
                    format!("\"{default}\"")
                }
            }
            // The catalog allows precision up to 65, so the parse must be
            // arbitrary precision rather than a fixed-width decimal.
            "decimal" => {
                let value =
                    BigDecimal::from_str(default).map_err(|_| self.malformed_default(default))?;
                format!("\"{}\"", value.normalized())
            }
            "float" | "double" => {
                let value: f64 = default
                    .parse()
                    .map_err(|_| self.malformed_default(default))?;
                format!("\"{}\"", format_float(value))
            }
            "json" => {
                if default == "'[]'" {
                    "[]".to_string()
                } else {
                    "{}".to_string()
                }
            }
            _ => {
                if default.len() >= 2 && default.starts_with('\'') && default.ends_with('\'') {
                    format!("\"{}\"", &default[1..default.len() - 1])
                } else {
                    default.clone()
                }
            }
        };

        Ok(Some(rendered))
    }

    fn malformed_default(&self, value: &str) -> FastSchemaDumpError {
        FastSchemaDumpError::MalformedDefaultValue {
            column: self.name.clone(),
            data_type: self.data_type.clone(),
            value: value.to_string(),
        }
    }
}

/// Round-trips a float default the way the migration tool prints floats:
/// integral values keep a trailing `.0`, and magnitudes at or above 1e16 or
/// below 1e-4 switch to exponent notation with a signed two-digit exponent.
fn format_float(value: f64) -> String {
    if value.is_finite() && value != 0.0 && (value.abs() >= 1e16 || value.abs() < 1e-4) {
        let formatted = format!("{value:e}");
        if let Some((mantissa, exponent)) = formatted.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                let mantissa = if mantissa.contains('.') {
                    mantissa.to_string()
                } else {
                    format!("{mantissa}.0")
                };
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exponent.abs());
            }
        }
        return formatted;
    }

    let text = value.to_string();
    if text.contains('.') || !value.is_finite() {
        text
    } else {
        format!("{text}.0")
    }
}
