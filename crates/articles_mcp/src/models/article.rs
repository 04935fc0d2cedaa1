use rmcp::schemars;
use serde::Serialize;
use serde_json::{Map, Value};

/// Upstream key carrying the author's name; exposed as `author`.
pub const AUTHOR_SOURCE_FIELD: &str = "name";
const AUTHOR_FIELD: &str = "author";

/// A blog article as exposed by the upstream API
#[derive(Debug, Clone, PartialEq, Serialize, schemars::JsonSchema)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    /// URL to article image
    pub image: String,
    /// URL to article page
    pub url: String,
    /// Article author name
    pub author: String,
    /// Publication timestamp (ISO 8601)
    pub time: String,
    /// Estimated reading time
    pub readtime: String,
    pub category: i64,
    pub description: String,
    /// Number of shares
    #[serde(rename = "shareCount")]
    pub share_count: i64,
    /// Number of views/checks
    #[serde(rename = "checkCount")]
    pub check_count: i64,
}

/// Why a single upstream record was rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArticleValidationError {
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },
    #[error("field '{field}' must be {expected}, found {found}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}

impl Article {
    /// Map one untyped upstream record onto the article schema.
    pub fn from_value(value: &Value) -> Result<Self, ArticleValidationError> {
        match value {
            Value::Object(record) => Self::from_record(record),
            other => Err(ArticleValidationError::NotAnObject {
                found: json_type(other),
            }),
        }
    }

    pub fn from_record(record: &Map<String, Value>) -> Result<Self, ArticleValidationError> {
        let fields = RecordFields(record);

        Ok(Self {
            id: fields.integer("id")?,
            title: fields.string("title")?,
            subtitle: fields.string("subtitle")?,
            image: fields.string("image")?,
            url: fields.string("url")?,
            author: fields.author()?,
            time: fields.string("time")?,
            readtime: fields.string("readtime")?,
            category: fields.integer("category")?,
            description: fields.string("description")?,
            share_count: fields.integer("shareCount")?,
            check_count: fields.integer("checkCount")?,
        })
    }
}

struct RecordFields<'a>(&'a Map<String, Value>);

impl RecordFields<'_> {
    fn required(&self, field: &'static str) -> Result<&Value, ArticleValidationError> {
        self.0
            .get(field)
            .ok_or(ArticleValidationError::MissingField { field })
    }

    fn string(&self, field: &'static str) -> Result<String, ArticleValidationError> {
        expect_string(field, self.required(field)?)
    }

    fn integer(&self, field: &'static str) -> Result<i64, ArticleValidationError> {
        expect_integer(field, self.required(field)?)
    }

    // The canonical name is accepted as a fallback; the source name wins.
    fn author(&self) -> Result<String, ArticleValidationError> {
        match self.0.get(AUTHOR_SOURCE_FIELD) {
            Some(value) => expect_string(AUTHOR_SOURCE_FIELD, value),
            None => match self.0.get(AUTHOR_FIELD) {
                Some(value) => expect_string(AUTHOR_FIELD, value),
                None => Err(ArticleValidationError::MissingField {
                    field: AUTHOR_SOURCE_FIELD,
                }),
            },
        }
    }
}

fn expect_string(field: &'static str, value: &Value) -> Result<String, ArticleValidationError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| ArticleValidationError::InvalidType {
            field,
            expected: "a string",
            found: json_type(value).to_string(),
        })
}

/// Integers, integral floats and integer strings convert without ambiguity.
fn expect_integer(field: &'static str, value: &Value) -> Result<i64, ArticleValidationError> {
    let converted = match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };

    converted.ok_or_else(|| ArticleValidationError::InvalidType {
        field,
        expected: "an integer",
        found: match value {
            Value::Number(_) | Value::String(_) => format!("{} {}", json_type(value), value),
            _ => json_type(value).to_string(),
        },
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
