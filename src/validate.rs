use crate::config;
use crate::model::raw::RawStory;
use crate::model::story::Story;
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// A rejection is local to one record: the record is dropped and its
/// siblings in the same batch are unaffected. This error never crosses the
/// accumulator boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field '{0}'")]
    Missing(&'static str),
    #[error("field '{0}' is empty")]
    Empty(&'static str),
    #[error("field '{0}' exceeds {1} characters")]
    TooLong(&'static str, usize),
    #[error("field '{0}' is not an integer")]
    NotAnInteger(&'static str),
    #[error("field '{0}' is below minimum {1}")]
    BelowMinimum(&'static str, i64),
    #[error("field 'uri' is not an absolute URI: {0}")]
    BadUri(String),
}

/// Per-field constraints for one canonical story record.
#[derive(Debug, Clone)]
pub struct StorySchema {
    pub max_string_length: usize,
    pub min_points: i64,
    pub min_comments: i64,
}

impl Default for StorySchema {
    fn default() -> Self {
        StorySchema {
            max_string_length: config::STRING_MAX_LENGTH,
            min_points: config::MIN_POINTS,
            min_comments: config::MIN_COMMENTS,
        }
    }
}

impl StorySchema {
    pub fn validate(&self, raw: &RawStory) -> Result<Story, ValidationError> {
        let title = self.bounded_string(raw.title.as_deref(), "title")?;
        let uri = self.absolute_uri(raw.uri.as_deref())?;
        let author = self.bounded_string(raw.author.as_deref(), "author")?;
        let points = bounded_integer(raw.points.as_ref(), "points", self.min_points)?;
        let comments = bounded_integer(raw.comments.as_ref(), "comments", self.min_comments)?;

        Ok(Story {
            title,
            uri,
            author,
            points,
            comments,
        })
    }

    fn bounded_string(
        &self,
        value: Option<&str>,
        field: &'static str,
    ) -> Result<String, ValidationError> {
        let value = value.ok_or(ValidationError::Missing(field))?;
        if value.is_empty() {
            return Err(ValidationError::Empty(field));
        }
        if value.chars().count() > self.max_string_length {
            return Err(ValidationError::TooLong(field, self.max_string_length));
        }
        Ok(value.to_string())
    }

    fn absolute_uri(&self, value: Option<&str>) -> Result<String, ValidationError> {
        let value = value.ok_or(ValidationError::Missing("uri"))?;
        if value.is_empty() {
            return Err(ValidationError::Empty("uri"));
        }
        // Url::parse only accepts absolute URIs; relative links fail here.
        Url::parse(value).map_err(|_| ValidationError::BadUri(value.to_string()))?;
        Ok(value.to_string())
    }
}

/// Integer coercion: JSON integers pass through, whole floats and numeric
/// strings are converted, anything else is a type rejection.
fn coerce_integer(value: &Value, field: &'static str) -> Result<i64, ValidationError> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64().filter(|f| f.fract() == 0.0) {
                Ok(f as i64)
            } else {
                Err(ValidationError::NotAnInteger(field))
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::NotAnInteger(field)),
        _ => Err(ValidationError::NotAnInteger(field)),
    }
}

fn bounded_integer(
    value: Option<&Value>,
    field: &'static str,
    minimum: i64,
) -> Result<i64, ValidationError> {
    let value = value.ok_or(ValidationError::Missing(field))?;
    let parsed = coerce_integer(value, field)?;
    if parsed < minimum {
        return Err(ValidationError::BelowMinimum(field, minimum));
    }
    Ok(parsed)
}
