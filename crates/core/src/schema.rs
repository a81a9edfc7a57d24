//! Input schemas for members and workout sessions.
//!
//! A schema takes the raw JSON body of a write request and either produces a
//! fully typed input struct or a [`FieldErrors`] map describing every field
//! that was missing or malformed. Unknown keys are ignored.
//!
//! This module has **zero database dependencies**.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use serde_json::{Map, Value};
use validator::Validate;

use crate::types::DbId;

pub const MISSING: &str = "Missing data for required field.";
pub const NULL: &str = "Field may not be null.";
pub const INVALID_INTEGER: &str = "Not a valid integer.";
pub const OUT_OF_RANGE: &str = "Number out of range.";
pub const INVALID_STRING: &str = "Not a valid string.";
pub const INVALID_DATE: &str = "Not a valid date.";
pub const INVALID_TIME: &str = "Not a valid time.";
pub const INVALID_INPUT_TYPE: &str = "Invalid input type.";
pub const NAME_LENGTH: &str = "Longer than maximum length 255.";

/// Key used for errors that concern the body as a whole.
pub const SCHEMA_KEY: &str = "_schema";

// ---------------------------------------------------------------------------
// Field errors
// ---------------------------------------------------------------------------

/// Field name -> human-readable messages, serialized as a bare JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    fn merge_validator(&mut self, errors: validator::ValidationErrors) {
        for (field, errs) in errors.field_errors() {
            for err in errs {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                self.push(field.to_string(), message);
            }
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{field}: {}", messages.join(" "))?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Typed inputs
// ---------------------------------------------------------------------------

/// Validated member fields. Used for both create and full replacement.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct MemberInput {
    pub id: DbId,
    #[validate(length(max = 255, message = "Longer than maximum length 255."))]
    pub name: String,
    pub age: i32,
}

/// Validated workout session fields. Used for both create and full replacement.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct WorkoutSessionInput {
    pub session_id: DbId,
    pub member_id: DbId,
    pub session_date: NaiveDate,
    pub session_time: NaiveTime,
    pub activity: String,
}

/// Load a member from a raw request body.
pub fn load_member(raw: &Value) -> Result<MemberInput, FieldErrors> {
    let mut reader = FieldReader::new(raw)?;

    let id = reader.integer("id");
    let name = reader.string("name");
    let age = reader.int32("age");

    match (id, name, age) {
        (Some(id), Some(name), Some(age)) if reader.errors.is_empty() => {
            reader.finish(MemberInput { id, name, age })
        }
        _ => Err(reader.errors),
    }
}

/// Load a workout session from a raw request body.
pub fn load_workout_session(raw: &Value) -> Result<WorkoutSessionInput, FieldErrors> {
    let mut reader = FieldReader::new(raw)?;

    let session_id = reader.integer("session_id");
    let member_id = reader.integer("member_id");
    let session_date = reader.date("session_date");
    let session_time = reader.time("session_time");
    let activity = reader.string("activity");

    match (session_id, member_id, session_date, session_time, activity) {
        (
            Some(session_id),
            Some(member_id),
            Some(session_date),
            Some(session_time),
            Some(activity),
        ) if reader.errors.is_empty() => reader.finish(WorkoutSessionInput {
            session_id,
            member_id,
            session_date,
            session_time,
            activity,
        }),
        _ => Err(reader.errors),
    }
}

// ---------------------------------------------------------------------------
// Field coercion
// ---------------------------------------------------------------------------

/// Pulls required fields out of a JSON object, collecting errors as it goes.
struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    errors: FieldErrors,
}

impl<'a> FieldReader<'a> {
    fn new(raw: &'a Value) -> Result<Self, FieldErrors> {
        match raw.as_object() {
            Some(object) => Ok(Self {
                object,
                errors: FieldErrors::new(),
            }),
            None => {
                let mut errors = FieldErrors::new();
                errors.push(SCHEMA_KEY, INVALID_INPUT_TYPE);
                Err(errors)
            }
        }
    }

    /// Run the struct-level `validator` rules once every field has coerced.
    fn finish<T: Validate>(mut self, input: T) -> Result<T, FieldErrors> {
        if let Err(errors) = input.validate() {
            self.errors.merge_validator(errors);
        }
        if self.errors.is_empty() {
            Ok(input)
        } else {
            Err(self.errors)
        }
    }

    /// Return the non-null value for `field`, or record why there is none.
    fn required(&mut self, field: &str) -> Option<&'a Value> {
        match self.object.get(field) {
            None => {
                self.errors.push(field, MISSING);
                None
            }
            Some(Value::Null) => {
                self.errors.push(field, NULL);
                None
            }
            Some(value) => Some(value),
        }
    }

    fn integer(&mut self, field: &str) -> Option<i64> {
        let value = self.required(field)?;
        match coerce_integer(value) {
            Ok(n) => Some(n),
            Err(message) => {
                self.errors.push(field, message);
                None
            }
        }
    }

    fn int32(&mut self, field: &str) -> Option<i32> {
        let n = self.integer(field)?;
        match i32::try_from(n) {
            Ok(n) => Some(n),
            Err(_) => {
                self.errors.push(field, OUT_OF_RANGE);
                None
            }
        }
    }

    fn string(&mut self, field: &str) -> Option<String> {
        match self.required(field)? {
            Value::String(s) => Some(s.clone()),
            _ => {
                self.errors.push(field, INVALID_STRING);
                None
            }
        }
    }

    fn date(&mut self, field: &str) -> Option<NaiveDate> {
        let parsed = self.required(field)?.as_str().and_then(parse_date);
        if parsed.is_none() {
            self.errors.push(field, INVALID_DATE);
        }
        parsed
    }

    fn time(&mut self, field: &str) -> Option<NaiveTime> {
        let parsed = self.required(field)?.as_str().and_then(parse_time);
        if parsed.is_none() {
            self.errors.push(field, INVALID_TIME);
        }
        parsed
    }
}

/// Accepts JSON integers, integral floats, and decimal strings.
fn coerce_integer(value: &Value) -> Result<i64, &'static str> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            if n.is_u64() {
                return Err(OUT_OF_RANGE);
            }
            let f = n.as_f64().ok_or(INVALID_INTEGER)?;
            if f.fract() != 0.0 {
                Err(INVALID_INTEGER)
            } else if f < i64::MIN as f64 || f >= i64::MAX as f64 {
                Err(OUT_OF_RANGE)
            } else {
                Ok(f as i64)
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| INVALID_INTEGER),
        _ => Err(INVALID_INTEGER),
    }
}

/// ISO 8601 calendar date, `YYYY-MM-DD` with every component zero-padded.
fn parse_date(s: &str) -> Option<NaiveDate> {
    if !matches_shape(s.as_bytes(), b"dddd-dd-dd") {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// ISO 8601 time of day: `HH:MM`, `HH:MM:SS`, or `HH:MM:SS.ffffff`.
fn parse_time(s: &str) -> Option<NaiveTime> {
    let bytes = s.as_bytes();
    match bytes.len() {
        5 if matches_shape(bytes, b"dd:dd") => NaiveTime::parse_from_str(s, "%H:%M").ok(),
        8 if matches_shape(bytes, b"dd:dd:dd") => NaiveTime::parse_from_str(s, "%H:%M:%S").ok(),
        n if n > 9
            && matches_shape(&bytes[..9], b"dd:dd:dd.")
            && bytes[9..].iter().all(u8::is_ascii_digit) =>
        {
            NaiveTime::parse_from_str(s, "%H:%M:%S%.f").ok()
        }
        _ => None,
    }
}

/// Check `s` against a pattern where `d` is an ASCII digit and any other
/// byte must match literally. chrono alone accepts unpadded components.
fn matches_shape(s: &[u8], pattern: &[u8]) -> bool {
    s.len() == pattern.len()
        && s.iter().zip(pattern).all(|(&b, &p)| match p {
            b'd' => b.is_ascii_digit(),
            _ => b == p,
        })
}
