//! Per-field input validation for the entry form.

use strum_macros::{AsRefStr, EnumIter, IntoStaticStr};
use thiserror::Error;

pub const TASK_MAX_CHARS: usize = 255;
pub const SCORE_MIN: u8 = 1;
pub const SCORE_MAX: u8 = 10;

/// The form's input fields, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, AsRefStr, IntoStaticStr)]
pub enum Field {
    #[default]
    Task,
    Alertness,
    Energy,
}

impl Field {
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Task => "What am I doing?",
            Field::Alertness => "How mentally alert do I feel?",
            Field::Energy => "How energetic do I feel?",
        }
    }

    pub fn next(&self) -> Field {
        match self {
            Field::Task => Field::Alertness,
            Field::Alertness => Field::Energy,
            Field::Energy => Field::Task,
        }
    }

    pub fn prev(&self) -> Field {
        match self {
            Field::Task => Field::Energy,
            Field::Alertness => Field::Task,
            Field::Energy => Field::Alertness,
        }
    }

    /// Score fields only take an optional sign and digits.
    pub fn accepts(&self, c: char) -> bool {
        match self {
            Field::Task => !c.is_control(),
            Field::Alertness | Field::Energy => c.is_ascii_digit() || c == '-' || c == '+',
        }
    }
}

/// Why a field's current value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task must not be empty.")]
    EmptyTask,
    #[error("Task must be at most {max} characters.")]
    TaskTooLong { max: usize },
    #[error("{field} must be a valid integer.")]
    NotAnInteger { field: &'static str },
    #[error("{field} must be between {min} and {max}.")]
    OutOfRange {
        field: &'static str,
        min: u8,
        max: u8,
    },
}

/// Task text must be between 1 and 255 characters long.
pub fn validate_task(input: &str) -> Result<&str, ValidationError> {
    match input.chars().count() {
        0 => Err(ValidationError::EmptyTask),
        n if n > TASK_MAX_CHARS => Err(ValidationError::TaskTooLong {
            max: TASK_MAX_CHARS,
        }),
        _ => Ok(input),
    }
}

/// Scores must be whole numbers between 1 and 10.
pub fn validate_score(field: Field, input: &str) -> Result<u8, ValidationError> {
    let name: &'static str = field.into();
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotAnInteger { field: name })?;
    if !(i64::from(SCORE_MIN)..=i64::from(SCORE_MAX)).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: name,
            min: SCORE_MIN,
            max: SCORE_MAX,
        });
    }
    Ok(value as u8)
}

/// Validates `input` as the value of `field`.
pub fn validate(field: Field, input: &str) -> Result<(), ValidationError> {
    match field {
        Field::Task => validate_task(input).map(|_| ()),
        Field::Alertness | Field::Energy => validate_score(field, input).map(|_| ()),
    }
}
