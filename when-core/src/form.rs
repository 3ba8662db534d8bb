//! The add-entry form: three text buffers, a focused field and one error area.

use chrono::NaiveDateTime;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::entry::Entry;
use crate::time_utils::round_time;
use crate::validate::{Field, ValidationError, validate, validate_score, validate_task};

#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    task: String,
    alertness: String,
    energy: String,
    focus: Field,
    error: Option<ValidationError>,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Task => &self.task,
            Field::Alertness => &self.alertness,
            Field::Energy => &self.energy,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Task => &mut self.task,
            Field::Alertness => &mut self.alertness,
            Field::Energy => &mut self.energy,
        }
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// The message currently shown in the error area, if any.
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Replaces a field's content and re-validates it.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
        self.on_field_change(field);
    }

    /// Types a character into the focused field. Characters the field does not
    /// accept are dropped.
    pub fn insert_char(&mut self, c: char) {
        let field = self.focus;
        if !field.accepts(c) {
            return;
        }
        self.value_mut(field).push(c);
        self.on_field_change(field);
    }

    pub fn backspace(&mut self) {
        let field = self.focus;
        self.value_mut(field).pop();
        self.on_field_change(field);
    }

    /// Re-validates `field` after an edit: shows its failure reason or hides
    /// the error area.
    pub fn on_field_change(&mut self, field: Field) {
        self.error = validate(field, self.value(field)).err();
    }

    /// Validates every field and, if all pass, returns a new entry stamped at
    /// `now` rounded to `round_to` seconds. The fields are cleared on success.
    ///
    /// On failure nothing is returned and the first invalid field (in
    /// declaration order) supplies the error message.
    pub fn submit(&mut self, now: NaiveDateTime, round_to: u32) -> Option<Entry> {
        if let Some(err) = Field::iter().find_map(|f| validate(f, self.value(f)).err()) {
            debug!(error = %err, "form submission rejected");
            self.error = Some(err);
            return None;
        }

        let task = validate_task(&self.task).ok()?.to_string();
        let alertness = validate_score(Field::Alertness, &self.alertness).ok()?;
        let energy = validate_score(Field::Energy, &self.energy).ok()?;
        let stamp = round_time(now, round_to);

        self.clear();
        Some(Entry::new(stamp, task, alertness, energy))
    }

    /// Drops everything typed so far.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
