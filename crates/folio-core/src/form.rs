//! Form state holder and submission gate.
//!
//! [`FormState`] keeps the raw value and validity flag of each field. A
//! change event updates exactly one field and recomputes exactly that
//! field's flag; the gate is the AND of all five flags and nothing else.
//!
//! # Example
//!
//! ```
//! use folio_core::form::FormState;
//! use folio_core::validate::Field;
//!
//! let mut form = FormState::new();
//! form.set_field(Field::Title, "Reel");
//! form.set_field(Field::Date, "20240229");
//! form.set_field(Field::About, "Showcase");
//! form.set_field(Field::Email, "me@example.com");
//! assert!(form.submission("").is_none());
//!
//! form.set_field(Field::Code, "123456");
//! assert!(form.is_valid());
//! assert!(form.submission("abc.mp4").is_some());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validate::{validate, Field};

/// Portfolio range, chosen with a two-button toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Range {
    #[default]
    FE,
    BE,
}

impl Range {
    pub const ALL: [Range; 2] = [Range::FE, Range::BE];

    pub fn as_str(self) -> &'static str {
        match self {
            Range::FE => "FE",
            Range::BE => "BE",
        }
    }

    /// The other range.
    pub fn toggled(self) -> Self {
        match self {
            Range::FE => Range::BE,
            Range::BE => Range::FE,
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Range {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FE" => Ok(Range::FE),
            "BE" => Ok(Range::BE),
            _ => Err(format!("Unknown range: {s} (expected FE or BE)")),
        }
    }
}

/// One validity flag per field. All start out `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldFlags {
    pub title: bool,
    pub date: bool,
    pub about: bool,
    pub email: bool,
    pub code: bool,
}

impl FieldFlags {
    pub fn get(&self, field: Field) -> bool {
        match field {
            Field::Title => self.title,
            Field::Date => self.date,
            Field::About => self.about,
            Field::Email => self.email,
            Field::Code => self.code,
        }
    }

    pub fn set(&mut self, field: Field, value: bool) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Date => &mut self.date,
            Field::About => &mut self.about,
            Field::Email => &mut self.email,
            Field::Code => &mut self.code,
        };
        *slot = value;
    }

    /// AND-reduction over every flag.
    pub fn all(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.get(field))
    }
}

/// Payload forwarded upstream once every field is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSubmission {
    pub range: Range,
    pub title: String,
    pub date: String,
    pub about: String,
    pub email: String,
    pub code: String,
    pub form_valid: bool,
    /// Bucket key of the uploaded video, empty if nothing was uploaded yet.
    pub file_key: String,
}

/// Field values, validity flags and the selected range of the metadata form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    range: Range,
    title: String,
    date: String,
    about: String,
    email: String,
    code: String,
    valid: FieldFlags,
    touched: FieldFlags,
}

impl FormState {
    /// Empty values, every flag false, range `FE`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` for `field` and recomputes that field's flag only.
    ///
    /// Returns the new flag.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        let value = value.into();
        let is_valid = validate(field, &value);

        *self.slot_mut(field) = value;
        self.valid.set(field, is_valid);
        self.touched.set(field, true);

        is_valid
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Date => &self.date,
            Field::About => &self.about,
            Field::Email => &self.email,
            Field::Code => &self.code,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Title => &mut self.title,
            Field::Date => &mut self.date,
            Field::About => &mut self.about,
            Field::Email => &mut self.email,
            Field::Code => &mut self.code,
        }
    }

    pub fn is_field_valid(&self, field: Field) -> bool {
        self.valid.get(field)
    }

    pub fn flags(&self) -> FieldFlags {
        self.valid
    }

    /// Whether the invalid cue (red border) should be drawn for `field`.
    ///
    /// Untouched fields never show the cue.
    pub fn shows_error(&self, field: Field) -> bool {
        self.touched.get(field) && !self.valid.get(field)
    }

    /// SEND CODE is only enabled for a valid email.
    pub fn can_request_code(&self) -> bool {
        self.valid.email
    }

    /// Fields currently failing validation, in form order.
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| !self.valid.get(*field))
            .collect()
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn select_range(&mut self, range: Range) {
        self.range = range;
    }

    pub fn toggle_range(&mut self) {
        self.range = self.range.toggled();
    }

    /// The submission gate: true iff all five flags are true.
    pub fn is_valid(&self) -> bool {
        self.valid.all()
    }

    /// Composes the payload when the gate is open, `None` otherwise.
    pub fn submission(&self, file_key: &str) -> Option<PortfolioSubmission> {
        if !self.is_valid() {
            return None;
        }

        Some(PortfolioSubmission {
            range: self.range,
            title: self.title.clone(),
            date: self.date.clone(),
            about: self.about.clone(),
            email: self.email.clone(),
            code: self.code.clone(),
            form_valid: true,
            file_key: file_key.to_string(),
        })
    }

    /// Back to the freshly mounted state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut form = FormState::new();
        form.set_field(Field::Title, "Showreel");
        form.set_field(Field::Date, "20240229");
        form.set_field(Field::About, "Frontend work");
        form.set_field(Field::Email, "dev@example.com");
        form.set_field(Field::Code, "123456");
        form
    }

    #[test]
    fn test_new_form_is_closed() {
        let form = FormState::new();
        assert!(!form.is_valid());
        assert_eq!(form.range(), Range::FE);
        assert_eq!(form.invalid_fields(), Field::ALL.to_vec());
        assert!(form.submission("key").is_none());
    }

    #[test]
    fn test_all_valid_opens_gate() {
        let form = filled();
        assert!(form.is_valid());
        assert!(form.invalid_fields().is_empty());

        let submission = form.submission("abc.mp4").unwrap();
        assert_eq!(submission.title, "Showreel");
        assert_eq!(submission.date, "20240229");
        assert_eq!(submission.file_key, "abc.mp4");
        assert!(submission.form_valid);
    }

    #[test]
    fn test_single_invalid_field_closes_gate() {
        for field in Field::ALL {
            let mut form = filled();
            form.set_field(field, "x");
            assert!(!form.is_valid(), "{field} invalid should close the gate");
            assert_eq!(form.invalid_fields(), vec![field]);
            assert!(form.submission("").is_none());
        }
    }

    #[test]
    fn test_email_change_leaves_code_flag_alone() {
        let mut form = FormState::new();
        form.set_field(Field::Email, "dev@example.com");
        assert!(form.is_field_valid(Field::Email));
        assert!(!form.is_field_valid(Field::Code));
        assert_eq!(form.value(Field::Code), "");

        form.set_field(Field::Code, "123456");
        form.set_field(Field::Email, "not-an-email");
        assert!(form.is_field_valid(Field::Code));
        assert!(!form.is_field_valid(Field::Email));
    }

    #[test]
    fn test_error_cue_only_after_edit() {
        let mut form = FormState::new();
        assert!(!form.shows_error(Field::Title));

        form.set_field(Field::Title, "ab");
        assert!(form.shows_error(Field::Title));
        assert!(!form.shows_error(Field::Date));

        form.set_field(Field::Title, "abc");
        assert!(!form.shows_error(Field::Title));
    }

    #[test]
    fn test_send_code_follows_email() {
        let mut form = FormState::new();
        assert!(!form.can_request_code());
        form.set_field(Field::Email, "dev@example.com");
        assert!(form.can_request_code());
    }

    #[test]
    fn test_range_toggle_is_exclusive() {
        let mut form = FormState::new();
        form.toggle_range();
        assert_eq!(form.range(), Range::BE);
        form.toggle_range();
        assert_eq!(form.range(), Range::FE);
        form.select_range(Range::BE);
        assert_eq!(form.range(), Range::BE);
    }

    #[test]
    fn test_range_parse_and_serialize() {
        assert_eq!("fe".parse::<Range>().unwrap(), Range::FE);
        assert_eq!("BE".parse::<Range>().unwrap(), Range::BE);
        assert!("QA".parse::<Range>().is_err());
        assert_eq!(serde_json::to_string(&Range::BE).unwrap(), "\"BE\"");
    }

    #[test]
    fn test_submission_json_shape() {
        let json = serde_json::to_value(filled().submission("k.mp4").unwrap()).unwrap();
        assert_eq!(json["range"], "FE");
        assert_eq!(json["formValid"], true);
        assert_eq!(json["fileKey"], "k.mp4");
        assert_eq!(json["code"], "123456");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled();
        form.select_range(Range::BE);
        form.reset();
        assert_eq!(form, FormState::new());
    }
}
