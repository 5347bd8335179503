//! Per-field validation rules for the portfolio metadata form.
//!
//! Every function here is a pure predicate: it looks at one raw input value
//! and answers whether it is acceptable. Updating UI cues from the answer is
//! the job of [`FormState`](crate::form::FormState), never of the predicate.
//!
//! | Field   | Rule                                             |
//! |---------|--------------------------------------------------|
//! | `title` | more than 2 characters                           |
//! | `date`  | `YYYYMMDD` naming a real calendar date           |
//! | `about` | more than 2 characters                           |
//! | `email` | email-shaped                                     |
//! | `code`  | exactly 6 characters (any characters)            |

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{
    ABOUT_MAX_LENGTH, CODE_LENGTH, CODE_MAX_LENGTH, DATE_FORMAT, DATE_MAX_LENGTH, DATE_MIN_YEAR,
    MIN_TEXT_EXCLUSIVE, TITLE_MAX_LENGTH,
};

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // ASCII digits only; `\d` would also admit other Unicode digits
    Regex::new(r"^([0-9]{4})([0-9]{2})([0-9]{2})$").expect("Invalid date regex pattern")
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)^(([^<>()\[\].,;:\s@"]+(\.[^<>()\[\].,;:\s@"]+)*)|(".+"))@(([^<>()\[\].,;:\s@"]+\.)+[^<>()\[\].,;:\s@"]{2,})$"#,
    )
    .expect("Invalid email regex pattern")
});

/// The five validated inputs of the metadata form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    Date,
    About,
    Email,
    Code,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Date,
        Field::About,
        Field::Email,
        Field::Code,
    ];

    /// Input name used in markup and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Date => "date",
            Field::About => "about",
            Field::Email => "email",
            Field::Code => "code",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title.",
            Field::Date => "Date.",
            Field::About => "About.",
            Field::Email => "Email.",
            Field::Code => "Code.",
        }
    }

    /// Input `maxlength`, if the field has one.
    pub fn max_length(self) -> Option<usize> {
        match self {
            Field::Title => Some(TITLE_MAX_LENGTH),
            Field::Date => Some(DATE_MAX_LENGTH),
            Field::About => Some(ABOUT_MAX_LENGTH),
            Field::Email => None,
            Field::Code => Some(CODE_MAX_LENGTH),
        }
    }

    /// Placeholder text shown in the empty input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Title => "",
            Field::Date => "20220000",
            Field::About => "Write a brief introduction",
            Field::Email => "example@email.com",
            Field::Code => "Input Verification code",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("Unknown field: {s}"))
    }
}

/// Validates `value` against the rule for `field`.
pub fn validate(field: Field, value: &str) -> bool {
    match field {
        Field::Title => is_valid_title(value),
        Field::Date => is_valid_date(value),
        Field::About => is_valid_about(value),
        Field::Email => is_valid_email(value),
        Field::Code => is_valid_code(value),
    }
}

pub fn is_valid_title(value: &str) -> bool {
    value.chars().count() > MIN_TEXT_EXCLUSIVE
}

pub fn is_valid_about(value: &str) -> bool {
    value.chars().count() > MIN_TEXT_EXCLUSIVE
}

/// `YYYYMMDD` that survives a round trip through a calendar date.
///
/// Day 31 in a 30-day month, month 13 and Feb 29 outside leap years all fail
/// because [`NaiveDate::from_ymd_opt`] refuses to build them. Years below
/// [`DATE_MIN_YEAR`] fail as well.
pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}

/// Parses a `YYYYMMDD` string into a date, `None` unless it is canonical.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let captures = DATE_PATTERN.captures(value)?;
    let year: i32 = captures[1].parse().ok()?;
    if year < DATE_MIN_YEAR {
        return None;
    }
    let month: u32 = captures[2].parse().ok()?;
    let day: u32 = captures[3].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    (date.format(DATE_FORMAT).to_string() == value).then_some(date)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Exactly six characters; the characters themselves are not checked.
pub fn is_valid_code(value: &str) -> bool {
    value.chars().count() == CODE_LENGTH
}
