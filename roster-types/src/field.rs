//! The editable attributes of a student record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// One of the four attributes of a [`Record`](crate::Record).
///
/// Declaration order is the display order of the form and the iteration order
/// of validation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    StudentId,
    FullName,
    PhoneNumber,
    Email,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [
        Field::StudentId,
        Field::FullName,
        Field::PhoneNumber,
        Field::Email,
    ];

    /// The camelCase wire name (`"studentId"`, `"fullName"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::StudentId => "studentId",
            Field::FullName => "fullName",
            Field::PhoneNumber => "phoneNumber",
            Field::Email => "email",
        }
    }

    /// Human-facing column label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Field::StudentId => "Mã SV",
            Field::FullName => "Họ tên",
            Field::PhoneNumber => "Số điện thoại",
            Field::Email => "Email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = Error;

    /// Accepts the camelCase wire name or a snake_case alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "studentId" | "student_id" => Ok(Field::StudentId),
            "fullName" | "full_name" => Ok(Field::FullName),
            "phoneNumber" | "phone_number" => Ok(Field::PhoneNumber),
            "email" => Ok(Field::Email),
            other => Err(Error::UnknownField(other.to_string())),
        }
    }
}
