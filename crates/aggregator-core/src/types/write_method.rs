//! HTTP method used to write a variable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// How a variable write is applied by the service.
///
/// `Put` replaces the whole value, `Patch` merges the given fields into it,
/// `Post` appends records to a tabular value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WriteMethod {
    #[default]
    Put,
    Post,
    Patch,
}

impl WriteMethod {
    /// The method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteMethod::Put => "PUT",
            WriteMethod::Post => "POST",
            WriteMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for WriteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WriteMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PUT" => Ok(WriteMethod::Put),
            "POST" => Ok(WriteMethod::Post),
            "PATCH" => Ok(WriteMethod::Patch),
            _ => Err(InvalidInputError::Method {
                value: s.to_string(),
            }
            .into()),
        }
    }
}
