use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(pub i32);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PersonId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PersonId(s.parse::<i32>()?))
    }
}

// Values
pub const MOBILE_PHONE_LABEL: &str = "Mobile phone #";
pub const HOME_PHONE_LABEL: &str = "Home phone #";
pub const WORK_PHONE_LABEL: &str = "Work phone #";
pub const UNSPECIFIED_PHONE_LABEL: &str = "Phone #";
