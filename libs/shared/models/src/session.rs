use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Patient,
    Doctor,
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserType::Patient => write!(f, "patient"),
            UserType::Doctor => write!(f, "doctor"),
        }
    }
}

/// The single simulated session of the running process.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
    pub user_type: Option<UserType>,
}

impl Session {
    pub fn logged_in_as(user_type: UserType) -> Self {
        Self {
            logged_in: true,
            user_type: Some(user_type),
        }
    }

    pub fn is(&self, user_type: UserType) -> bool {
        self.logged_in && self.user_type == Some(user_type)
    }
}
