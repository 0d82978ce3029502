use serde::{Deserialize, Serialize};

use crate::constants::{CREATE, DELETE, UPDATE_ANY, UPDATE_SELF, VIEW};
use crate::error::GateError;

/// Operation a caller asks to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Create,
    UpdateSelf,
    UpdateAny,
    Delete,
    View,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Create,
        Action::UpdateSelf,
        Action::UpdateAny,
        Action::Delete,
        Action::View,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::UpdateSelf => "update-self",
            Action::UpdateAny => "update-any",
            Action::Delete => "delete",
            Action::View => "view",
        }
    }

    /// Capability bit for this action
    #[inline]
    pub fn bit(self) -> u64 {
        match self {
            Action::Create => CREATE,
            Action::UpdateSelf => UPDATE_SELF,
            Action::UpdateAny => UPDATE_ANY,
            Action::Delete => DELETE,
            Action::View => VIEW,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = GateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == value)
            .ok_or_else(|| GateError::UnknownAction(value.to_string()))
    }
}
