//! Action capability bits and name mappings

use crate::Action;

// Capability bit constants
pub const CREATE: u64 = 1;
pub const UPDATE_SELF: u64 = 1 << 1;
pub const UPDATE_ANY: u64 = 1 << 2;
pub const DELETE: u64 = 1 << 3;
pub const VIEW: u64 = 1 << 4;

/// Every action bit
pub const ALL: u64 = CREATE | UPDATE_SELF | UPDATE_ANY | DELETE | VIEW;

/// Names of the actions set in `mask`, in declaration order
pub fn caps_to_names(mask: u64) -> Vec<&'static str> {
    Action::ALL
        .into_iter()
        .filter(|a| mask & a.bit() == a.bit())
        .map(Action::as_str)
        .collect()
}

/// Convert a list of action names to a mask. Unknown names are ignored.
pub fn names_to_caps(names: &[&str]) -> u64 {
    names
        .iter()
        .filter_map(|n| n.parse::<Action>().ok())
        .fold(0, |m, a| m | a.bit())
}
