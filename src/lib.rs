//! Rolegate - minimal role-based access control
//!
//! A fixed set of roles, a fixed set of actions, and one immutable table
//! saying which role may do what. Names coming from outside are parsed into
//! [`Role`] and [`Action`] first; lookups on parsed values cannot fail.
//!
//! ```
//! use rolegate::{can_user_access, check_access, Action, Role};
//!
//! assert!(can_user_access(Role::Admin, Action::Delete));
//! assert!(!can_user_access(Role::Anonymous, Action::Delete));
//! assert_eq!(check_access("user", "update-self"), Ok(true));
//! assert!(check_access("root", "view").is_err());
//! ```

mod action;
mod check;
pub mod constants;
mod error;
mod role;
mod table;
mod user;

pub use action::Action;
pub use check::{allowed_actions, can_user_access, check_access, roles_allowed};
pub use constants::{caps_to_names, names_to_caps};
pub use error::{GateError, Result};
pub use role::Role;
pub use table::{PermissionTable, TableBuilder};
pub use user::{
    assert_valid_email, create_user, fetch_user_with_full_name, is_valid_email, Email, NewUser,
    User, UserName, UserWithFullName,
};
