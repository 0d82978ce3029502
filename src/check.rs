//! Permission checks against the built-in table

use tracing::{debug, trace};

use crate::error::Result;
use crate::table::PermissionTable;
use crate::{Action, Role};

/// Whether `role` may perform `action` under the built-in table
#[inline]
pub fn can_user_access(role: Role, action: Action) -> bool {
    let allowed = PermissionTable::builtin().can_access(role, action);
    trace!(%role, %action, allowed, "access check");
    allowed
}

/// Validate raw role and action names, then check access.
///
/// Unknown names are rejected here rather than answered with `false`.
pub fn check_access(role: &str, action: &str) -> Result<bool> {
    let role = role.parse::<Role>().inspect_err(|e| debug!(error = %e, "rejected role"))?;
    let action = action.parse::<Action>().inspect_err(|e| debug!(error = %e, "rejected action"))?;
    Ok(can_user_access(role, action))
}

/// Allowed actions for `role` under the built-in table, in table order
pub fn allowed_actions(role: Role) -> &'static [Action] {
    PermissionTable::builtin().actions(role)
}

/// Roles permitted to perform `action` under the built-in table
pub fn roles_allowed(action: Action) -> Vec<Role> {
    PermissionTable::builtin().roles_allowed(action)
}
