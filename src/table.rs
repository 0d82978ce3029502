//! Permission table: role -> ordered list of allowed actions

use std::fmt;
use std::sync::OnceLock;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::{table_err, GateError, Result};
use crate::{Action, Role};

static BUILTIN: OnceLock<PermissionTable> = OnceLock::new();

/// One role's entry: actions in declaration order plus their combined mask
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Entry {
    actions: Vec<Action>,
    mask: u64,
}

/// Immutable mapping from every [`Role`] to the actions it may perform.
///
/// The mapping is total: a role that was never given actions has an empty
/// entry, so lookups never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionTable {
    entries: [Entry; Role::COUNT],
}

impl PermissionTable {
    /// The compiled-in table, built on first use.
    pub fn builtin() -> &'static PermissionTable {
        BUILTIN.get_or_init(|| Self {
            entries: [
                entry(&[Action::UpdateSelf, Action::View]),
                entry(&Action::ALL),
                entry(&[Action::View]),
            ],
        })
    }

    /// Start an empty table; every role has no actions until allowed
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    /// Parse a `{ "role": ["action", ...] }` JSON object.
    ///
    /// Role and action names must be canonical. A role key may appear only
    /// once, duplicates within a role are rejected, and roles left out get an
    /// empty entry.
    pub fn from_json(text: &str) -> Result<Self> {
        let RawEntries(raw) = serde_json::from_str::<RawEntries>(text).map_err(table_err)?;
        let mut seen = [false; Role::COUNT];
        let mut b = Self::builder();
        for (role, actions) in &raw {
            let role: Role = role.parse()?;
            if std::mem::replace(&mut seen[role.index()], true) {
                return Err(GateError::DuplicateRole(role));
            }
            let actions = actions
                .iter()
                .map(|a| a.parse::<Action>())
                .collect::<Result<Vec<Action>>>()?;
            b = b.allow(role, &actions);
        }
        b.build()
    }

    /// True iff `action` is listed for `role`
    #[inline]
    pub fn can_access(&self, role: Role, action: Action) -> bool {
        let bit = action.bit();
        self.mask(role) & bit == bit
    }

    /// Allowed actions for `role`, in table order
    pub fn actions(&self, role: Role) -> &[Action] {
        &self.entries[role.index()].actions
    }

    /// Capability mask for `role`
    #[inline]
    pub fn mask(&self, role: Role) -> u64 {
        self.entries[role.index()].mask
    }

    /// Roles whose entry includes `action`
    pub fn roles_allowed(&self, action: Action) -> Vec<Role> {
        Role::ALL.into_iter().filter(|r| self.can_access(*r, action)).collect()
    }
}

impl Default for PermissionTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl Serialize for PermissionTable {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.collect_map(Role::ALL.iter().map(|r| (r, self.actions(*r))))
    }
}

/// JSON object entries in document order, repeated keys kept
struct RawEntries(Vec<(String, Vec<String>)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of role names to action lists")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<RawEntries, A::Error> {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, Vec<String>>()? {
                    entries.push(entry);
                }
                Ok(RawEntries(entries))
            }
        }

        d.deserialize_map(EntriesVisitor)
    }
}

fn entry(actions: &[Action]) -> Entry {
    Entry { actions: actions.to_vec(), mask: actions.iter().fold(0, |m, a| m | a.bit()) }
}

/// Accumulates role entries and validates them into a [`PermissionTable`].
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    entries: [Vec<Action>; Role::COUNT],
}

impl TableBuilder {
    /// Append `actions` to the entry for `role`
    pub fn allow(mut self, role: Role, actions: &[Action]) -> Self {
        self.entries[role.index()].extend_from_slice(actions);
        self
    }

    /// Validate every entry; fails on the first action listed twice for a role
    pub fn build(self) -> Result<PermissionTable> {
        let mut entries: [Entry; Role::COUNT] = Default::default();
        for (role, actions) in Role::ALL.into_iter().zip(self.entries) {
            let mut mask = 0u64;
            for &action in &actions {
                if mask & action.bit() != 0 {
                    return Err(GateError::DuplicateAction { role, action });
                }
                mask |= action.bit();
            }
            entries[role.index()] = Entry { actions, mask };
        }
        let masks: Vec<u64> = entries.iter().map(|e| e.mask).collect();
        debug!(?masks, "built permission table");
        Ok(PermissionTable { entries })
    }
}
