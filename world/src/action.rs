//! The four arm actions and their transition rules.
//!
//! [`apply`] is the only place a [`WorldState`] changes. It never mutates its
//! input: a legal action returns a fresh copy with the effect applied.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::object::{Catalog, ObjectId};
use crate::physics::{check_support, SupportViolation};
use crate::state::WorldState;

/// Every action costs one step.
pub const ACTION_COST: u64 = 1;

/// An arm action. Serialized as `"left" | "right" | "pick" | "drop"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Left,
    Right,
    Pick,
    Drop,
}

impl Action {
    /// All actions in enumeration order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Pick, Self::Drop];

    /// The action that exactly undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Pick => Self::Drop,
            Self::Drop => Self::Pick,
        }
    }

    /// Short lowercase label (`"left"`, `"right"`, `"pick"`, `"drop"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Pick => "pick",
            Self::Drop => "drop",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why an action cannot be applied in a given state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyFailure {
    #[error("arm is already at the leftmost column")]
    AtLeftEdge,
    #[error("arm is already at the rightmost column")]
    AtRightEdge,
    #[error("gripper already holds {holding}")]
    HandFull { holding: ObjectId },
    #[error("column {column} is empty")]
    EmptyColumn { column: usize },
    #[error("gripper is empty")]
    HandEmpty,
    #[error("object {id} is not described in the catalog")]
    UnknownObject { id: ObjectId },
    #[error("cannot drop {held} onto {top}: {violation}")]
    Unsupported {
        held: ObjectId,
        top: ObjectId,
        violation: SupportViolation,
    },
}

/// Check whether the held entity may be dropped onto the arm's current column.
///
/// # Errors
///
/// Returns [`ApplyFailure::HandEmpty`] if nothing is held,
/// [`ApplyFailure::UnknownObject`] if the held or top entity is missing from
/// the catalog, or [`ApplyFailure::Unsupported`] if a support rule forbids it.
pub fn check_drop(state: &WorldState, catalog: &Catalog) -> Result<(), ApplyFailure> {
    let held = state.holding.as_ref().ok_or(ApplyFailure::HandEmpty)?;
    let held_desc = catalog
        .get(held)
        .ok_or_else(|| ApplyFailure::UnknownObject { id: held.clone() })?;
    let Some(top) = state.top_of(state.arm) else {
        return Ok(());
    };
    let top_desc = catalog
        .get(top)
        .ok_or_else(|| ApplyFailure::UnknownObject { id: top.clone() })?;
    check_support(held_desc, Some(top_desc)).map_err(|violation| {
        ApplyFailure::Unsupported {
            held: held.clone(),
            top: top.clone(),
            violation,
        }
    })
}

/// Apply `action` to `state`, returning the successor state.
///
/// Preconditions are checked before anything is copied, so an illegal action
/// costs no allocation.
///
/// # Errors
///
/// Returns an [`ApplyFailure`] describing the violated precondition.
pub fn apply(
    state: &WorldState,
    action: Action,
    catalog: &Catalog,
) -> Result<WorldState, ApplyFailure> {
    match action {
        Action::Left => {
            if state.arm == 0 {
                return Err(ApplyFailure::AtLeftEdge);
            }
            let mut next = state.clone();
            next.arm -= 1;
            Ok(next)
        }
        Action::Right => {
            if state.arm >= state.last_column() {
                return Err(ApplyFailure::AtRightEdge);
            }
            let mut next = state.clone();
            next.arm += 1;
            Ok(next)
        }
        Action::Pick => {
            if let Some(holding) = &state.holding {
                return Err(ApplyFailure::HandFull {
                    holding: holding.clone(),
                });
            }
            if state.top_of(state.arm).is_none() {
                return Err(ApplyFailure::EmptyColumn { column: state.arm });
            }
            let mut next = state.clone();
            next.holding = next.stacks[next.arm].pop();
            Ok(next)
        }
        Action::Drop => {
            check_drop(state, catalog)?;
            let mut next = state.clone();
            if let Some(held) = next.holding.take() {
                next.stacks[next.arm].push(held);
            }
            Ok(next)
        }
    }
}

/// Enumerate every legal `(action, successor)` pair from `state`, in
/// [`Action::ALL`] order.
#[must_use]
pub fn successors(state: &WorldState, catalog: &Catalog) -> Vec<(Action, WorldState)> {
    Action::ALL
        .into_iter()
        .filter_map(|action| {
            apply(state, action, catalog)
                .ok()
                .map(|next| (action, next))
        })
        .collect()
}
