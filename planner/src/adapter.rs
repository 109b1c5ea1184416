//! State-space adapter: exposes the blocks world as a search graph.

use tracing::trace;

use gripper_search::contract::{EdgeV1, SearchGraphV1};
use gripper_world::action::{apply, Action, ApplyFailure, ACTION_COST};
use gripper_world::object::Catalog;
use gripper_world::state::WorldState;

/// The blocks world as a [`SearchGraphV1`].
///
/// Each state has at most four outgoing edges (left, right, pick, drop), all
/// of cost [`ACTION_COST`]. With `prune_reversals`, the edge that exactly
/// undoes the incoming action is not generated: it would lead back to the
/// parent state, which is already closed.
#[derive(Debug, Clone, Copy)]
pub struct BlocksWorldGraph<'a> {
    catalog: &'a Catalog,
    prune_reversals: bool,
}

impl<'a> BlocksWorldGraph<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, prune_reversals: bool) -> Self {
        Self {
            catalog,
            prune_reversals,
        }
    }
}

impl SearchGraphV1 for BlocksWorldGraph<'_> {
    type State = WorldState;
    type Action = Action;

    fn successors(
        &self,
        state: &WorldState,
        incoming: Option<&Action>,
    ) -> Vec<EdgeV1<WorldState, Action>> {
        let reversal = incoming.filter(|_| self.prune_reversals).map(|a| a.inverse());
        Action::ALL
            .into_iter()
            .filter(|&action| Some(action) != reversal)
            .filter_map(|action| match apply(state, action, self.catalog) {
                Ok(next) => Some(EdgeV1 {
                    action,
                    state: next,
                    cost: ACTION_COST,
                }),
                Err(failure @ ApplyFailure::Unsupported { .. }) => {
                    trace!(%failure, "drop rejected");
                    None
                }
                Err(_) => None,
            })
            .collect()
    }
}
