//! DNF goal formulas and the goal test.
//!
//! A [`GoalFormula`] is a disjunction of conjunctions of [`Literal`]s. The
//! formula holds in a state iff at least one conjunction has every positive
//! literal satisfied.
//!
//! Relation dispatch happens exactly once, in [`Literal::requirement`], which
//! normalizes the eight wire relations into a smaller set of
//! [`Requirement`]s (`rightof` becomes `leftof` with swapped arguments,
//! `under` becomes `above`, `inside` becomes `ontop`). Both the goal test
//! here and the planner heuristic match exhaustively on `Requirement`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::object::ObjectId;
use crate::state::{Location, WorldState};

/// Wire token for the floor.
pub const FLOOR: &str = "floor";

/// Spatial relation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    LeftOf,
    RightOf,
    Beside,
    OnTop,
    Inside,
    Above,
    Under,
    Holding,
}

/// A literal argument: an entity or the floor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Term {
    Floor,
    Object(ObjectId),
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        if s == FLOOR {
            Self::Floor
        } else {
            Self::Object(ObjectId::from(s))
        }
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        if s == FLOOR {
            Self::Floor
        } else {
            Self::Object(ObjectId::new(s))
        }
    }
}

impl From<Term> for String {
    fn from(term: Term) -> Self {
        match term {
            Term::Floor => FLOOR.to_string(),
            Term::Object(id) => id.as_str().to_string(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Floor => f.write_str(FLOOR),
            Self::Object(id) => write!(f, "{id}"),
        }
    }
}

/// An atomic relational assertion with a truth polarity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub polarity: bool,
    pub relation: Relation,
    pub args: Vec<Term>,
}

/// A literal normalized into the shape the goal test and heuristic evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement<'a> {
    /// The gripper holds the entity.
    Holding(&'a ObjectId),
    /// First entity's column is strictly left of the second's.
    LeftOf(&'a ObjectId, &'a ObjectId),
    /// The two entities are in adjacent columns.
    Beside(&'a ObjectId, &'a ObjectId),
    /// First entity rests directly on the second.
    OnTop(&'a ObjectId, &'a ObjectId),
    /// The entity rests directly on the floor.
    OnFloor(&'a ObjectId),
    /// First entity is somewhere above the second in the same column.
    Above(&'a ObjectId, &'a ObjectId),
    /// Nothing is required: a negative literal, or `floor` as the second
    /// argument of a relation other than `ontop`.
    Unconstrained,
    /// Cannot hold in any state: `floor` as the subject, or wrong arity.
    Malformed,
}

impl Literal {
    /// A positive literal.
    #[must_use]
    pub fn new<T: Into<Term>>(relation: Relation, args: impl IntoIterator<Item = T>) -> Self {
        Self {
            polarity: true,
            relation,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Normalize this literal.
    ///
    /// Negative literals are modelled but never evaluated; they normalize to
    /// [`Requirement::Unconstrained`].
    #[must_use]
    pub fn requirement(&self) -> Requirement<'_> {
        if !self.polarity {
            return Requirement::Unconstrained;
        }
        match (self.relation, self.args.as_slice()) {
            (Relation::Holding, [Term::Object(x)]) => Requirement::Holding(x),
            (Relation::OnTop, [Term::Object(x), Term::Floor]) => Requirement::OnFloor(x),
            (_, [Term::Object(_), Term::Floor]) => Requirement::Unconstrained,
            (relation, [Term::Object(x), Term::Object(y)]) => match relation {
                Relation::LeftOf => Requirement::LeftOf(x, y),
                Relation::RightOf => Requirement::LeftOf(y, x),
                Relation::Beside => Requirement::Beside(x, y),
                Relation::OnTop | Relation::Inside => Requirement::OnTop(x, y),
                Relation::Above => Requirement::Above(x, y),
                Relation::Under => Requirement::Above(y, x),
                Relation::Holding => Requirement::Malformed,
            },
            _ => Requirement::Malformed,
        }
    }

    /// Evaluate this literal in `state`.
    #[must_use]
    pub fn is_satisfied(&self, state: &WorldState) -> bool {
        self.requirement().is_satisfied(state)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            f.write_str("-")?;
        }
        let name = match self.relation {
            Relation::LeftOf => "leftof",
            Relation::RightOf => "rightof",
            Relation::Beside => "beside",
            Relation::OnTop => "ontop",
            Relation::Inside => "inside",
            Relation::Above => "above",
            Relation::Under => "under",
            Relation::Holding => "holding",
        };
        write!(f, "{name}(")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}

impl Requirement<'_> {
    /// Goal test for a single normalized literal.
    ///
    /// Held entities have no column and satisfy no spatial relation.
    #[must_use]
    pub fn is_satisfied(self, state: &WorldState) -> bool {
        match self {
            Self::Holding(x) => state.holding.as_ref() == Some(x),
            Self::LeftOf(x, y) => match columns(state, x, y) {
                Some((cx, cy)) => cx < cy,
                None => false,
            },
            Self::Beside(x, y) => match columns(state, x, y) {
                Some((cx, cy)) => cx.abs_diff(cy) == 1,
                None => false,
            },
            Self::OnTop(x, y) => match stacked(state, x, y) {
                Some(((cx, hx), (cy, hy))) => cx == cy && hx == hy + 1,
                None => false,
            },
            Self::OnFloor(x) => matches!(
                state.locate(x),
                Some(Location::Stacked { height: 0, .. })
            ),
            Self::Above(x, y) => match stacked(state, x, y) {
                Some(((cx, hx), (cy, hy))) => cx == cy && hx > hy,
                None => false,
            },
            Self::Unconstrained => true,
            Self::Malformed => false,
        }
    }
}

fn column_height(state: &WorldState, id: &ObjectId) -> Option<(usize, usize)> {
    match state.locate(id)? {
        Location::Held => None,
        Location::Stacked { column, height } => Some((column, height)),
    }
}

fn stacked(
    state: &WorldState,
    x: &ObjectId,
    y: &ObjectId,
) -> Option<((usize, usize), (usize, usize))> {
    Some((column_height(state, x)?, column_height(state, y)?))
}

fn columns(state: &WorldState, x: &ObjectId, y: &ObjectId) -> Option<(usize, usize)> {
    stacked(state, x, y).map(|((cx, _), (cy, _))| (cx, cy))
}

/// A conjunction of literals; holds iff every literal holds.
pub type Conjunction = Vec<Literal>;

/// A disjunction of conjunctions. Serialized as a nested JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalFormula {
    conjunctions: Vec<Conjunction>,
}

impl GoalFormula {
    #[must_use]
    pub fn new(conjunctions: Vec<Conjunction>) -> Self {
        Self { conjunctions }
    }

    /// A formula with a single conjunction.
    #[must_use]
    pub fn all_of(literals: Conjunction) -> Self {
        Self::new(vec![literals])
    }

    #[must_use]
    pub fn conjunctions(&self) -> &[Conjunction] {
        &self.conjunctions
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.conjunctions.iter().flatten()
    }

    /// Whether any literal in the formula is negative. Such literals are
    /// carried but not evaluated.
    #[must_use]
    pub fn has_negative_literals(&self) -> bool {
        self.literals().any(|l| !l.polarity)
    }

    /// The goal test: true iff some conjunction has every literal satisfied.
    ///
    /// An empty formula is never satisfied.
    #[must_use]
    pub fn is_satisfied(&self, state: &WorldState) -> bool {
        self.conjunctions
            .iter()
            .any(|conjunction| conjunction.iter().all(|l| l.is_satisfied(state)))
    }
}

/// Free-function form of [`GoalFormula::is_satisfied`].
#[must_use]
pub fn is_goal(goal: &GoalFormula, state: &WorldState) -> bool {
    goal.is_satisfied(state)
}
