//! Pairwise dependency between type notations, and the declaration order
//! derived from it.
//!
//! [`depends_on`] compares two notations by name only: a list refers to its
//! element type, a map to its key and value types, a composite to the
//! resolved type of each field. Enums refer to nothing. Self-referencing
//! types are valid; the relation is a precedence signal between two types,
//! not a guarantee that the schema as a whole is acyclic.

use tracing::{debug, trace};

use crate::{composite::Composite, notation::TypeNotation, restricted::Restricted};

/// Direction of the reference between a pair of types `(a, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Dependency {
    /// Neither type references the other.
    None = 0,
    /// `b` depends on `a`; `a` must be declared first.
    Backward = 1,
    /// `a` depends on `b`; `b` must be declared first.
    Forward = 2,
}

impl Dependency {
    /// Numeric form: 0 unrelated, 1 backward, 2 forward.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The same relation seen from the other side of the pair.
    pub fn flip(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Backward => Self::Forward,
            Self::Forward => Self::Backward,
        }
    }

    pub fn is_none(self) -> bool {
        self == Self::None
    }
}

/// Classify how `a` and `b` reference one another.
///
/// Between two restricted types a backward reference is reported in
/// preference to a forward one. When a composite is involved and both
/// directions hold, the non-composite side depending on the composite wins
/// (for two composites, `a` depending on `b` wins).
pub fn depends_on(a: &TypeNotation, b: &TypeNotation) -> Dependency {
    let dep = match (a, b) {
        (TypeNotation::Restricted(ra), TypeNotation::Restricted(rb)) => restricted_pair(ra, rb),
        (TypeNotation::Restricted(r), TypeNotation::Composite(c)) => restricted_composite(r, c),
        (TypeNotation::Composite(c), TypeNotation::Restricted(r)) => {
            restricted_composite(r, c).flip()
        }
        (TypeNotation::Composite(ca), TypeNotation::Composite(cb)) => composite_pair(ca, cb),
    };
    trace!(
        a = a.name(),
        a_kind = %a.kind(),
        b = b.name(),
        b_kind = %b.kind(),
        dependency = dep.code(),
        "depends_on"
    );
    dep
}

fn restricted_pair(a: &Restricted, b: &Restricted) -> Dependency {
    if b.refers_to(a.name()) {
        Dependency::Backward
    } else if a.refers_to(b.name()) {
        Dependency::Forward
    } else {
        Dependency::None
    }
}

fn restricted_composite(r: &Restricted, c: &Composite) -> Dependency {
    let mut dep = Dependency::None;
    if c.refers_to(r.name()) {
        dep = Dependency::Backward;
    }
    if r.refers_to(c.name()) {
        dep = Dependency::Forward;
    }
    dep
}

fn composite_pair(a: &Composite, b: &Composite) -> Dependency {
    let mut dep = Dependency::None;
    if b.refers_to(a.name()) {
        dep = Dependency::Backward;
    }
    if a.refers_to(b.name()) {
        dep = Dependency::Forward;
    }
    dep
}

/// Order `types` so that every type comes after the types it depends on.
///
/// Returns indices into `types`. Each unordered pair is evaluated once, with
/// the earlier-declared type as `a`. Unrelated types keep their declaration
/// order; when the remaining types form a cycle, the earliest-declared of
/// them is emitted next.
pub fn dependency_order(types: &[TypeNotation]) -> Vec<usize> {
    let n = types.len();
    let mut successors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut indegree = vec![0usize; n];

    for i in 0..n {
        for j in i + 1..n {
            let (first, second) = match depends_on(&types[i], &types[j]) {
                Dependency::None => continue,
                Dependency::Backward => (i, j),
                Dependency::Forward => (j, i),
            };
            successors[first].push(second);
            indegree[second] += 1;
        }
    }

    let mut placed = vec![false; n];
    let mut order = Vec::with_capacity(n);
    while order.len() < n {
        let ready = (0..n).find(|&k| !placed[k] && indegree[k] == 0);
        let next = ready.or_else(|| (0..n).find(|&k| !placed[k]));
        let Some(k) = next else { break };
        if ready.is_none() {
            debug!(name = types[k].name(), "breaking dependency cycle");
        }

        placed[k] = true;
        order.push(k);
        for &m in &successors[k] {
            indegree[m] = indegree[m].saturating_sub(1);
        }
    }
    order
}
