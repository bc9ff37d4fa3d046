use std::{
    collections::HashSet,
    ops::{Add, BitAnd, BitOr, Sub},
};

use tracing::debug;

use super::set::Set;

/// Members of `a` followed by the members of `b`, duplicates dropped.
pub fn union(a: &Set, b: &Set) -> Set {
    let result: Set = a.iter().chain(b.iter()).copied().collect();
    debug!(left = a.cardinality(), right = b.cardinality(), result = result.cardinality(), "union");
    result
}

/// Members of `a` that are also in `b`, in the order of `a`.
pub fn intersection(a: &Set, b: &Set) -> Set {
    if a.is_empty() || b.is_empty() {
        return Set::new();
    }
    let other: HashSet<i64> = b.iter().copied().collect();
    let result: Set = a.iter().copied().filter(|v| other.contains(v)).collect();
    debug!(left = a.cardinality(), right = b.cardinality(), result = result.cardinality(), "intersection");
    result
}

/// Members of `a` that are not in `b`, in the order of `a`.
pub fn difference(a: &Set, b: &Set) -> Set {
    if a.is_empty() {
        return Set::new();
    }
    let other: HashSet<i64> = b.iter().copied().collect();
    let result: Set = a.iter().copied().filter(|v| !other.contains(v)).collect();
    debug!(left = a.cardinality(), right = b.cardinality(), result = result.cardinality(), "difference");
    result
}

impl Add<&Set> for &Set {
    type Output = Set;

    fn add(self, rhs: &Set) -> Set {
        union(self, rhs)
    }
}

impl BitOr<&Set> for &Set {
    type Output = Set;

    fn bitor(self, rhs: &Set) -> Set {
        union(self, rhs)
    }
}

impl BitAnd<&Set> for &Set {
    type Output = Set;

    fn bitand(self, rhs: &Set) -> Set {
        intersection(self, rhs)
    }
}

impl Sub<&Set> for &Set {
    type Output = Set;

    fn sub(self, rhs: &Set) -> Set {
        difference(self, rhs)
    }
}
