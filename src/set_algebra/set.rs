use std::{
    collections::HashSet,
    fmt,
    io::{self, Write},
    str::FromStr,
    sync::LazyLock,
};

use anyhow::{Context, Error, Result};
use itertools::Itertools;
use regex::Regex;

use crate::error::EmptySetError;

use super::dedup::deduplicate;

static SET_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\{(.*)\}\s*$").expect("invalid set literal pattern"));

/// A set of distinct integers which keeps the order its members were
/// first seen in.
///
/// Every constructor deduplicates, so `members` never holds the same value
/// twice. Equality compares content only, not order.
#[derive(Debug, Clone, Default)]
pub struct Set {
    members: Vec<i64>,
}

impl Set {
    pub fn new() -> Self {
        Self { members: vec![] }
    }

    /// Copy `values` into a new set, dropping later duplicates.
    pub fn from_values(values: &[i64]) -> Self {
        Self::from(values.to_vec())
    }

    pub fn cardinality(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The members of a non-empty set.
    ///
    /// Asking an empty set for its members is an error; check
    /// [`Set::cardinality`] first.
    pub fn members(&self) -> Result<&[i64], EmptySetError> {
        if self.members.is_empty() {
            return Err(EmptySetError);
        }
        Ok(&self.members)
    }

    pub fn contains(&self, value: &i64) -> bool {
        self.members.contains(value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.members.iter()
    }

    /// Replace the whole contents of the set.
    pub(crate) fn replace(&mut self, mut values: Vec<i64>) {
        deduplicate(&mut values);
        self.members = values;
    }

    pub(crate) fn clear(&mut self) {
        self.members = vec![];
    }

    pub fn output<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{}", self)
    }
}

impl From<Vec<i64>> for Set {
    fn from(mut values: Vec<i64>) -> Self {
        deduplicate(&mut values);
        Self { members: values }
    }
}

impl FromIterator<i64> for Set {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a Set {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl IntoIterator for Set {
    type Item = i64;
    type IntoIter = std::vec::IntoIter<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl PartialEq for Set {
    fn eq(&self, other: &Self) -> bool {
        if self.cardinality() != other.cardinality() {
            return false;
        }
        let other: HashSet<i64> = other.iter().copied().collect();
        self.iter().all(|v| other.contains(v))
    }
}

impl Eq for Set {}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.members.is_empty() {
            return write!(f, "{{Empty Set}}");
        }
        write!(f, "{{{}}}", self.members.iter().join(", "))
    }
}

impl FromStr for Set {
    type Err = Error;

    /// Parse the printed form of a set, `{1, 2, 3}` or `{Empty Set}`.
    fn from_str(s: &str) -> Result<Self> {
        let captures = SET_LITERAL
            .captures(s)
            .with_context(|| format!("Set literal must be wrapped in braces: {:?}", s))?;
        let inner = captures.get(1).map_or("", |m| m.as_str()).trim();

        if inner.is_empty() || inner == "Empty Set" {
            return Ok(Set::new());
        }

        let values = inner
            .split(',')
            .map(|item| {
                let item = item.trim();
                item.parse::<i64>()
                    .with_context(|| format!("Invalid set element {:?}", item))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Set::from(values))
    }
}
