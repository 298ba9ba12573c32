/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::iter::once;
use std::ops::Mul;

/// Flattened exponent form of a unit or dimension: every factor
/// with its net power. Factor order and nesting are lost, so two
/// structurally different shapes may share a composite.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct Composite<T: Ord>(BTreeMap<T, i32>);

impl<T: Ord> Composite<T> {
    pub fn empty() -> Self {
        Composite(BTreeMap::new())
    }

    pub fn simple(val: T) -> Self {
        Composite::from_powers(once((val, 1)))
    }

    /// Collects `(factor, power)` pairs, summing repeated factors
    /// and dropping those that end up with power zero.
    pub fn from_powers<I>(vals: I) -> Self
    where
        I: IntoIterator<Item = (T, i32)>,
    {
        let mut map = BTreeMap::new();
        for (val, n) in vals {
            *map.entry(val).or_insert(0) += n;
        }
        map.retain(|_, n| *n != 0);
        Composite(map)
    }

    pub fn as_map(&self) -> &BTreeMap<T, i32> {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, &i32)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn powi(self, n: i32) -> Self {
        Composite::from_powers(self.0.into_iter().map(|(u, p)| (u, p * n)))
    }
}

impl<T: Ord> Mul<Composite<T>> for Composite<T> {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Composite::from_powers(self.0.into_iter().chain(other.0))
    }
}

impl<T: Display + Ord> Display for Composite<T> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let side = |positive: bool| {
            self.0
                .iter()
                .filter(|(_, &p)| (p > 0) == positive)
                .map(|(u, p)| format!("{}{}", u, superscript(p.abs())))
                .collect::<Vec<String>>()
                .join("\u{22c5}")
        };
        let (num, den) = (side(true), side(false));
        match (num.is_empty(), den.is_empty()) {
            (true, true) => write!(f, "1"),
            (false, true) => write!(f, "{}", num),
            (true, false) => write!(f, "1/{}", den),
            (false, false) => write!(f, "{}/{}", num, den),
        }
    }
}

static SS: [char; 10] = [
    '\u{2070}', '\u{00b9}', '\u{00b2}', '\u{00b3}', '\u{2074}', '\u{2075}',
    '\u{2076}', '\u{2077}', '\u{2078}', '\u{2079}',
];

pub(crate) fn superscript(val: i32) -> String {
    match val {
        1 => String::new(),
        _ => val
            .to_string()
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(n) => SS[n as usize],
                None => '\u{207b}',
            })
            .collect(),
    }
}
