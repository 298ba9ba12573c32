/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Debug, Display, Formatter};

#[cfg(not(feature = "serialize_as_string"))]
use serde::{Deserialize, Serialize};

/// A leaf of a unit or dimension tree.
pub trait Atom: Clone + PartialEq + Debug + Display {
    /// The dimensionless "1". Multiplying or dividing by it is a no-op.
    const NEUTRAL: Self;

    fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

/// The structural form of a composite unit or dimension.
///
/// Shapes are compared structurally: `a⋅b` and `b⋅a` are different
/// shapes, even though they describe the same quantity. Use
/// [`Shape::x`], [`Shape::per`] and [`Shape::reciprocal`] to build
/// shapes; they keep neutral elements and double inversions out of
/// the tree.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
#[cfg_attr(
    not(feature = "serialize_as_string"),
    derive(Serialize, Deserialize)
)]
#[cfg_attr(
    all(feature = "schemars", not(feature = "serialize_as_string")),
    derive(schemars::JsonSchema)
)]
pub enum Shape<A> {
    Atomic(A),
    Product(Box<Shape<A>>, Box<Shape<A>>),
    Quotient(Box<Shape<A>>, Box<Shape<A>>),
    Reciprocal(Box<Shape<A>>),
}

impl<A: Atom> Shape<A> {
    pub const fn atomic(atom: A) -> Self {
        Shape::Atomic(atom)
    }

    pub const fn neutral() -> Self {
        Shape::Atomic(A::NEUTRAL)
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, Shape::Atomic(a) if a.is_neutral())
    }

    /// The product `self × rhs`.
    pub fn x(self, rhs: Self) -> Self {
        match (self.is_neutral(), rhs.is_neutral()) {
            (true, _) => rhs,
            (_, true) => self,
            _ => Shape::Product(Box::new(self), Box::new(rhs)),
        }
    }

    /// The quotient `self / denominator`.
    pub fn per(self, denominator: Self) -> Self {
        match (self.is_neutral(), denominator.is_neutral()) {
            (_, true) => self,
            (true, _) => denominator.reciprocal(),
            _ => Shape::Quotient(Box::new(self), Box::new(denominator)),
        }
    }

    /// The inverse `1 / self`. Inverting twice gives back the
    /// original shape.
    pub fn reciprocal(self) -> Self {
        match self {
            u if u.is_neutral() => u,
            Shape::Reciprocal(u) => *u,
            Shape::Quotient(n, d) => Shape::Quotient(d, n),
            u => Shape::Reciprocal(Box::new(u)),
        }
    }

    pub fn as_atomic(&self) -> Option<&A> {
        match self {
            Shape::Atomic(a) => Some(a),
            _ => None,
        }
    }

    pub fn left(&self) -> Option<&Self> {
        match self {
            Shape::Product(l, _) => Some(l),
            _ => None,
        }
    }

    pub fn right(&self) -> Option<&Self> {
        match self {
            Shape::Product(_, r) => Some(r),
            _ => None,
        }
    }

    pub fn numerator(&self) -> Option<&Self> {
        match self {
            Shape::Quotient(n, _) => Some(n),
            _ => None,
        }
    }

    pub fn denominator(&self) -> Option<&Self> {
        match self {
            Shape::Quotient(_, d) => Some(d),
            _ => None,
        }
    }

    pub fn inverse(&self) -> Option<&Self> {
        match self {
            Shape::Reciprocal(u) => Some(u),
            _ => None,
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Shape::Atomic(_) => 1,
            Shape::Product(a, b) | Shape::Quotient(a, b) => {
                1 + a.size() + b.size()
            }
            Shape::Reciprocal(u) => 1 + u.size(),
        }
    }

    /// All leaves, left to right, with a flag telling whether they
    /// end up in the denominator.
    pub fn factors(&self) -> Vec<(&A, bool)> {
        let mut factors = Vec::new();
        self.collect_factors(false, &mut factors);
        factors
    }

    fn collect_factors<'a>(
        &'a self,
        inverted: bool,
        factors: &mut Vec<(&'a A, bool)>,
    ) {
        match self {
            Shape::Atomic(a) => factors.push((a, inverted)),
            Shape::Product(l, r) => {
                l.collect_factors(inverted, factors);
                r.collect_factors(inverted, factors);
            }
            Shape::Quotient(n, d) => {
                n.collect_factors(inverted, factors);
                d.collect_factors(!inverted, factors);
            }
            Shape::Reciprocal(u) => u.collect_factors(!inverted, factors),
        }
    }

    /// Maps every leaf, rebuilding the tree with the smart
    /// constructors. Leaves that map to the neutral element
    /// disappear from the result.
    pub fn map<B: Atom, F>(&self, f: F) -> Shape<B>
    where
        F: Fn(&A) -> B + Copy,
    {
        match self {
            Shape::Atomic(a) => Shape::Atomic(f(a)),
            Shape::Product(l, r) => l.map(f).x(r.map(f)),
            Shape::Quotient(n, d) => n.map(f).per(d.map(f)),
            Shape::Reciprocal(u) => u.map(f).reciprocal(),
        }
    }
}

impl<A: Atom> Display for Shape<A> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Shape::Atomic(a) => write!(f, "{}", a),
            Shape::Product(l, r) => write!(f, "{}\u{22c5}{}", l, Operand(r)),
            Shape::Quotient(n, d) => write!(f, "{}/{}", n, Operand(d)),
            Shape::Reciprocal(u) => write!(f, "1/{}", Operand(u)),
        }
    }
}

/// Right-hand operands are parenthesised unless atomic, which keeps
/// the left-associative parser from regrouping them.
struct Operand<'a, A>(&'a Shape<A>);

impl<A: Atom> Display for Operand<'_, A> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self.0 {
            Shape::Atomic(a) => write!(f, "{}", a),
            u => write!(f, "({})", u),
        }
    }
}

#[cfg(feature = "serialize_as_string")]
impl<A: Atom> serde::Serialize for Shape<A> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        use serde_with::SerializeAs;
        serde_with::DisplayFromStr::serialize_as(self, serializer)
    }
}

#[cfg(feature = "serialize_as_string")]
impl<'de, A: Atom> serde::Deserialize<'de> for Shape<A>
where
    Shape<A>: std::str::FromStr,
    <Shape<A> as std::str::FromStr>::Err: Display,
{
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        use serde_with::DeserializeAs;
        serde_with::DisplayFromStr::deserialize_as(deserializer)
    }
}

#[cfg(all(feature = "schemars", feature = "serialize_as_string"))]
impl<A> schemars::JsonSchema for Shape<A> {
    fn schema_name() -> String {
        String::from("Shape")
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        String::json_schema(gen)
    }
}

/// The unit composition operators used by the algebra to build a
/// result. Implement this to substitute custom composition, for
/// instance to keep a product in a canonical factor order.
pub trait Composer<A: Atom> {
    fn x(&self, left: Shape<A>, right: Shape<A>) -> Shape<A>;
    fn per(&self, numerator: Shape<A>, denominator: Shape<A>) -> Shape<A>;
    fn reciprocal(&self, unit: Shape<A>) -> Shape<A>;
}

/// Composes with [`Shape::x`], [`Shape::per`] and [`Shape::reciprocal`].
#[derive(Clone, Copy, Default, Debug)]
pub struct DefaultComposer;

impl<A: Atom> Composer<A> for DefaultComposer {
    fn x(&self, left: Shape<A>, right: Shape<A>) -> Shape<A> {
        left.x(right)
    }

    fn per(&self, numerator: Shape<A>, denominator: Shape<A>) -> Shape<A> {
        numerator.per(denominator)
    }

    fn reciprocal(&self, unit: Shape<A>) -> Shape<A> {
        unit.reciprocal()
    }
}

/// A composer built from three closures.
#[derive(Clone, Copy, Debug)]
pub struct FnComposer<X, P, R> {
    pub x: X,
    pub per: P,
    pub reciprocal: R,
}

impl<A, X, P, R> Composer<A> for FnComposer<X, P, R>
where
    A: Atom,
    X: Fn(Shape<A>, Shape<A>) -> Shape<A>,
    P: Fn(Shape<A>, Shape<A>) -> Shape<A>,
    R: Fn(Shape<A>) -> Shape<A>,
{
    fn x(&self, left: Shape<A>, right: Shape<A>) -> Shape<A> {
        (self.x)(left, right)
    }

    fn per(&self, numerator: Shape<A>, denominator: Shape<A>) -> Shape<A> {
        (self.per)(numerator, denominator)
    }

    fn reciprocal(&self, unit: Shape<A>) -> Shape<A> {
        (self.reciprocal)(unit)
    }
}
