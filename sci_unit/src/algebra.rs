/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Derivation of the result shape of a multiplication or division.
//!
//! Both operands are searched for sub-components they have in common
//! (every subtree, the roots included). A shared sub-component that
//! ends up on opposite sides of the fraction line cancels out: it is
//! removed from both trees, and the remainders are combined again,
//! numerators with numerators and denominators with denominators.
//!
//! Matching is structural. Units of the same dimension but a
//! different scale (`km` and `m`) never cancel.

use log::{debug, trace};

use crate::shape::{Atom, Composer, Shape};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    Times,
    Div,
}

/// Derives `lhs × rhs` or `lhs ÷ rhs`, building the result with the
/// given composer. Neutral factors are dropped regardless of the
/// composer.
pub fn derive<A, C>(
    lhs: &Shape<A>,
    rhs: &Shape<A>,
    op: Operation,
    composer: &C,
) -> Shape<A>
where
    A: Atom,
    C: Composer<A> + ?Sized,
{
    let (lhs, rhs) = cancel(lhs.clone(), rhs.clone(), op);
    let (ln, ld) = split(lhs);
    let (rn, rd) = split(rhs);
    let (num, den) = match op {
        Operation::Times => {
            (join_x(composer, ln, rn), join_x(composer, ld, rd))
        }
        Operation::Div => {
            (join_x(composer, ln, rd), join_x(composer, ld, rn))
        }
    };
    join_per(composer, num, den)
}

/// Removes shared sub-components from both operands until none are
/// left.
pub fn cancel<A: Atom>(
    mut lhs: Shape<A>,
    mut rhs: Shape<A>,
    op: Operation,
) -> (Shape<A>, Shape<A>) {
    while let Some((lpath, rpath)) = find_shared(&lhs, &rhs, op) {
        trace!(
            "cancelling {:?} of {} against {:?} of {}",
            lpath,
            lhs,
            rpath,
            rhs
        );
        lhs = remove(lhs, &lpath);
        rhs = remove(rhs, &rpath);
    }
    (lhs, rhs)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Step {
    Left,
    Right,
    Inner,
}

struct Site<'a, A> {
    shape: &'a Shape<A>,
    path: Vec<Step>,
    inverted: bool,
}

fn sites<A: Atom>(shape: &Shape<A>) -> Vec<Site<'_, A>> {
    let mut sites = Vec::new();
    collect_sites(shape, Vec::new(), false, &mut sites);
    sites
}

/// Pre-order: every node before its children, left before right.
/// Neutral leaves never take part in cancellation.
fn collect_sites<'a, A: Atom>(
    shape: &'a Shape<A>,
    path: Vec<Step>,
    inverted: bool,
    sites: &mut Vec<Site<'a, A>>,
) {
    if shape.is_neutral() {
        return;
    }
    sites.push(Site {
        shape,
        path: path.clone(),
        inverted,
    });
    let child = |step| {
        let mut path = path.clone();
        path.push(step);
        path
    };
    match shape {
        Shape::Atomic(_) => {}
        Shape::Product(l, r) => {
            collect_sites(l, child(Step::Left), inverted, sites);
            collect_sites(r, child(Step::Right), inverted, sites);
        }
        Shape::Quotient(n, d) => {
            collect_sites(n, child(Step::Left), inverted, sites);
            collect_sites(d, child(Step::Right), !inverted, sites);
        }
        Shape::Reciprocal(u) => {
            collect_sites(u, child(Step::Inner), !inverted, sites);
        }
    }
}

/// Picks the largest sub-component of `rhs` that also occurs in
/// `lhs` in a cancelling position. Within `lhs` the last occurrence
/// is taken, so that a factor which was just appended by a previous
/// operation is the one that goes away.
fn find_shared<A: Atom>(
    lhs: &Shape<A>,
    rhs: &Shape<A>,
    op: Operation,
) -> Option<(Vec<Step>, Vec<Step>)> {
    let lsites = sites(lhs);
    let mut rsites = sites(rhs);
    rsites.sort_by(|a, b| b.shape.size().cmp(&a.shape.size()));

    rsites.into_iter().find_map(|r| {
        lsites
            .iter()
            .rev()
            .find(|l| {
                let cancels = match op {
                    Operation::Times => l.inverted != r.inverted,
                    Operation::Div => l.inverted == r.inverted,
                };
                cancels && l.shape == r.shape
            })
            .map(|l| {
                debug!("cancelling shared factor {}", r.shape);
                (l.path.clone(), r.path)
            })
    })
}

/// Removes the subtree at `path`, collapsing the nodes above it.
fn remove<A: Atom>(shape: Shape<A>, path: &[Step]) -> Shape<A> {
    let Some((step, rest)) = path.split_first() else {
        return Shape::neutral();
    };
    match (shape, step) {
        (Shape::Product(l, r), Step::Left) => remove(*l, rest).x(*r),
        (Shape::Product(l, r), Step::Right) => l.x(remove(*r, rest)),
        (Shape::Quotient(n, d), Step::Left) => remove(*n, rest).per(*d),
        (Shape::Quotient(n, d), Step::Right) => n.per(remove(*d, rest)),
        (Shape::Reciprocal(u), Step::Inner) => remove(*u, rest).reciprocal(),
        (shape, _) => shape,
    }
}

/// Splits a shape into its numerator and denominator.
fn split<A: Atom>(shape: Shape<A>) -> (Shape<A>, Shape<A>) {
    match shape {
        Shape::Quotient(n, d) => (*n, *d),
        Shape::Reciprocal(u) => (Shape::neutral(), *u),
        u => (u, Shape::neutral()),
    }
}

fn join_x<A, C>(composer: &C, left: Shape<A>, right: Shape<A>) -> Shape<A>
where
    A: Atom,
    C: Composer<A> + ?Sized,
{
    match (left.is_neutral(), right.is_neutral()) {
        (true, _) => right,
        (_, true) => left,
        _ => composer.x(left, right),
    }
}

fn join_per<A, C>(composer: &C, num: Shape<A>, den: Shape<A>) -> Shape<A>
where
    A: Atom,
    C: Composer<A> + ?Sized,
{
    match (num.is_neutral(), den.is_neutral()) {
        (_, true) => num,
        (true, _) => composer.reciprocal(den),
        _ => composer.per(num, den),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::DefaultComposer;
    use crate::Dimension;

    fn dim(s: &str) -> Dimension {
        s.parse().unwrap()
    }

    #[test]
    fn sites_are_pre_order() {
        let shape = dim("L/(T⋅M)");
        let sites = sites(&shape);
        let shown = sites
            .iter()
            .map(|s| (s.shape.to_string(), s.inverted))
            .collect::<Vec<_>>();
        assert_eq!(
            shown,
            vec![
                ("L/(T⋅M)".to_string(), false),
                ("L".to_string(), false),
                ("T⋅M".to_string(), true),
                ("T".to_string(), true),
                ("M".to_string(), true),
            ]
        );
    }

    #[test]
    fn removal_collapses_parents() {
        let shape = dim("L/(T⋅M)");
        assert_eq!(remove(shape.clone(), &[Step::Left]), dim("1/(T⋅M)"));
        assert_eq!(
            remove(shape.clone(), &[Step::Right, Step::Left]),
            dim("L/M")
        );
        assert_eq!(remove(shape, &[]), Dimension::neutral());
    }

    #[test]
    fn largest_shared_subtree_wins() {
        let lhs = dim("L⋅(T⋅M)");
        let rhs = dim("1/(T⋅M)");
        assert_eq!(
            derive(&lhs, &rhs, Operation::Times, &DefaultComposer),
            dim("L")
        );
    }

    #[test]
    fn same_side_factors_do_not_cancel() {
        let speed = dim("L/T");
        assert_eq!(
            derive(&speed, &speed, Operation::Times, &DefaultComposer),
            dim("(L⋅L)/(T⋅T)")
        );
    }
}
