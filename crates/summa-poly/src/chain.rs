//! Raw summand chains.
//!
//! A [`Chain`] is the ring-independent shape of a polynomial: head, tail and
//! length of a linked list of arena slots. The functions here implement
//! every structural algorithm (push, splice, merge, scaled merge) on chains
//! directly against an arena the caller has already locked. They never
//! lock, so they can be composed freely inside one critical section.
//!
//! Invariant maintained by every function: power products along a chain
//! strictly decrease under the monoid's order, no coefficient is zero, and
//! `len`/`tail` agree with the links.

use std::cmp::Ordering;

use summa_rings::{AlgebraError, GcdDomain, Result, Ring};

use crate::arena::SummandArena;
use crate::handle::SummandId;
use crate::monoid::PPMonoid;
use crate::pp::PPElem;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Chain {
    pub(crate) head: Option<SummandId>,
    pub(crate) tail: Option<SummandId>,
    pub(crate) len: usize,
}

impl Chain {
    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub(crate) fn take(&mut self) -> Chain {
        std::mem::take(self)
    }
}

/// `*slot += rhs` without cloning the left operand.
pub(crate) fn add_into<C: Ring>(slot: &mut C, rhs: C) {
    let lhs = std::mem::replace(slot, C::zero());
    *slot = lhs + rhs;
}

fn mul_into<C: Ring>(slot: &mut C, rhs: &C) {
    let lhs = std::mem::replace(slot, C::zero());
    *slot = lhs * rhs.clone();
}

/// Points `prev` (or the head, if `prev` is `None`) at `target`.
fn set_next<C>(
    arena: &mut SummandArena<C>,
    chain: &mut Chain,
    prev: Option<SummandId>,
    target: Option<SummandId>,
) {
    match prev {
        Some(p) => arena.get_mut(p).next = target,
        None => chain.head = target,
    }
}

/// Unlinks and frees `id`, which follows `prev`; returns the successor.
fn remove_after<C>(
    arena: &mut SummandArena<C>,
    chain: &mut Chain,
    prev: Option<SummandId>,
    id: SummandId,
) -> Option<SummandId> {
    let next = arena.get(id).next;
    set_next(arena, chain, prev, next);
    if chain.tail == Some(id) {
        chain.tail = prev;
    }
    chain.len -= 1;
    arena.free(id);
    next
}

pub(crate) fn link_front<C>(arena: &mut SummandArena<C>, chain: &mut Chain, id: SummandId) {
    arena.get_mut(id).next = chain.head;
    chain.head = Some(id);
    if chain.tail.is_none() {
        chain.tail = Some(id);
    }
    chain.len += 1;
}

pub(crate) fn link_back<C>(arena: &mut SummandArena<C>, chain: &mut Chain, id: SummandId) {
    arena.get_mut(id).next = None;
    let tail = chain.tail;
    set_next(arena, chain, tail, Some(id));
    chain.tail = Some(id);
    chain.len += 1;
}

/// Detaches the leading summand without freeing it.
pub(crate) fn unlink_front<C>(arena: &mut SummandArena<C>, chain: &mut Chain) -> Option<SummandId> {
    let id = chain.head?;
    chain.head = arena.get_mut(id).next.take();
    if chain.head.is_none() {
        chain.tail = None;
    }
    chain.len -= 1;
    Some(id)
}

pub(crate) fn push_front<C: Ring>(
    arena: &mut SummandArena<C>,
    monoid: &PPMonoid,
    chain: &mut Chain,
    c: C,
    pp: PPElem,
) {
    if c.is_zero() {
        return;
    }
    debug_assert!(
        chain
            .head
            .map_or(true, |h| monoid.cmp(&pp, &arena.get(h).pp) == Ordering::Greater),
        "push_front: power product not above the leading one"
    );
    let id = arena.alloc(c, pp);
    link_front(arena, chain, id);
}

pub(crate) fn push_back<C: Ring>(
    arena: &mut SummandArena<C>,
    monoid: &PPMonoid,
    chain: &mut Chain,
    c: C,
    pp: PPElem,
) {
    if c.is_zero() {
        return;
    }
    debug_assert!(
        chain
            .tail
            .map_or(true, |t| monoid.cmp(&pp, &arena.get(t).pp) == Ordering::Less),
        "push_back: power product not below the trailing one"
    );
    let id = arena.alloc(c, pp);
    link_back(arena, chain, id);
}

pub(crate) fn pop_front<C>(arena: &mut SummandArena<C>, chain: &mut Chain) -> Option<(C, PPElem)> {
    let id = unlink_front(arena, chain)?;
    Some(arena.free(id))
}

pub(crate) fn free<C>(arena: &mut SummandArena<C>, chain: &mut Chain) {
    arena.free_chain(chain.take().head);
}

/// Splices `g` after `f` in O(1); every term of `g` must be below `f`'s last.
pub(crate) fn append<C>(arena: &mut SummandArena<C>, monoid: &PPMonoid, f: &mut Chain, g: &mut Chain) {
    let g = g.take();
    let Some(g_head) = g.head else {
        return;
    };
    match f.tail {
        None => *f = g,
        Some(t) => {
            debug_assert_eq!(
                monoid.cmp(&arena.get(t).pp, &arena.get(g_head).pp),
                Ordering::Greater,
                "append: chains overlap"
            );
            arena.get_mut(t).next = Some(g_head);
            f.tail = g.tail;
            f.len += g.len;
        }
    }
}

/// `f += g`, moving `g`'s summands into `f`; `g` ends up empty.
pub(crate) fn merge<C: Ring>(arena: &mut SummandArena<C>, monoid: &PPMonoid, f: &mut Chain, g: &mut Chain) {
    let g = g.take();
    if g.is_empty() {
        return;
    }

    let mut prev: Option<SummandId> = None;
    let mut cursor = f.head;
    let mut remaining = g.len;
    let mut next_g = g.head;

    while let Some(gid) = next_g {
        next_g = arena.get(gid).next;
        loop {
            let Some(cid) = cursor else {
                // Everything left in g sorts below f: splice the rest at once
                set_next(arena, f, prev, Some(gid));
                f.tail = g.tail;
                f.len += remaining;
                return;
            };
            match monoid.cmp(&arena.get(cid).pp, &arena.get(gid).pp) {
                Ordering::Greater => {
                    prev = cursor;
                    cursor = arena.get(cid).next;
                }
                Ordering::Equal => {
                    let (c, _) = arena.free(gid);
                    add_into(&mut arena.get_mut(cid).coeff, c);
                    if arena.get(cid).coeff.is_zero() {
                        cursor = remove_after(arena, f, prev, cid);
                    } else {
                        prev = Some(cid);
                        cursor = arena.get(cid).next;
                    }
                    break;
                }
                Ordering::Less => {
                    arena.get_mut(gid).next = Some(cid);
                    set_next(arena, f, prev, Some(gid));
                    f.len += 1;
                    prev = Some(gid);
                    break;
                }
            }
        }
        remaining -= 1;
    }
}

/// `f += c * t * (chain starting at start)`; the source chain is read only.
pub(crate) fn add_mul_from<C: Ring>(
    arena: &mut SummandArena<C>,
    monoid: &PPMonoid,
    f: &mut Chain,
    c: &C,
    t: &PPElem,
    start: Option<SummandId>,
) {
    if c.is_zero() {
        return;
    }

    let mut prev: Option<SummandId> = None;
    let mut cursor = f.head;
    let mut src = start;

    while let Some(sid) = src {
        let (coeff, pp) = {
            let s = arena.get(sid);
            src = s.next;
            (c.clone() * s.coeff.clone(), t.mul(&s.pp))
        };
        if coeff.is_zero() {
            continue;
        }
        loop {
            let Some(cid) = cursor else {
                let id = arena.alloc(coeff, pp);
                set_next(arena, f, prev, Some(id));
                f.tail = Some(id);
                f.len += 1;
                prev = Some(id);
                break;
            };
            match monoid.cmp(&arena.get(cid).pp, &pp) {
                Ordering::Greater => {
                    prev = cursor;
                    cursor = arena.get(cid).next;
                }
                Ordering::Equal => {
                    add_into(&mut arena.get_mut(cid).coeff, coeff);
                    if arena.get(cid).coeff.is_zero() {
                        cursor = remove_after(arena, f, prev, cid);
                    } else {
                        prev = Some(cid);
                        cursor = arena.get(cid).next;
                    }
                    break;
                }
                Ordering::Less => {
                    let id = arena.alloc(coeff, pp);
                    arena.get_mut(id).next = Some(cid);
                    set_next(arena, f, prev, Some(id));
                    f.len += 1;
                    prev = Some(id);
                    break;
                }
            }
        }
    }
}

/// Multiplies every coefficient by `c`, dropping products that vanish.
pub(crate) fn mul_by_coeff<C: Ring>(arena: &mut SummandArena<C>, chain: &mut Chain, c: &C) {
    if c.is_zero() {
        free(arena, chain);
        return;
    }
    if c.is_one() {
        return;
    }

    let mut prev = None;
    let mut cursor = chain.head;
    while let Some(id) = cursor {
        mul_into(&mut arena.get_mut(id).coeff, c);
        if arena.get(id).coeff.is_zero() {
            cursor = remove_after(arena, chain, prev, id);
        } else {
            prev = Some(id);
            cursor = arena.get(id).next;
        }
    }
}

/// Divides every coefficient by `c` exactly.
///
/// Weak guarantee: on failure the chain is valid but only a prefix of it
/// has been divided.
pub(crate) fn div_by_coeff<C: Ring>(arena: &mut SummandArena<C>, chain: &mut Chain, c: &C) -> Result<()> {
    if c.is_zero() {
        return Err(AlgebraError::division_by_zero("SparsePoly::div_by_coeff"));
    }
    if c.is_one() {
        return Ok(());
    }

    let mut cursor = chain.head;
    while let Some(id) = cursor {
        let s = arena.get_mut(id);
        s.coeff = s.coeff.div_exact(c)?;
        cursor = s.next;
    }
    Ok(())
}

pub(crate) fn negate<C: Ring>(arena: &mut SummandArena<C>, chain: &Chain) {
    let mut cursor = chain.head;
    while let Some(id) = cursor {
        let s = arena.get_mut(id);
        s.coeff = -std::mem::replace(&mut s.coeff, C::zero());
        cursor = s.next;
    }
}

/// Multiplies every power product by `t`; term order is monomial-compatible
/// so the chain stays sorted.
pub(crate) fn mul_by_pp<C>(arena: &mut SummandArena<C>, chain: &Chain, t: &PPElem) {
    if t.is_one() {
        return;
    }
    let mut cursor = chain.head;
    while let Some(id) = cursor {
        let s = arena.get_mut(id);
        s.pp = s.pp.mul(t);
        cursor = s.next;
    }
}

pub(crate) fn copy<C: Ring>(arena: &mut SummandArena<C>, chain: &Chain) -> Chain {
    let mut out = Chain::default();
    let mut cursor = chain.head;
    while let Some(id) = cursor {
        let (c, pp, next) = {
            let s = arena.get(id);
            (s.coeff.clone(), s.pp.clone(), s.next)
        };
        let new_id = arena.alloc(c, pp);
        link_back(arena, &mut out, new_id);
        cursor = next;
    }
    out
}

pub(crate) fn equal<C: Ring>(arena: &SummandArena<C>, a: &Chain, b: &Chain) -> bool {
    if a.len != b.len {
        return false;
    }
    let (mut x, mut y) = (a.head, b.head);
    while let (Some(i), Some(j)) = (x, y) {
        let (s, t) = (arena.get(i), arena.get(j));
        if s.pp != t.pp || s.coeff != t.coeff {
            return false;
        }
        x = s.next;
        y = t.next;
    }
    x.is_none() && y.is_none()
}

/// Checks the chain invariant: strictly decreasing, no zeros, consistent
/// length and tail.
pub(crate) fn is_valid<C: Ring>(arena: &SummandArena<C>, monoid: &PPMonoid, chain: &Chain) -> bool {
    let mut count = 0;
    let mut last: Option<SummandId> = None;
    let mut cursor = chain.head;
    while let Some(id) = cursor {
        let s = arena.get(id);
        if s.coeff.is_zero() || !monoid.owns(&s.pp) {
            return false;
        }
        if let Some(l) = last {
            if monoid.cmp(&arena.get(l).pp, &s.pp) != Ordering::Greater {
                return false;
            }
        }
        count += 1;
        last = Some(id);
        cursor = s.next;
    }
    count == chain.len && last == chain.tail
}

pub(crate) fn content<C: GcdDomain>(arena: &SummandArena<C>, chain: &Chain) -> C {
    let mut g = C::zero();
    let mut cursor = chain.head;
    while let Some(id) = cursor {
        let s = arena.get(id);
        g = g.gcd(&s.coeff);
        if g.is_one() {
            break;
        }
        cursor = s.next;
    }
    g
}
