//! Adaptation layer between lazy queries and concrete containers.
//!
//! Sequences (slices, arrays, vectors) answer every query with the generic
//! algorithms in [`elements`](crate::elements) and report positions as
//! indices. Associative containers answer `find`, `count`, `distance` and the
//! sorted-range family with their own lookup, so a position is the element
//! itself (`Option<&T>` for sets, `Option<(&K, &V)>` for maps). Ordered
//! containers also answer the sorted-range family under a caller-supplied
//! ordering, walking their elements in order.
//!
//! The traits are implemented for *references* to containers because that is
//! what a placeholder yields when a query is evaluated.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};
use std::ops::Bound::{Excluded, Included, Unbounded};
use std::ops::Range;

use crate::elements;

//-----------------------------------------------------------------------------
// Sequences

// A contiguous, readable range.
pub trait Sequence {
    type Item;
    fn as_slice(&self) -> &[Self::Item];
}

pub type Item<S> = <S as Sequence>::Item;

impl<T> Sequence for [T] {
    type Item = T;
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T, const N : usize> Sequence for [T; N] {
    type Item = T;
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<'s, S> Sequence for &'s S where S : Sequence + ?Sized {
    type Item = S::Item;
    fn as_slice(&self) -> &[S::Item] {
        (**self).as_slice()
    }
}

//-----------------------------------------------------------------------------
// Member-dispatched queries

pub trait FindIn<X> {
    type Position;
    fn find_in(self, x : X) -> Self::Position;
}

pub trait CountIn<X> {
    fn count_in(self, x : X) -> usize;
}

pub trait Distance {
    fn distance(self) -> usize;
}

// The sorted-range family under the container's natural ordering.
pub trait SortedIn<X> {
    type Position;
    type Range;
    fn lower_bound_in(self, x : X) -> Self::Position;
    fn upper_bound_in(self, x : X) -> Self::Position;
    fn equal_range_in(self, x : X) -> Self::Range;
    fn contains_in(self, x : X) -> bool;
}

// The sorted-range family under a caller-supplied ordering r, where r(a, b)
// means a precedes b.
pub trait SortedByIn<X> {
    type Element;
    type Position;
    type Range;
    fn lower_bound_by_in<R>(self, x : X, r : R) -> Self::Position
    where R : FnMut(&Self::Element, &Self::Element) -> bool;
    fn upper_bound_by_in<R>(self, x : X, r : R) -> Self::Position
    where R : FnMut(&Self::Element, &Self::Element) -> bool;
    fn equal_range_by_in<R>(self, x : X, r : R) -> Self::Range
    where R : FnMut(&Self::Element, &Self::Element) -> bool;
    fn contains_by_in<R>(self, x : X, r : R) -> bool
    where R : FnMut(&Self::Element, &Self::Element) -> bool;
}

//-----------------------------------------------------------------------------
// Sequences use the generic algorithms.

impl<'a, S, X> FindIn<X> for &'a S
where S : Sequence + ?Sized, S::Item : PartialEq, X : Borrow<S::Item> {
    type Position = usize;
    fn find_in(self, x : X) -> usize {
        let x : &S::Item = x.borrow();
        elements::find(self.as_slice(), x)
    }
}

impl<'a, S, X> CountIn<X> for &'a S
where S : Sequence + ?Sized, S::Item : PartialEq, X : Borrow<S::Item> {
    fn count_in(self, x : X) -> usize {
        let x : &S::Item = x.borrow();
        elements::count(self.as_slice(), x)
    }
}

impl<'a, S> Distance for &'a S where S : Sequence + ?Sized {
    fn distance(self) -> usize {
        elements::distance(self.as_slice())
    }
}

impl<'a, S, X> SortedIn<X> for &'a S
where S : Sequence + ?Sized, S::Item : PartialOrd, X : Borrow<S::Item> {
    type Position = usize;
    type Range = Range<usize>;
    fn lower_bound_in(self, x : X) -> usize {
        let x : &S::Item = x.borrow();
        elements::lower_bound(self.as_slice(), x)
    }
    fn upper_bound_in(self, x : X) -> usize {
        let x : &S::Item = x.borrow();
        elements::upper_bound(self.as_slice(), x)
    }
    fn equal_range_in(self, x : X) -> Range<usize> {
        let x : &S::Item = x.borrow();
        elements::equal_range(self.as_slice(), x)
    }
    fn contains_in(self, x : X) -> bool {
        let x : &S::Item = x.borrow();
        elements::binary_search(self.as_slice(), x)
    }
}

impl<'a, S, X> SortedByIn<X> for &'a S
where S : Sequence + ?Sized, X : Borrow<S::Item> {
    type Element = S::Item;
    type Position = usize;
    type Range = Range<usize>;
    fn lower_bound_by_in<R>(self, x : X, r : R) -> usize
    where R : FnMut(&S::Item, &S::Item) -> bool {
        let x : &S::Item = x.borrow();
        elements::lower_bound_by(self.as_slice(), x, r)
    }
    fn upper_bound_by_in<R>(self, x : X, r : R) -> usize
    where R : FnMut(&S::Item, &S::Item) -> bool {
        let x : &S::Item = x.borrow();
        elements::upper_bound_by(self.as_slice(), x, r)
    }
    fn equal_range_by_in<R>(self, x : X, r : R) -> Range<usize>
    where R : FnMut(&S::Item, &S::Item) -> bool {
        let x : &S::Item = x.borrow();
        elements::equal_range_by(self.as_slice(), x, r)
    }
    fn contains_by_in<R>(self, x : X, r : R) -> bool
    where R : FnMut(&S::Item, &S::Item) -> bool {
        let x : &S::Item = x.borrow();
        elements::binary_search_by(self.as_slice(), x, r)
    }
}

//-----------------------------------------------------------------------------
// Ordered sets and maps

impl<'a, T, X> FindIn<X> for &'a BTreeSet<T> where T : Ord, X : Borrow<T> {
    type Position = Option<&'a T>;
    fn find_in(self, x : X) -> Option<&'a T> {
        let x : &T = x.borrow();
        self.get(x)
    }
}

impl<'a, T, X> CountIn<X> for &'a BTreeSet<T> where T : Ord, X : Borrow<T> {
    fn count_in(self, x : X) -> usize {
        let x : &T = x.borrow();
        usize::from(self.contains(x))
    }
}

impl<'a, T> Distance for &'a BTreeSet<T> {
    fn distance(self) -> usize {
        self.len()
    }
}

impl<'a, T, X> SortedIn<X> for &'a BTreeSet<T> where T : Ord, X : Borrow<T> {
    type Position = Option<&'a T>;
    type Range = (Option<&'a T>, Option<&'a T>);
    fn lower_bound_in(self, x : X) -> Option<&'a T> {
        let x : &T = x.borrow();
        self.range::<T, _>((Included(x), Unbounded)).next()
    }
    fn upper_bound_in(self, x : X) -> Option<&'a T> {
        let x : &T = x.borrow();
        self.range::<T, _>((Excluded(x), Unbounded)).next()
    }
    fn equal_range_in(self, x : X) -> Self::Range {
        let x : &T = x.borrow();
        (self.lower_bound_in(x), self.upper_bound_in(x))
    }
    fn contains_in(self, x : X) -> bool {
        let x : &T = x.borrow();
        self.contains(x)
    }
}

// A caller-supplied ordering cannot use the tree's own search, so these walk
// the elements in order.
// Precondition: the iteration order is increasing with respect to r
impl<'a, T, X> SortedByIn<X> for &'a BTreeSet<T> where X : Borrow<T> {
    type Element = T;
    type Position = Option<&'a T>;
    type Range = (Option<&'a T>, Option<&'a T>);
    fn lower_bound_by_in<R>(self, x : X, mut r : R) -> Option<&'a T>
    where R : FnMut(&T, &T) -> bool {
        let x : &T = x.borrow();
        self.iter().find(|&e| !r(e, x))
    }
    fn upper_bound_by_in<R>(self, x : X, mut r : R) -> Option<&'a T>
    where R : FnMut(&T, &T) -> bool {
        let x : &T = x.borrow();
        self.iter().find(|&e| r(x, e))
    }
    fn equal_range_by_in<R>(self, x : X, mut r : R) -> Self::Range
    where R : FnMut(&T, &T) -> bool {
        let x : &T = x.borrow();
        (self.lower_bound_by_in(x, &mut r), self.upper_bound_by_in(x, r))
    }
    fn contains_by_in<R>(self, x : X, mut r : R) -> bool
    where R : FnMut(&T, &T) -> bool {
        let x : &T = x.borrow();
        match self.lower_bound_by_in(x, &mut r) {
            Some(e) => !r(x, e),
            None => false,
        }
    }
}

impl<'a, K, V, X> FindIn<X> for &'a BTreeMap<K, V> where K : Ord, X : Borrow<K> {
    type Position = Option<(&'a K, &'a V)>;
    fn find_in(self, x : X) -> Self::Position {
        let x : &K = x.borrow();
        self.get_key_value(x)
    }
}

impl<'a, K, V, X> CountIn<X> for &'a BTreeMap<K, V> where K : Ord, X : Borrow<K> {
    fn count_in(self, x : X) -> usize {
        let x : &K = x.borrow();
        usize::from(self.contains_key(x))
    }
}

impl<'a, K, V> Distance for &'a BTreeMap<K, V> {
    fn distance(self) -> usize {
        self.len()
    }
}

impl<'a, K, V, X> SortedIn<X> for &'a BTreeMap<K, V> where K : Ord, X : Borrow<K> {
    type Position = Option<(&'a K, &'a V)>;
    type Range = (Option<(&'a K, &'a V)>, Option<(&'a K, &'a V)>);
    fn lower_bound_in(self, x : X) -> Self::Position {
        let x : &K = x.borrow();
        self.range::<K, _>((Included(x), Unbounded)).next()
    }
    fn upper_bound_in(self, x : X) -> Self::Position {
        let x : &K = x.borrow();
        self.range::<K, _>((Excluded(x), Unbounded)).next()
    }
    fn equal_range_in(self, x : X) -> Self::Range {
        let x : &K = x.borrow();
        (self.lower_bound_in(x), self.upper_bound_in(x))
    }
    fn contains_in(self, x : X) -> bool {
        let x : &K = x.borrow();
        self.contains_key(x)
    }
}

// Precondition: the key order is increasing with respect to r
impl<'a, K, V, X> SortedByIn<X> for &'a BTreeMap<K, V> where X : Borrow<K> {
    type Element = K;
    type Position = Option<(&'a K, &'a V)>;
    type Range = (Option<(&'a K, &'a V)>, Option<(&'a K, &'a V)>);
    fn lower_bound_by_in<R>(self, x : X, mut r : R) -> Self::Position
    where R : FnMut(&K, &K) -> bool {
        let x : &K = x.borrow();
        self.iter().find(|&(k, _)| !r(k, x))
    }
    fn upper_bound_by_in<R>(self, x : X, mut r : R) -> Self::Position
    where R : FnMut(&K, &K) -> bool {
        let x : &K = x.borrow();
        self.iter().find(|&(k, _)| r(x, k))
    }
    fn equal_range_by_in<R>(self, x : X, mut r : R) -> Self::Range
    where R : FnMut(&K, &K) -> bool {
        let x : &K = x.borrow();
        (self.lower_bound_by_in(x, &mut r), self.upper_bound_by_in(x, r))
    }
    fn contains_by_in<R>(self, x : X, mut r : R) -> bool
    where R : FnMut(&K, &K) -> bool {
        let x : &K = x.borrow();
        match self.lower_bound_by_in(x, &mut r) {
            Some((k, _)) => !r(x, k),
            None => false,
        }
    }
}

//-----------------------------------------------------------------------------
// Hashed sets and maps

impl<'a, T, H, X> FindIn<X> for &'a HashSet<T, H>
where T : Eq + Hash, H : BuildHasher, X : Borrow<T> {
    type Position = Option<&'a T>;
    fn find_in(self, x : X) -> Option<&'a T> {
        let x : &T = x.borrow();
        self.get(x)
    }
}

impl<'a, T, H, X> CountIn<X> for &'a HashSet<T, H>
where T : Eq + Hash, H : BuildHasher, X : Borrow<T> {
    fn count_in(self, x : X) -> usize {
        let x : &T = x.borrow();
        usize::from(self.contains(x))
    }
}

impl<'a, T, H> Distance for &'a HashSet<T, H> {
    fn distance(self) -> usize {
        self.len()
    }
}

impl<'a, K, V, H, X> FindIn<X> for &'a HashMap<K, V, H>
where K : Eq + Hash, H : BuildHasher, X : Borrow<K> {
    type Position = Option<(&'a K, &'a V)>;
    fn find_in(self, x : X) -> Self::Position {
        let x : &K = x.borrow();
        self.get_key_value(x)
    }
}

impl<'a, K, V, H, X> CountIn<X> for &'a HashMap<K, V, H>
where K : Eq + Hash, H : BuildHasher, X : Borrow<K> {
    fn count_in(self, x : X) -> usize {
        let x : &K = x.borrow();
        usize::from(self.contains_key(x))
    }
}

impl<'a, K, V, H> Distance for &'a HashMap<K, V, H> {
    fn distance(self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod test {

    use std::cmp::Reverse;
    use super::*;

    #[test]
    fn test_sequences_report_indices() {
        let v = vec![1, 2, 2, 3];
        assert_eq!((&v).find_in(2), 1);
        assert_eq!((&v).find_in(&9), 4);
        assert_eq!((&v).count_in(2), 2);
        assert_eq!((&v).distance(), 4);
        assert_eq!((&v).lower_bound_in(2), 1);
        assert_eq!((&v).upper_bound_in(2), 3);
        assert_eq!((&v).equal_range_in(2), 1..3);
        assert!((&v).contains_in(3));
        assert!(!(&v).contains_in(4));
    }

    #[test]
    fn test_ordered_containers_use_their_own_lookup() {
        let s : BTreeSet<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!((&s).find_in(2), s.get(&2));
        assert_eq!((&s).find_in(5), None);
        assert_eq!((&s).lower_bound_in(2), Some(&2));
        assert_eq!((&s).upper_bound_in(2), Some(&3));
        assert_eq!((&s).upper_bound_in(3), None);
        assert_eq!((&s).equal_range_in(2), (Some(&2), Some(&3)));
        assert_eq!((&s).count_in(3), 1);
        assert_eq!((&s).distance(), 3);

        let r : BTreeSet<Reverse<i32>> = [3, 2, 1].into_iter().map(Reverse).collect();
        assert_eq!((&r).lower_bound_in(Reverse(2)), Some(&Reverse(2)));
        assert_eq!((&r).upper_bound_in(Reverse(2)), Some(&Reverse(1)));

        let m : BTreeMap<i32, i32> = [(0, 1), (2, 3), (4, 5)].into_iter().collect();
        assert_eq!((&m).find_in(2), Some((&2, &3)));
        assert_eq!((&m).lower_bound_in(1), Some((&2, &3)));
        assert!(!(&m).contains_in(1));
    }

    #[test]
    fn test_ordered_containers_under_a_supplied_ordering() {
        let greater = |a : &Reverse<i32>, b : &Reverse<i32>| a.0 > b.0;
        let r : BTreeSet<Reverse<i32>> = [3, 2, 2, 1].into_iter().map(Reverse).collect();
        assert_eq!((&r).lower_bound_by_in(Reverse(2), greater), Some(&Reverse(2)));
        assert_eq!((&r).upper_bound_by_in(Reverse(2), greater), Some(&Reverse(1)));
        assert_eq!((&r).upper_bound_by_in(Reverse(1), greater), None);
        assert_eq!(
            (&r).equal_range_by_in(Reverse(2), greater),
            ((&r).lower_bound_in(Reverse(2)), (&r).upper_bound_in(Reverse(2)))
        );
        assert!((&r).contains_by_in(Reverse(3), greater));
        assert!(!(&r).contains_by_in(Reverse(0), greater));

        let less = |a : &i32, b : &i32| a < b;
        let m : BTreeMap<i32, i32> = [(0, 1), (2, 3), (4, 5)].into_iter().collect();
        assert_eq!((&m).lower_bound_by_in(1, less), Some((&2, &3)));
        assert_eq!((&m).upper_bound_by_in(2, less), Some((&4, &5)));
        assert!((&m).contains_by_in(4, less));
        assert!(!(&m).contains_by_in(3, less));

        let v = vec![3, 2, 2, 1];
        assert_eq!((&v).equal_range_by_in(2, |a : &i32, b : &i32| a > b), 1..3);
    }

    #[test]
    fn test_hashed_containers() {
        let s : HashSet<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!((&s).find_in(2), s.get(&2));
        assert_eq!((&s).count_in(7), 0);
        let m : HashMap<i32, i32> = [(0, 1), (2, 3), (4, 5)].into_iter().collect();
        assert_eq!((&m).find_in(4), Some((&4, &5)));
        assert_eq!((&m).distance(), 3);
    }
}
