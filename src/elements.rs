//! Eager querying algorithms over slices.
//!
//! Positions are indices into the slice and the end position (`s.len()`)
//! means "not found". A relation `r(a, b)` reads as "a precedes b" for the
//! sorted-range algorithms, and as "a matches b" everywhere else.

use std::ops::{Range, Shr};
use num::Zero;

//-----------------------------------------------------------------------------
// 2.1 Integers

// This is an incomplete implementation of the Integer concept with just the
// functions necessary for the counting and searching algorithms below.
pub trait Integer : num::Integer + Clone + Shr<Self, Output = Self> {
    fn successor(self) -> Self where Self : Sized {
        self + Self::one()
    }
    fn predecessor(self) -> Self where Self : Sized {
        self - Self::one()
    }
    fn half_nonnegative(self) -> Self where Self : Sized {
        self >> Self::one()
    }
}

impl<I> Integer for I
where I : num::Integer + Clone + Shr<I, Output = I> {}

//-----------------------------------------------------------------------------
// 6.4 Readable Ranges

pub fn find_if<T, P>(s : &[T], mut p : P) -> usize
where P : FnMut(&T) -> bool {
    // Precondition: readable_bounded_range(s)
    let l = s.len();
    let mut f : usize = 0;
    while (f != l) && !p(&s[f]) {
        f = f.successor();
    }
    f
}

pub fn find_if_not<T, P>(s : &[T], mut p : P) -> usize
where P : FnMut(&T) -> bool {
    find_if(s, |v| !p(v))
}

pub fn find<T>(s : &[T], x : &T) -> usize
where T : PartialEq {
    find_if(s, |v| *v == *x)
}

pub fn count_if<T, J, P>(s : &[T], mut p : P, mut j : J) -> J
where J : Integer, P : FnMut(&T) -> bool {
    // Precondition: readable_bounded_range(s)
    for v in s {
        if p(v) {
            j = j.successor();
        }
    }
    j
}

pub fn count_if_from_zero<T, P>(s : &[T], p : P) -> usize
where P : FnMut(&T) -> bool {
    count_if(s, p, usize::zero())
}

pub fn count<T>(s : &[T], x : &T) -> usize
where T : PartialEq {
    count_if_from_zero(s, |v| *v == *x)
}

pub fn distance<T>(s : &[T]) -> usize {
    s.len()
}

// Walks both ranges in step; stops at the shorter one.
pub fn find_mismatch<T, R>(s0 : &[T], s1 : &[T], mut r : R) -> (usize, usize)
where R : FnMut(&T, &T) -> bool {
    let (l0, l1) = (s0.len(), s1.len());
    let (mut f0, mut f1) : (usize, usize) = (0, 0);
    while f0 != l0 && f1 != l1 && r(&s0[f0], &s1[f1]) {
        f0 = f0.successor();
        f1 = f1.successor();
    }
    (f0, f1)
}

// Returns the position of the second element of the first adjacent pair that
// is not related by r.
pub fn find_adjacent_mismatch<T, R>(s : &[T], mut r : R) -> usize
where R : FnMut(&T, &T) -> bool {
    let l = s.len();
    if l == 0 {
        return l;
    }
    let mut f : usize = 1;
    while (f != l) && r(&s[f.predecessor()], &s[f]) {
        f = f.successor();
    }
    f
}

pub fn adjacent_find_by<T, R>(s : &[T], mut r : R) -> usize
where R : FnMut(&T, &T) -> bool {
    let f = find_adjacent_mismatch(s, |a, b| !r(a, b));
    if f == s.len() { f } else { f.predecessor() }
}

pub fn adjacent_find<T>(s : &[T]) -> usize
where T : PartialEq {
    adjacent_find_by(s, |a, b| a == b)
}

// Compares over the length of s0; a shorter s1 is never equal.
pub fn equal_by<T, R>(s0 : &[T], s1 : &[T], r : R) -> bool
where R : FnMut(&T, &T) -> bool {
    s1.len() >= s0.len() && find_mismatch(s0, s1, r).0 == s0.len()
}

pub fn equal<T>(s0 : &[T], s1 : &[T]) -> bool
where T : PartialEq {
    equal_by(s0, s1, |a, b| a == b)
}

pub fn search_by<T, R>(s : &[T], pattern : &[T], mut r : R) -> usize
where R : FnMut(&T, &T) -> bool {
    let (l, m) = (s.len(), pattern.len());
    if m > l {
        return l;
    }
    let mut f : usize = 0;
    while f + m <= l {
        if find_mismatch(&s[f..f + m], pattern, &mut r).1 == m {
            return f;
        }
        f = f.successor();
    }
    l
}

pub fn search<T>(s : &[T], pattern : &[T]) -> usize
where T : PartialEq {
    search_by(s, pattern, |a, b| a == b)
}

// Last occurrence of pattern. An empty pattern is never found.
pub fn find_end_by<T, R>(s : &[T], pattern : &[T], mut r : R) -> usize
where R : FnMut(&T, &T) -> bool {
    let (l, m) = (s.len(), pattern.len());
    if m == 0 || m > l {
        return l;
    }
    let mut f = l - m;
    loop {
        if find_mismatch(&s[f..f + m], pattern, &mut r).1 == m {
            return f;
        }
        if f == 0 {
            return l;
        }
        f = f.predecessor();
    }
}

pub fn find_end<T>(s : &[T], pattern : &[T]) -> usize
where T : PartialEq {
    find_end_by(s, pattern, |a, b| a == b)
}

pub fn find_first_of_by<T, R>(s : &[T], set : &[T], mut r : R) -> usize
where R : FnMut(&T, &T) -> bool {
    find_if(s, |a| set.iter().any(|b| r(a, b)))
}

pub fn find_first_of<T>(s : &[T], set : &[T]) -> usize
where T : PartialEq {
    find_first_of_by(s, set, |a, b| a == b)
}

pub fn search_n_by<T, R>(s : &[T], n : usize, x : &T, mut r : R) -> usize
where R : FnMut(&T, &T) -> bool {
    let l = s.len();
    if n == 0 {
        return 0;
    }
    let mut f : usize = 0;
    while l - f >= n {
        let k = find_if_not(&s[f..f + n], |v| r(v, x));
        if k == n {
            return f;
        }
        f = f + k.successor();
    }
    l
}

pub fn search_n<T>(s : &[T], n : usize, x : &T) -> usize
where T : PartialEq {
    search_n_by(s, n, x, |a, b| a == b)
}

//-----------------------------------------------------------------------------
// 6.5 Increasing Ranges

pub fn relation_preserving<T, R>(s : &[T], r : R) -> bool
where R : FnMut(&T, &T) -> bool {
    // Precondition: readable_bounded_range(s)
    s.len() == find_adjacent_mismatch(s, r)
}

pub fn strictly_increasing_range<T, R>(s : &[T], r : R) -> bool
where R : FnMut(&T, &T) -> bool {
    // Precondition: weak_ordering(r)
    relation_preserving(s, r)
}

pub fn complement_of_converse<A, R>(mut r : R) -> impl FnMut(&A, &A) -> bool
where R : FnMut(&A, &A) -> bool {
    move |a : &A, b : &A| !r(b, a)
}

pub fn increasing_range<T, R>(s : &[T], r : R) -> bool
where R : FnMut(&T, &T) -> bool {
    // Precondition: weak_ordering(r)
    relation_preserving(s, complement_of_converse(r))
}

// Position just past the longest increasing prefix.
pub fn increasing_prefix<T, R>(s : &[T], r : R) -> usize
where R : FnMut(&T, &T) -> bool {
    find_adjacent_mismatch(s, complement_of_converse(r))
}

// True when every element failing p precedes every element satisfying p.
pub fn partitioned<T, P>(s : &[T], mut p : P) -> bool
where P : FnMut(&T) -> bool {
    let g = find_if(s, &mut p);
    s.len() == g + find_if_not(&s[g..], p)
}

//-----------------------------------------------------------------------------
// 6.6 Forward Iterators

pub fn partition_point_n<T, P>(s : &[T], mut f : usize, mut n : usize, mut p : P) -> usize
where P : FnMut(&T) -> bool {
    // Precondition: f + n <= s.len() && partitioned(&s[f..f + n], p)
    while !n.is_zero() {
        let h = n.half_nonnegative();
        let m = f + h;
        if p(&s[m]) {
            n = h;
        } else {
            n = n - h.successor();
            f = m.successor();
        }
    }
    f
}

pub fn partition_point<T, P>(s : &[T], p : P) -> usize
where P : FnMut(&T) -> bool {
    partition_point_n(s, 0, s.len(), p)
}

pub fn lower_bound_by<T, R>(s : &[T], x : &T, mut r : R) -> usize
where R : FnMut(&T, &T) -> bool {
    // Precondition: increasing_range(s, r)
    partition_point(s, |v| !r(v, x))
}

pub fn upper_bound_by<T, R>(s : &[T], x : &T, mut r : R) -> usize
where R : FnMut(&T, &T) -> bool {
    // Precondition: increasing_range(s, r)
    partition_point(s, |v| r(x, v))
}

pub fn equal_range_by<T, R>(s : &[T], x : &T, mut r : R) -> Range<usize>
where R : FnMut(&T, &T) -> bool {
    let lower = lower_bound_by(s, x, &mut r);
    let upper = lower + upper_bound_by(&s[lower..], x, r);
    lower..upper
}

pub fn binary_search_by<T, R>(s : &[T], x : &T, mut r : R) -> bool
where R : FnMut(&T, &T) -> bool {
    let f = lower_bound_by(s, x, &mut r);
    f != s.len() && !r(x, &s[f])
}

pub fn lower_bound<T>(s : &[T], x : &T) -> usize
where T : PartialOrd {
    lower_bound_by(s, x, |a, b| a < b)
}

pub fn upper_bound<T>(s : &[T], x : &T) -> usize
where T : PartialOrd {
    upper_bound_by(s, x, |a, b| a < b)
}

pub fn equal_range<T>(s : &[T], x : &T) -> Range<usize>
where T : PartialOrd {
    equal_range_by(s, x, |a, b| a < b)
}

pub fn binary_search<T>(s : &[T], x : &T) -> bool
where T : PartialOrd {
    binary_search_by(s, x, |a, b| a < b)
}

// Both ranges must be increasing with respect to r; multiplicities count.
pub fn includes_by<T, R>(s0 : &[T], s1 : &[T], mut r : R) -> bool
where R : FnMut(&T, &T) -> bool {
    let (l0, l1) = (s0.len(), s1.len());
    let (mut f0, mut f1) : (usize, usize) = (0, 0);
    while f1 != l1 {
        if f0 == l0 || r(&s1[f1], &s0[f0]) {
            return false;
        }
        if !r(&s0[f0], &s1[f1]) {
            f1 = f1.successor();
        }
        f0 = f0.successor();
    }
    true
}

pub fn includes<T>(s0 : &[T], s1 : &[T]) -> bool
where T : PartialOrd {
    includes_by(s0, s1, |a, b| a < b)
}

//-----------------------------------------------------------------------------
// Ordering queries

pub fn lexicographical_compare_by<T, R>(s0 : &[T], s1 : &[T], mut r : R) -> bool
where R : FnMut(&T, &T) -> bool {
    let (f0, f1) = find_mismatch(s0, s1, |a, b| !r(a, b) && !r(b, a));
    if f1 == s1.len() {
        false
    } else if f0 == s0.len() {
        true
    } else {
        r(&s0[f0], &s1[f1])
    }
}

pub fn lexicographical_compare<T>(s0 : &[T], s1 : &[T]) -> bool
where T : PartialOrd {
    lexicographical_compare_by(s0, s1, |a, b| a < b)
}

// First of the smallest elements.
pub fn min_element_by<T, R>(s : &[T], mut r : R) -> usize
where R : FnMut(&T, &T) -> bool {
    let l = s.len();
    if l == 0 {
        return l;
    }
    let mut m : usize = 0;
    let mut f : usize = 1;
    while f != l {
        if r(&s[f], &s[m]) {
            m = f;
        }
        f = f.successor();
    }
    m
}

// First of the largest elements.
pub fn max_element_by<T, R>(s : &[T], mut r : R) -> usize
where R : FnMut(&T, &T) -> bool {
    let l = s.len();
    if l == 0 {
        return l;
    }
    let mut m : usize = 0;
    let mut f : usize = 1;
    while f != l {
        if r(&s[m], &s[f]) {
            m = f;
        }
        f = f.successor();
    }
    m
}

pub fn min_element<T>(s : &[T]) -> usize
where T : PartialOrd {
    min_element_by(s, |a, b| a < b)
}

pub fn max_element<T>(s : &[T]) -> usize
where T : PartialOrd {
    max_element_by(s, |a, b| a < b)
}

//=============================================================================

#[cfg(test)]
mod test {

    use std::fmt::Debug;
    use super::*;

    fn test_find<T>(s : &[T], x : T, k : usize)
    where T : PartialEq {
        assert_eq!(find(s, &x), k);
    }

    fn test_find_if<T>(s : &[T], x : T, k : usize)
    where T : PartialEq {
        assert_eq!(find_if(s, |v| *v == x), k);
        assert_eq!(find_if_not(s, |v| *v != x), k);
    }

    fn test_count_if<T>(s : &[T], i : T, j : T, k : u8, m : u8)
    where T : PartialOrd {
        let c1 : u8 = count_if(s, |v| *v > i && *v < j, k);
        assert_eq!(c1, m);
    }

    fn test_find_mismatch<T>(s0 : &[T], s1 : &[T])
    where T : PartialEq + Debug {
        let (i, j) = find_mismatch(s0, s1, |a, b| a == b);
        assert!(s0[i] != s1[j]);
    }

    fn test_sorted_family<T>(s : &[T], x : T, lower : usize, upper : usize)
    where T : PartialOrd {
        assert!(increasing_range(s, |a, b| a < b));
        assert_eq!(lower_bound(s, &x), lower);
        assert_eq!(upper_bound(s, &x), upper);
        assert_eq!(equal_range(s, &x), lower..upper);
        assert_eq!(binary_search(s, &x), lower != upper);
    }

    #[test]
    fn test_slices() {
        let v = [0, 1, 2, 3];
        let w = [0, 1, 3, 2];

        test_find(&v, 2, 2);
        test_find(&v, 7, v.len());
        test_find_if(&v, 1, 1);
        test_count_if(&v, 0, 3, 1, 3);
        assert_eq!(count_if_from_zero(&v, |x| *x > 0 && *x < 3), 2);
        assert_eq!(count(&[1, 1, 0, 1, 1], &1), 4);
        assert_eq!(distance(&[1, 1, 0, 1, 1]), 5);
        test_find_mismatch(&v, &w);
        assert_eq!(find_adjacent_mismatch(&w, |a, b| a < b), 3);
        assert!(relation_preserving(&v, |a, b| b > a));
        assert!(strictly_increasing_range(&v, |a, b| a < b));
        assert!(!increasing_range(&w, |a, b| a < b));
        assert_eq!(increasing_prefix(&w, |a, b| a < b), 3);
        assert!(partitioned(&v, |a| *a > 2));
        assert!(!partitioned(&w, |a| *a > 2));
        test_sorted_family(&[1, 2, 2, 3], 2, 1, 3);
        test_sorted_family(&[1, 2, 3], 4, 3, 3);
        test_sorted_family(&[1, 2, 3], 0, 0, 0);
    }

    #[test]
    fn test_complement_of_converse() {
        let mut r = complement_of_converse(|a : &i32, b : &i32| b > a);
        assert!(r(&3, &4) == true);
        assert!(r(&4, &4) == true);
        assert!(r(&5, &4) == false);
    }

    #[test]
    fn test_partition_point_n() {
        let v = [1, 3, 5, 6, 8, 10];
        assert_eq!(partition_point_n(&v, 0, v.len(), |x| x % 2 == 0), 3);
        assert_eq!(partition_point_n(&v, 4, 2, |x| x % 2 == 0), 4);
        assert_eq!(partition_point(&v, |x| *x > 100), v.len());
        assert_eq!(partition_point::<i32, _>(&[], |x| *x > 100), 0);
    }

    #[test]
    fn test_subsequences() {
        let a = [1, 2, 3, 1, 2, 3, 1];
        assert_eq!(search(&a, &[2, 3]), 1);
        assert_eq!(search(&a, &[]), 0);
        assert_eq!(search(&a, &[3, 3]), a.len());
        assert_eq!(search(&[1, 2], &[1, 2, 3]), 2);
        assert_eq!(find_end(&a, &[1, 2, 3]), 3);
        assert_eq!(find_end(&a, &[]), a.len());
        assert_eq!(find_end(&a, &[1]), 6);
        assert_eq!(find_first_of(&a, &[3, 4]), 2);
        assert_eq!(find_first_of(&a, &[]), a.len());
        assert_eq!(search_n(&[1, 2, 2, 3, 2, 2, 2], 3, &2), 4);
        assert_eq!(search_n(&[1, 2, 2], 0, &5), 0);
        assert_eq!(search_n(&[1, 2, 2], 3, &2), 3);
    }

    #[test]
    fn test_adjacent_and_equal() {
        assert_eq!(adjacent_find(&[0, 1, 3, 4, 4]), 3);
        assert_eq!(adjacent_find(&[0, 1, 2]), 3);
        assert_eq!(adjacent_find::<i32>(&[]), 0);
        assert_eq!(adjacent_find(&[7]), 1);
        assert!(equal(&[1, 2, 3], &[1, 2, 3]));
        assert!(!equal(&[1, 2, 3], &[1, 2]));
        assert!(equal(&[1, 2, 3], &[1, 2, 3, 4]));
        assert!(equal::<i32>(&[], &[5]));
        assert!(!equal(&[1, 2, 3], &[1, 2, 4]));
    }

    #[test]
    fn test_ordering_queries() {
        assert!(includes(&[1, 2, 2, 3, 5], &[2, 2, 5]));
        assert!(!includes(&[1, 2, 3, 5], &[2, 2]));
        assert!(includes::<i32>(&[1], &[]));
        assert!(lexicographical_compare(&[1, 2], &[1, 2, 0]));
        assert!(!lexicographical_compare(&[1, 2, 0], &[1, 2]));
        assert!(!lexicographical_compare(&[1, 2], &[1, 2]));
        assert!(lexicographical_compare(&[1, 1, 9], &[1, 2]));
        assert_eq!(min_element(&[3, 1, 4, 1, 5]), 1);
        assert_eq!(max_element(&[3, 5, 4, 5, 1]), 1);
        assert_eq!(min_element::<i32>(&[]), 0);
        assert_eq!(max_element_by(&[3, 5, 4], |a, b| a > b), 0);
    }
}
