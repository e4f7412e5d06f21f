//! Lazy querying algorithms.
//!
//! Every function here builds a deferred [`Actor`]. Nothing is evaluated
//! until the actor is called with concrete arguments, at which point the
//! result is exactly what the eager algorithm in [`elements`] (or the
//! container's own lookup, see [`container`](crate::container)) returns for
//! the same inputs.
//!
//! ```
//! use elements_querying::{arg1, arg2, find, mismatch};
//!
//! assert_eq!(find(arg1, 2).call(&[1, 2, 3]), 1);
//! assert_eq!(mismatch(arg1, arg2).call2(&[1, 2, 3, 4, 5], &[1, 2, 4]), (2, 2));
//! ```
//!
//! Forms ending in `_by` take a relation in place of `==` or `<`. Relations
//! are any `Fn(&T, &T) -> bool`, or one of [`EqualTo`], [`Less`], [`Greater`].

use std::borrow::Borrow;

use crate::actor::{Actor, Expr, IntoActor};
use crate::container::{CountIn, FindIn, Item, Sequence, SortedByIn, SortedIn};
use crate::container::Distance as _;
use crate::container;
use crate::elements;

//-----------------------------------------------------------------------------
// Relations

pub trait Relation<T : ?Sized> {
    fn holds(&self, a : &T, b : &T) -> bool;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EqualTo;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Less;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Greater;

impl<T> Relation<T> for EqualTo where T : PartialEq + ?Sized {
    fn holds(&self, a : &T, b : &T) -> bool {
        a == b
    }
}

impl<T> Relation<T> for Less where T : PartialOrd + ?Sized {
    fn holds(&self, a : &T, b : &T) -> bool {
        a < b
    }
}

impl<T> Relation<T> for Greater where T : PartialOrd + ?Sized {
    fn holds(&self, a : &T, b : &T) -> bool {
        a > b
    }
}

impl<T, F> Relation<T> for F where T : ?Sized, F : Fn(&T, &T) -> bool {
    fn holds(&self, a : &T, b : &T) -> bool {
        self(a, b)
    }
}

//-----------------------------------------------------------------------------
// find, find_if, find_if_not

#[derive(Clone, Copy, Debug)]
pub struct Find<S, X> {
    seq : S,
    value : X,
}

pub fn find<S, X>(seq : S, value : X) -> Actor<Find<S::Expr, X::Expr>>
where S : IntoActor, X : IntoActor {
    Actor(Find { seq : seq.into_actor().0, value : value.into_actor().0 })
}

impl<Args, S, X> Expr<Args> for Find<S, X>
where Args : Copy, S : Expr<Args>, X : Expr<Args>, S::Output : FindIn<X::Output> {
    type Output = <S::Output as FindIn<X::Output>>::Position;
    fn eval(&self, args : Args) -> Self::Output {
        self.seq.eval(args).find_in(self.value.eval(args))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FindIf<S, P> {
    seq : S,
    pred : P,
}

pub fn find_if<S, P>(seq : S, pred : P) -> Actor<FindIf<S::Expr, P>>
where S : IntoActor {
    Actor(FindIf { seq : seq.into_actor().0, pred })
}

impl<Args, S, P> Expr<Args> for FindIf<S, P>
where S : Expr<Args>, S::Output : Sequence, P : Fn(&Item<S::Output>) -> bool {
    type Output = usize;
    fn eval(&self, args : Args) -> usize {
        let s = self.seq.eval(args);
        elements::find_if(s.as_slice(), &self.pred)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FindIfNot<S, P> {
    seq : S,
    pred : P,
}

pub fn find_if_not<S, P>(seq : S, pred : P) -> Actor<FindIfNot<S::Expr, P>>
where S : IntoActor {
    Actor(FindIfNot { seq : seq.into_actor().0, pred })
}

impl<Args, S, P> Expr<Args> for FindIfNot<S, P>
where S : Expr<Args>, S::Output : Sequence, P : Fn(&Item<S::Output>) -> bool {
    type Output = usize;
    fn eval(&self, args : Args) -> usize {
        let s = self.seq.eval(args);
        elements::find_if_not(s.as_slice(), &self.pred)
    }
}

//-----------------------------------------------------------------------------
// all_of, any_of, none_of

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quantifier {
    AllOf,
    AnyOf,
    NoneOf,
}

#[derive(Clone, Copy, Debug)]
pub struct Quantified<S, P> {
    seq : S,
    pred : P,
    quantifier : Quantifier,
}

fn quantified<S, P>(seq : S, pred : P, quantifier : Quantifier) -> Actor<Quantified<S::Expr, P>>
where S : IntoActor {
    Actor(Quantified { seq : seq.into_actor().0, pred, quantifier })
}

pub fn all_of<S, P>(seq : S, pred : P) -> Actor<Quantified<S::Expr, P>>
where S : IntoActor {
    quantified(seq, pred, Quantifier::AllOf)
}

pub fn any_of<S, P>(seq : S, pred : P) -> Actor<Quantified<S::Expr, P>>
where S : IntoActor {
    quantified(seq, pred, Quantifier::AnyOf)
}

pub fn none_of<S, P>(seq : S, pred : P) -> Actor<Quantified<S::Expr, P>>
where S : IntoActor {
    quantified(seq, pred, Quantifier::NoneOf)
}

impl<Args, S, P> Expr<Args> for Quantified<S, P>
where S : Expr<Args>, S::Output : Sequence, P : Fn(&Item<S::Output>) -> bool {
    type Output = bool;
    fn eval(&self, args : Args) -> bool {
        let s = self.seq.eval(args);
        let s = s.as_slice();
        match self.quantifier {
            Quantifier::AllOf => elements::find_if_not(s, &self.pred) == s.len(),
            Quantifier::AnyOf => elements::find_if(s, &self.pred) != s.len(),
            Quantifier::NoneOf => elements::find_if(s, &self.pred) == s.len(),
        }
    }
}

//-----------------------------------------------------------------------------
// find_end, find_first_of, search

#[derive(Clone, Copy, Debug)]
pub struct FindEnd<S1, S2, R> {
    seq : S1,
    pattern : S2,
    rel : R,
}

pub fn find_end<S1, S2>(seq : S1, pattern : S2) -> Actor<FindEnd<S1::Expr, S2::Expr, EqualTo>>
where S1 : IntoActor, S2 : IntoActor {
    find_end_by(seq, pattern, EqualTo)
}

pub fn find_end_by<S1, S2, R>(seq : S1, pattern : S2, rel : R) -> Actor<FindEnd<S1::Expr, S2::Expr, R>>
where S1 : IntoActor, S2 : IntoActor {
    Actor(FindEnd { seq : seq.into_actor().0, pattern : pattern.into_actor().0, rel })
}

impl<Args, S1, S2, R> Expr<Args> for FindEnd<S1, S2, R>
where Args : Copy, S1 : Expr<Args>, S2 : Expr<Args>,
S1::Output : Sequence, S2::Output : Sequence<Item = Item<S1::Output>>,
R : Relation<Item<S1::Output>> {
    type Output = usize;
    fn eval(&self, args : Args) -> usize {
        let (s, p) = (self.seq.eval(args), self.pattern.eval(args));
        elements::find_end_by(s.as_slice(), p.as_slice(), |a, b| self.rel.holds(a, b))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FindFirstOf<S1, S2, R> {
    seq : S1,
    set : S2,
    rel : R,
}

pub fn find_first_of<S1, S2>(seq : S1, set : S2) -> Actor<FindFirstOf<S1::Expr, S2::Expr, EqualTo>>
where S1 : IntoActor, S2 : IntoActor {
    find_first_of_by(seq, set, EqualTo)
}

pub fn find_first_of_by<S1, S2, R>(seq : S1, set : S2, rel : R) -> Actor<FindFirstOf<S1::Expr, S2::Expr, R>>
where S1 : IntoActor, S2 : IntoActor {
    Actor(FindFirstOf { seq : seq.into_actor().0, set : set.into_actor().0, rel })
}

impl<Args, S1, S2, R> Expr<Args> for FindFirstOf<S1, S2, R>
where Args : Copy, S1 : Expr<Args>, S2 : Expr<Args>,
S1::Output : Sequence, S2::Output : Sequence<Item = Item<S1::Output>>,
R : Relation<Item<S1::Output>> {
    type Output = usize;
    fn eval(&self, args : Args) -> usize {
        let (s, t) = (self.seq.eval(args), self.set.eval(args));
        elements::find_first_of_by(s.as_slice(), t.as_slice(), |a, b| self.rel.holds(a, b))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Search<S1, S2, R> {
    seq : S1,
    pattern : S2,
    rel : R,
}

pub fn search<S1, S2>(seq : S1, pattern : S2) -> Actor<Search<S1::Expr, S2::Expr, EqualTo>>
where S1 : IntoActor, S2 : IntoActor {
    search_by(seq, pattern, EqualTo)
}

pub fn search_by<S1, S2, R>(seq : S1, pattern : S2, rel : R) -> Actor<Search<S1::Expr, S2::Expr, R>>
where S1 : IntoActor, S2 : IntoActor {
    Actor(Search { seq : seq.into_actor().0, pattern : pattern.into_actor().0, rel })
}

impl<Args, S1, S2, R> Expr<Args> for Search<S1, S2, R>
where Args : Copy, S1 : Expr<Args>, S2 : Expr<Args>,
S1::Output : Sequence, S2::Output : Sequence<Item = Item<S1::Output>>,
R : Relation<Item<S1::Output>> {
    type Output = usize;
    fn eval(&self, args : Args) -> usize {
        let (s, p) = (self.seq.eval(args), self.pattern.eval(args));
        elements::search_by(s.as_slice(), p.as_slice(), |a, b| self.rel.holds(a, b))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SearchN<S, X, R> {
    seq : S,
    n : usize,
    value : X,
    rel : R,
}

pub fn search_n<S, X>(seq : S, n : usize, value : X) -> Actor<SearchN<S::Expr, X::Expr, EqualTo>>
where S : IntoActor, X : IntoActor {
    search_n_by(seq, n, value, EqualTo)
}

pub fn search_n_by<S, X, R>(seq : S, n : usize, value : X, rel : R) -> Actor<SearchN<S::Expr, X::Expr, R>>
where S : IntoActor, X : IntoActor {
    Actor(SearchN { seq : seq.into_actor().0, n, value : value.into_actor().0, rel })
}

impl<Args, S, X, R> Expr<Args> for SearchN<S, X, R>
where Args : Copy, S : Expr<Args>, X : Expr<Args>, S::Output : Sequence,
X::Output : Borrow<Item<S::Output>>, R : Relation<Item<S::Output>> {
    type Output = usize;
    fn eval(&self, args : Args) -> usize {
        let (s, x) = (self.seq.eval(args), self.value.eval(args));
        let x : &Item<S::Output> = x.borrow();
        elements::search_n_by(s.as_slice(), self.n, x, |a, b| self.rel.holds(a, b))
    }
}

//-----------------------------------------------------------------------------
// adjacent_find

#[derive(Clone, Copy, Debug)]
pub struct AdjacentFind<S, R> {
    seq : S,
    rel : R,
}

pub fn adjacent_find<S>(seq : S) -> Actor<AdjacentFind<S::Expr, EqualTo>>
where S : IntoActor {
    adjacent_find_by(seq, EqualTo)
}

pub fn adjacent_find_by<S, R>(seq : S, rel : R) -> Actor<AdjacentFind<S::Expr, R>>
where S : IntoActor {
    Actor(AdjacentFind { seq : seq.into_actor().0, rel })
}

impl<Args, S, R> Expr<Args> for AdjacentFind<S, R>
where S : Expr<Args>, S::Output : Sequence, R : Relation<Item<S::Output>> {
    type Output = usize;
    fn eval(&self, args : Args) -> usize {
        let s = self.seq.eval(args);
        elements::adjacent_find_by(s.as_slice(), |a, b| self.rel.holds(a, b))
    }
}

//-----------------------------------------------------------------------------
// count, count_if, distance

#[derive(Clone, Copy, Debug)]
pub struct Count<S, X> {
    seq : S,
    value : X,
}

pub fn count<S, X>(seq : S, value : X) -> Actor<Count<S::Expr, X::Expr>>
where S : IntoActor, X : IntoActor {
    Actor(Count { seq : seq.into_actor().0, value : value.into_actor().0 })
}

impl<Args, S, X> Expr<Args> for Count<S, X>
where Args : Copy, S : Expr<Args>, X : Expr<Args>, S::Output : CountIn<X::Output> {
    type Output = usize;
    fn eval(&self, args : Args) -> usize {
        self.seq.eval(args).count_in(self.value.eval(args))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CountIf<S, P> {
    seq : S,
    pred : P,
}

pub fn count_if<S, P>(seq : S, pred : P) -> Actor<CountIf<S::Expr, P>>
where S : IntoActor {
    Actor(CountIf { seq : seq.into_actor().0, pred })
}

impl<Args, S, P> Expr<Args> for CountIf<S, P>
where S : Expr<Args>, S::Output : Sequence, P : Fn(&Item<S::Output>) -> bool {
    type Output = usize;
    fn eval(&self, args : Args) -> usize {
        let s = self.seq.eval(args);
        elements::count_if_from_zero(s.as_slice(), &self.pred)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Distance<S> {
    seq : S,
}

pub fn distance<S>(seq : S) -> Actor<Distance<S::Expr>>
where S : IntoActor {
    Actor(Distance { seq : seq.into_actor().0 })
}

impl<Args, S> Expr<Args> for Distance<S>
where S : Expr<Args>, S::Output : container::Distance {
    type Output = usize;
    fn eval(&self, args : Args) -> usize {
        self.seq.eval(args).distance()
    }
}

//-----------------------------------------------------------------------------
// mismatch, equal

#[derive(Clone, Copy, Debug)]
pub struct Mismatch<S1, S2, R> {
    seq0 : S1,
    seq1 : S2,
    rel : R,
}

pub fn mismatch<S1, S2>(seq0 : S1, seq1 : S2) -> Actor<Mismatch<S1::Expr, S2::Expr, EqualTo>>
where S1 : IntoActor, S2 : IntoActor {
    mismatch_by(seq0, seq1, EqualTo)
}

pub fn mismatch_by<S1, S2, R>(seq0 : S1, seq1 : S2, rel : R) -> Actor<Mismatch<S1::Expr, S2::Expr, R>>
where S1 : IntoActor, S2 : IntoActor {
    Actor(Mismatch { seq0 : seq0.into_actor().0, seq1 : seq1.into_actor().0, rel })
}

impl<Args, S1, S2, R> Expr<Args> for Mismatch<S1, S2, R>
where Args : Copy, S1 : Expr<Args>, S2 : Expr<Args>,
S1::Output : Sequence, S2::Output : Sequence<Item = Item<S1::Output>>,
R : Relation<Item<S1::Output>> {
    type Output = (usize, usize);
    fn eval(&self, args : Args) -> (usize, usize) {
        let (s0, s1) = (self.seq0.eval(args), self.seq1.eval(args));
        elements::find_mismatch(s0.as_slice(), s1.as_slice(), |a, b| self.rel.holds(a, b))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Equal<S1, S2, R> {
    seq0 : S1,
    seq1 : S2,
    rel : R,
}

pub fn equal<S1, S2>(seq0 : S1, seq1 : S2) -> Actor<Equal<S1::Expr, S2::Expr, EqualTo>>
where S1 : IntoActor, S2 : IntoActor {
    equal_by(seq0, seq1, EqualTo)
}

pub fn equal_by<S1, S2, R>(seq0 : S1, seq1 : S2, rel : R) -> Actor<Equal<S1::Expr, S2::Expr, R>>
where S1 : IntoActor, S2 : IntoActor {
    Actor(Equal { seq0 : seq0.into_actor().0, seq1 : seq1.into_actor().0, rel })
}

impl<Args, S1, S2, R> Expr<Args> for Equal<S1, S2, R>
where Args : Copy, S1 : Expr<Args>, S2 : Expr<Args>,
S1::Output : Sequence, S2::Output : Sequence<Item = Item<S1::Output>>,
R : Relation<Item<S1::Output>> {
    type Output = bool;
    fn eval(&self, args : Args) -> bool {
        let (s0, s1) = (self.seq0.eval(args), self.seq1.eval(args));
        elements::equal_by(s0.as_slice(), s1.as_slice(), |a, b| self.rel.holds(a, b))
    }
}

//-----------------------------------------------------------------------------
// Sorted ranges under the natural ordering: these dispatch to the container.

#[derive(Clone, Copy, Debug)]
pub struct LowerBound<S, X> {
    seq : S,
    value : X,
}

pub fn lower_bound<S, X>(seq : S, value : X) -> Actor<LowerBound<S::Expr, X::Expr>>
where S : IntoActor, X : IntoActor {
    Actor(LowerBound { seq : seq.into_actor().0, value : value.into_actor().0 })
}

impl<Args, S, X> Expr<Args> for LowerBound<S, X>
where Args : Copy, S : Expr<Args>, X : Expr<Args>, S::Output : SortedIn<X::Output> {
    type Output = <S::Output as SortedIn<X::Output>>::Position;
    fn eval(&self, args : Args) -> Self::Output {
        self.seq.eval(args).lower_bound_in(self.value.eval(args))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct UpperBound<S, X> {
    seq : S,
    value : X,
}

pub fn upper_bound<S, X>(seq : S, value : X) -> Actor<UpperBound<S::Expr, X::Expr>>
where S : IntoActor, X : IntoActor {
    Actor(UpperBound { seq : seq.into_actor().0, value : value.into_actor().0 })
}

impl<Args, S, X> Expr<Args> for UpperBound<S, X>
where Args : Copy, S : Expr<Args>, X : Expr<Args>, S::Output : SortedIn<X::Output> {
    type Output = <S::Output as SortedIn<X::Output>>::Position;
    fn eval(&self, args : Args) -> Self::Output {
        self.seq.eval(args).upper_bound_in(self.value.eval(args))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct EqualRange<S, X> {
    seq : S,
    value : X,
}

pub fn equal_range<S, X>(seq : S, value : X) -> Actor<EqualRange<S::Expr, X::Expr>>
where S : IntoActor, X : IntoActor {
    Actor(EqualRange { seq : seq.into_actor().0, value : value.into_actor().0 })
}

impl<Args, S, X> Expr<Args> for EqualRange<S, X>
where Args : Copy, S : Expr<Args>, X : Expr<Args>, S::Output : SortedIn<X::Output> {
    type Output = <S::Output as SortedIn<X::Output>>::Range;
    fn eval(&self, args : Args) -> Self::Output {
        self.seq.eval(args).equal_range_in(self.value.eval(args))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct BinarySearch<S, X> {
    seq : S,
    value : X,
}

pub fn binary_search<S, X>(seq : S, value : X) -> Actor<BinarySearch<S::Expr, X::Expr>>
where S : IntoActor, X : IntoActor {
    Actor(BinarySearch { seq : seq.into_actor().0, value : value.into_actor().0 })
}

impl<Args, S, X> Expr<Args> for BinarySearch<S, X>
where Args : Copy, S : Expr<Args>, X : Expr<Args>, S::Output : SortedIn<X::Output> {
    type Output = bool;
    fn eval(&self, args : Args) -> bool {
        self.seq.eval(args).contains_in(self.value.eval(args))
    }
}

//-----------------------------------------------------------------------------
// Sorted ranges under a caller-supplied ordering. Sequences search by
// partition; ordered containers walk their elements, and must already be
// increasing with respect to the ordering.

type Ordered<S, X> = <S as SortedByIn<X>>::Element;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Lower,
    Upper,
}

#[derive(Clone, Copy, Debug)]
pub struct BoundBy<S, X, R> {
    seq : S,
    value : X,
    rel : R,
    bound : Bound,
}

pub fn lower_bound_by<S, X, R>(seq : S, value : X, rel : R) -> Actor<BoundBy<S::Expr, X::Expr, R>>
where S : IntoActor, X : IntoActor {
    Actor(BoundBy { seq : seq.into_actor().0, value : value.into_actor().0, rel, bound : Bound::Lower })
}

pub fn upper_bound_by<S, X, R>(seq : S, value : X, rel : R) -> Actor<BoundBy<S::Expr, X::Expr, R>>
where S : IntoActor, X : IntoActor {
    Actor(BoundBy { seq : seq.into_actor().0, value : value.into_actor().0, rel, bound : Bound::Upper })
}

impl<Args, S, X, R> Expr<Args> for BoundBy<S, X, R>
where Args : Copy, S : Expr<Args>, X : Expr<Args>, S::Output : SortedByIn<X::Output>,
R : Relation<Ordered<S::Output, X::Output>> {
    type Output = <S::Output as SortedByIn<X::Output>>::Position;
    fn eval(&self, args : Args) -> Self::Output {
        let (s, x) = (self.seq.eval(args), self.value.eval(args));
        match self.bound {
            Bound::Lower => s.lower_bound_by_in(x, |a, b| self.rel.holds(a, b)),
            Bound::Upper => s.upper_bound_by_in(x, |a, b| self.rel.holds(a, b)),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct EqualRangeBy<S, X, R> {
    seq : S,
    value : X,
    rel : R,
}

pub fn equal_range_by<S, X, R>(seq : S, value : X, rel : R) -> Actor<EqualRangeBy<S::Expr, X::Expr, R>>
where S : IntoActor, X : IntoActor {
    Actor(EqualRangeBy { seq : seq.into_actor().0, value : value.into_actor().0, rel })
}

impl<Args, S, X, R> Expr<Args> for EqualRangeBy<S, X, R>
where Args : Copy, S : Expr<Args>, X : Expr<Args>, S::Output : SortedByIn<X::Output>,
R : Relation<Ordered<S::Output, X::Output>> {
    type Output = <S::Output as SortedByIn<X::Output>>::Range;
    fn eval(&self, args : Args) -> Self::Output {
        let (s, x) = (self.seq.eval(args), self.value.eval(args));
        s.equal_range_by_in(x, |a, b| self.rel.holds(a, b))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct BinarySearchBy<S, X, R> {
    seq : S,
    value : X,
    rel : R,
}

pub fn binary_search_by<S, X, R>(seq : S, value : X, rel : R) -> Actor<BinarySearchBy<S::Expr, X::Expr, R>>
where S : IntoActor, X : IntoActor {
    Actor(BinarySearchBy { seq : seq.into_actor().0, value : value.into_actor().0, rel })
}

impl<Args, S, X, R> Expr<Args> for BinarySearchBy<S, X, R>
where Args : Copy, S : Expr<Args>, X : Expr<Args>, S::Output : SortedByIn<X::Output>,
R : Relation<Ordered<S::Output, X::Output>> {
    type Output = bool;
    fn eval(&self, args : Args) -> bool {
        let (s, x) = (self.seq.eval(args), self.value.eval(args));
        s.contains_by_in(x, |a, b| self.rel.holds(a, b))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Includes<S1, S2, R> {
    seq0 : S1,
    seq1 : S2,
    rel : R,
}

pub fn includes<S1, S2>(seq0 : S1, seq1 : S2) -> Actor<Includes<S1::Expr, S2::Expr, Less>>
where S1 : IntoActor, S2 : IntoActor {
    includes_by(seq0, seq1, Less)
}

pub fn includes_by<S1, S2, R>(seq0 : S1, seq1 : S2, rel : R) -> Actor<Includes<S1::Expr, S2::Expr, R>>
where S1 : IntoActor, S2 : IntoActor {
    Actor(Includes { seq0 : seq0.into_actor().0, seq1 : seq1.into_actor().0, rel })
}

impl<Args, S1, S2, R> Expr<Args> for Includes<S1, S2, R>
where Args : Copy, S1 : Expr<Args>, S2 : Expr<Args>,
S1::Output : Sequence, S2::Output : Sequence<Item = Item<S1::Output>>,
R : Relation<Item<S1::Output>> {
    type Output = bool;
    fn eval(&self, args : Args) -> bool {
        let (s0, s1) = (self.seq0.eval(args), self.seq1.eval(args));
        elements::includes_by(s0.as_slice(), s1.as_slice(), |a, b| self.rel.holds(a, b))
    }
}

//-----------------------------------------------------------------------------
// Partitions and orderings

#[derive(Clone, Copy, Debug)]
pub struct IsPartitioned<S, P> {
    seq : S,
    pred : P,
}

// True when every element satisfying pred precedes every element failing it.
pub fn is_partitioned<S, P>(seq : S, pred : P) -> Actor<IsPartitioned<S::Expr, P>>
where S : IntoActor {
    Actor(IsPartitioned { seq : seq.into_actor().0, pred })
}

impl<Args, S, P> Expr<Args> for IsPartitioned<S, P>
where S : Expr<Args>, S::Output : Sequence, P : Fn(&Item<S::Output>) -> bool {
    type Output = bool;
    fn eval(&self, args : Args) -> bool {
        let s = self.seq.eval(args);
        elements::partitioned(s.as_slice(), |v| !(self.pred)(v))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PartitionPoint<S, P> {
    seq : S,
    pred : P,
}

// First element failing pred, for a sequence partitioned by pred.
pub fn partition_point<S, P>(seq : S, pred : P) -> Actor<PartitionPoint<S::Expr, P>>
where S : IntoActor {
    Actor(PartitionPoint { seq : seq.into_actor().0, pred })
}

impl<Args, S, P> Expr<Args> for PartitionPoint<S, P>
where S : Expr<Args>, S::Output : Sequence, P : Fn(&Item<S::Output>) -> bool {
    type Output = usize;
    fn eval(&self, args : Args) -> usize {
        let s = self.seq.eval(args);
        elements::partition_point(s.as_slice(), |v| !(self.pred)(v))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct IsSorted<S, R> {
    seq : S,
    rel : R,
}

pub fn is_sorted<S>(seq : S) -> Actor<IsSorted<S::Expr, Less>>
where S : IntoActor {
    is_sorted_by(seq, Less)
}

pub fn is_sorted_by<S, R>(seq : S, rel : R) -> Actor<IsSorted<S::Expr, R>>
where S : IntoActor {
    Actor(IsSorted { seq : seq.into_actor().0, rel })
}

impl<Args, S, R> Expr<Args> for IsSorted<S, R>
where S : Expr<Args>, S::Output : Sequence, R : Relation<Item<S::Output>> {
    type Output = bool;
    fn eval(&self, args : Args) -> bool {
        let s = self.seq.eval(args);
        elements::increasing_range(s.as_slice(), |a : &Item<S::Output>, b : &Item<S::Output>| self.rel.holds(a, b))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct IsSortedUntil<S, R> {
    seq : S,
    rel : R,
}

pub fn is_sorted_until<S>(seq : S) -> Actor<IsSortedUntil<S::Expr, Less>>
where S : IntoActor {
    Actor(IsSortedUntil { seq : seq.into_actor().0, rel : Less })
}

impl<Args, S, R> Expr<Args> for IsSortedUntil<S, R>
where S : Expr<Args>, S::Output : Sequence, R : Relation<Item<S::Output>> {
    type Output = usize;
    fn eval(&self, args : Args) -> usize {
        let s = self.seq.eval(args);
        elements::increasing_prefix(s.as_slice(), |a : &Item<S::Output>, b : &Item<S::Output>| self.rel.holds(a, b))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LexicographicalCompare<S1, S2, R> {
    seq0 : S1,
    seq1 : S2,
    rel : R,
}

pub fn lexicographical_compare<S1, S2>(seq0 : S1, seq1 : S2) -> Actor<LexicographicalCompare<S1::Expr, S2::Expr, Less>>
where S1 : IntoActor, S2 : IntoActor {
    lexicographical_compare_by(seq0, seq1, Less)
}

pub fn lexicographical_compare_by<S1, S2, R>(seq0 : S1, seq1 : S2, rel : R) -> Actor<LexicographicalCompare<S1::Expr, S2::Expr, R>>
where S1 : IntoActor, S2 : IntoActor {
    Actor(LexicographicalCompare { seq0 : seq0.into_actor().0, seq1 : seq1.into_actor().0, rel })
}

impl<Args, S1, S2, R> Expr<Args> for LexicographicalCompare<S1, S2, R>
where Args : Copy, S1 : Expr<Args>, S2 : Expr<Args>,
S1::Output : Sequence, S2::Output : Sequence<Item = Item<S1::Output>>,
R : Relation<Item<S1::Output>> {
    type Output = bool;
    fn eval(&self, args : Args) -> bool {
        let (s0, s1) = (self.seq0.eval(args), self.seq1.eval(args));
        elements::lexicographical_compare_by(s0.as_slice(), s1.as_slice(), |a, b| self.rel.holds(a, b))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extremum {
    Min,
    Max,
}

#[derive(Clone, Copy, Debug)]
pub struct ElementBy<S, R> {
    seq : S,
    rel : R,
    extremum : Extremum,
}

pub fn min_element<S>(seq : S) -> Actor<ElementBy<S::Expr, Less>>
where S : IntoActor {
    min_element_by(seq, Less)
}

pub fn min_element_by<S, R>(seq : S, rel : R) -> Actor<ElementBy<S::Expr, R>>
where S : IntoActor {
    Actor(ElementBy { seq : seq.into_actor().0, rel, extremum : Extremum::Min })
}

pub fn max_element<S>(seq : S) -> Actor<ElementBy<S::Expr, Less>>
where S : IntoActor {
    max_element_by(seq, Less)
}

pub fn max_element_by<S, R>(seq : S, rel : R) -> Actor<ElementBy<S::Expr, R>>
where S : IntoActor {
    Actor(ElementBy { seq : seq.into_actor().0, rel, extremum : Extremum::Max })
}

impl<Args, S, R> Expr<Args> for ElementBy<S, R>
where S : Expr<Args>, S::Output : Sequence, R : Relation<Item<S::Output>> {
    type Output = usize;
    fn eval(&self, args : Args) -> usize {
        let s = self.seq.eval(args);
        let r = |a : &Item<S::Output>, b : &Item<S::Output>| self.rel.holds(a, b);
        match self.extremum {
            Extremum::Min => elements::min_element_by(s.as_slice(), r),
            Extremum::Max => elements::max_element_by(s.as_slice(), r),
        }
    }
}

//=============================================================================

#[cfg(test)]
mod test {

    use std::cmp::Reverse;
    use std::collections::{BTreeMap, BTreeSet};

    use crate::actor::{arg1, arg2, arg3, val};
    use super::*;

    fn even(i : &i32) -> bool {
        i % 2 == 0
    }

    fn mod_2_comparison(lhs : &i32, rhs : &i32) -> bool {
        lhs % 2 == rhs % 2
    }

    #[test]
    fn test_find_family() {
        let array = [1, 2, 3];
        assert_eq!(find(arg1, 2).call(&array), 1);
        assert_eq!(find(arg1, 7).call(&array), array.len());
        assert_eq!(find(arg1, arg2).call2(&array, 3), 2);
        assert_eq!(find(arg2, arg1).call2(&3, &array), 2);
        assert_eq!(find_if(arg1, even).call(&array), 1);
        assert_eq!(find_if_not(arg1, even).call(&[2, 4, 5]), 2);
        assert_eq!(find(arg1, "b").call(&["a", "b"]), 1);
    }

    #[test]
    fn test_find_on_associative_containers() {
        let s : BTreeSet<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(find(arg1, 2).call(&s), s.get(&2));
        assert_eq!(find(arg1, 9).call(&s), None);
        let m : BTreeMap<i32, i32> = [(0, 1), (2, 3), (4, 5)].into_iter().collect();
        assert_eq!(find(arg1, 2).call(&m), m.get_key_value(&2));
        assert_eq!(count(arg1, 4).call(&m), 1);
        assert_eq!(distance(arg1).call(&m), 3);
    }

    #[test]
    fn test_quantifiers() {
        let array = [2, 4, 5];
        assert!(!all_of(arg1, even).call(&array));
        assert!(any_of(arg1, even).call(&array));
        assert!(!none_of(arg1, even).call(&array));
        assert!(all_of(arg1, even).call(&[0; 0]));
        assert!(none_of(arg1, even).call(&[1, 3]));
    }

    #[test]
    fn test_relations() {
        assert!(EqualTo.holds(&1, &1));
        assert!(Less.holds(&1, &2));
        assert!(Greater.holds(&2, &1));
        assert!(mod_2_comparison.holds(&1, &3));
        assert!(!(|a : &i32, b : &i32| a == b).holds(&1, &3));
    }

    #[test]
    fn test_subsequence_queries() {
        let array = [1, 2, 3, 1, 2, 3, 1];
        assert_eq!(find_end(arg1, arg2).call2(&array, &[1, 2, 3]), 3);
        assert_eq!(find_end_by(arg1, arg2, mod_2_comparison).call2(&array, &[5, 6, 5]), 3);
        assert_eq!(search(arg1, arg2).call2(&array, &[2, 3]), 1);
        assert_eq!(search_by(arg1, arg2, mod_2_comparison).call2(&array, &[1, 1]), 2);
        assert_eq!(search_n(arg1, 2, 2).call(&[1, 2, 3, 2, 2]), 3);
        assert_eq!(search_n_by(arg1, 2, 0, mod_2_comparison).call(&[1, 2, 3, 2, 4]), 3);
        assert_eq!(find_first_of(arg1, arg2).call2(&array, &[3, 4]), 2);
    }

    #[test]
    fn test_sequences_of_different_shapes() {
        let v = vec![1, 2, 3, 4];
        let a = [1, 2, 3];
        assert_eq!(mismatch(arg1, arg2).call2(&v, &a), (3, 3));
        assert!(equal(arg1, arg2).call2(&v[..3], &a));
        assert!(!equal(arg1, arg2).call2(&v, &a));
        assert!(equal(arg1, arg2).call2(&a, &v));
        assert!(equal_by(arg1, arg2, mod_2_comparison).call2(&[3, 4], &[1, 2, 9]));
    }

    #[test]
    fn test_sorted_ranges() {
        let array = [1, 2, 2, 3];
        assert_eq!(lower_bound(arg1, 2).call(&array), 1);
        assert_eq!(upper_bound(arg1, 2).call(&array), 3);
        assert_eq!(equal_range(arg1, 2).call(&array), 1..3);
        assert!(binary_search(arg1, 3).call(&array));

        let reversed = [3, 2, 2, 1];
        assert_eq!(lower_bound_by(arg1, 2, Greater).call(&reversed), 1);
        assert_eq!(upper_bound_by(arg1, 2, Greater).call(&reversed), 3);
        assert_eq!(equal_range_by(arg1, 2, Greater).call(&reversed), 1..3);
        assert!(binary_search_by(arg1, 1, Greater).call(&reversed));
        assert!(!binary_search_by(arg1, 0, Greater).call(&reversed));

        let set : BTreeSet<Reverse<i32>> = reversed.into_iter().map(Reverse).collect();
        assert_eq!(lower_bound(arg1, Reverse(2)).call(&set), Some(&Reverse(2)));
        assert_eq!(upper_bound(arg1, val(Reverse(2))).call(&set), Some(&Reverse(1)));
        assert!(!binary_search(arg1, Reverse(7)).call(&set));

        let greater = |a : &Reverse<i32>, b : &Reverse<i32>| a.0 > b.0;
        assert_eq!(lower_bound_by(arg1, Reverse(2), greater).call(&set), Some(&Reverse(2)));
        assert_eq!(upper_bound_by(arg1, Reverse(2), greater).call(&set), Some(&Reverse(1)));
        assert_eq!(
            equal_range_by(arg1, Reverse(2), greater).call(&set),
            (Some(&Reverse(2)), Some(&Reverse(1)))
        );
        assert!(binary_search_by(arg1, Reverse(3), greater).call(&set));
        assert!(!binary_search_by(arg1, Reverse(7), greater).call(&set));

        let ascending : BTreeSet<i32> = array.into_iter().collect();
        assert_eq!(lower_bound_by(arg1, 2, Less).call(&ascending), ascending.range(2..).next());
        assert_eq!(upper_bound_by(arg1, 3, Less).call(&ascending), None);

        let map : BTreeMap<i32, &str> = [(1, "a"), (3, "c")].into_iter().collect();
        assert_eq!(lower_bound_by(arg1, 2, Less).call(&map), Some((&3, &"c")));
        assert!(!binary_search_by(arg1, 2, Less).call(&map));
    }

    #[test]
    fn test_orderings() {
        assert!(includes(arg1, arg2).call2(&[1, 2, 3, 4], &[2, 4]));
        assert!(includes_by(arg1, arg2, Greater).call2(&[4, 3, 2, 1], &[3, 1]));
        assert!(is_sorted(arg1).call(&[1, 1, 2]));
        assert!(!is_sorted(arg1).call(&[2, 1]));
        assert!(is_sorted_by(arg1, Greater).call(&[2, 1]));
        assert_eq!(is_sorted_until(arg1).call(&[1, 2, 0, 3]), 2);
        assert!(is_partitioned(arg1, even).call(&[2, 4, 1, 3]));
        assert!(!is_partitioned(arg1, even).call(&[1, 2]));
        assert_eq!(partition_point(arg1, even).call(&[2, 4, 1, 3]), 2);
        assert!(lexicographical_compare(arg1, arg2).call2(&[1, 2], &[1, 3]));
        assert!(!lexicographical_compare_by(arg1, arg2, Greater).call2(&[1, 2], &[1, 3]));
        assert_eq!(min_element(arg1).call(&[3, 1, 2]), 1);
        assert_eq!(max_element(arg1).call(&[3, 1, 3]), 0);
        assert_eq!(max_element_by(arg1, Greater).call(&[3, 1, 3]), 1);
    }

    #[test]
    fn test_deferred_callables() {
        let ones = count(arg1, 1).into_fn::<&[i32]>();
        assert_eq!(ones(&[1, 1, 0, 1, 1][..]), 4);
        assert_eq!(ones(&[][..]), 0);

        let starts_with = mismatch(arg1, arg2).into_fn2::<&[i32], &[i32]>();
        assert_eq!(starts_with(&[1, 2, 3][..], &[1, 2][..]), (2, 2));

        let third = count_if(arg3, even);
        assert_eq!(third.call3(&[1], &[2], &[2, 4, 6]), 3);
    }
}
