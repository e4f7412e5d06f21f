//! Deferred expressions.
//!
//! An expression is built once from placeholders (`arg1`, `arg2`, `arg3`),
//! bound values and query nodes, and evaluated later against a tuple of
//! concrete arguments. Arguments are passed by value and must be `Copy`,
//! which in practice means shared references to the containers being queried.

use std::cmp::Reverse;

//-----------------------------------------------------------------------------
// Expressions

pub trait Expr<Args> {
    type Output;
    fn eval(&self, args : Args) -> Self::Output;
}

// The N-th argument of the call, counting from one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Argument<const N : usize>;

impl<A> Expr<(A,)> for Argument<1> {
    type Output = A;
    fn eval(&self, args : (A,)) -> A {
        args.0
    }
}

impl<A, B> Expr<(A, B)> for Argument<1> {
    type Output = A;
    fn eval(&self, args : (A, B)) -> A {
        args.0
    }
}

impl<A, B> Expr<(A, B)> for Argument<2> {
    type Output = B;
    fn eval(&self, args : (A, B)) -> B {
        args.1
    }
}

impl<A, B, C> Expr<(A, B, C)> for Argument<1> {
    type Output = A;
    fn eval(&self, args : (A, B, C)) -> A {
        args.0
    }
}

impl<A, B, C> Expr<(A, B, C)> for Argument<2> {
    type Output = B;
    fn eval(&self, args : (A, B, C)) -> B {
        args.1
    }
}

impl<A, B, C> Expr<(A, B, C)> for Argument<3> {
    type Output = C;
    fn eval(&self, args : (A, B, C)) -> C {
        args.2
    }
}

// A value captured when the expression is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Value<T>(pub T);

impl<Args, T> Expr<Args> for Value<T> where T : Clone {
    type Output = T;
    fn eval(&self, _ : Args) -> T {
        self.0.clone()
    }
}

//-----------------------------------------------------------------------------
// Actors

/// A deferred expression that can be called with concrete arguments.
///
/// ```
/// use elements_querying::{arg1, count};
///
/// let ones = count(arg1, 1);
/// assert_eq!(ones.call(&[1, 1, 0, 1, 1]), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Actor<E>(pub E);

impl<Args, E> Expr<Args> for Actor<E> where E : Expr<Args> {
    type Output = E::Output;
    fn eval(&self, args : Args) -> E::Output {
        self.0.eval(args)
    }
}

impl<E> Actor<E> {
    pub fn call<A>(&self, a : A) -> <E as Expr<(A,)>>::Output
    where E : Expr<(A,)> {
        self.0.eval((a,))
    }

    pub fn call2<A, B>(&self, a : A, b : B) -> <E as Expr<(A, B)>>::Output
    where E : Expr<(A, B)> {
        self.0.eval((a, b))
    }

    pub fn call3<A, B, C>(&self, a : A, b : B, c : C) -> <E as Expr<(A, B, C)>>::Output
    where E : Expr<(A, B, C)> {
        self.0.eval((a, b, c))
    }

    /// Turns the expression into a plain unary closure.
    pub fn into_fn<A>(self) -> impl Fn(A) -> <E as Expr<(A,)>>::Output
    where E : Expr<(A,)> {
        move |a : A| self.0.eval((a,))
    }

    /// Turns the expression into a plain binary closure.
    pub fn into_fn2<A, B>(self) -> impl Fn(A, B) -> <E as Expr<(A, B)>>::Output
    where E : Expr<(A, B)> {
        move |a : A, b : B| self.0.eval((a, b))
    }
}

#[allow(non_upper_case_globals)]
pub const arg1 : Actor<Argument<1>> = Actor(Argument);
#[allow(non_upper_case_globals)]
pub const arg2 : Actor<Argument<2>> = Actor(Argument);
#[allow(non_upper_case_globals)]
pub const arg3 : Actor<Argument<3>> = Actor(Argument);

pub fn val<T>(x : T) -> Actor<Value<T>> {
    Actor(Value(x))
}

//-----------------------------------------------------------------------------
// Conversion of query operands

// Anything that can stand in an operand position of a query: an actor, or a
// plain value that is captured as-is.
pub trait IntoActor {
    type Expr;
    fn into_actor(self) -> Actor<Self::Expr>;
}

impl<E> IntoActor for Actor<E> {
    type Expr = E;
    fn into_actor(self) -> Actor<E> {
        self
    }
}

macro_rules! value_operands {
    ($($t : ty),*) => {
        $(
            impl IntoActor for $t {
                type Expr = Value<$t>;
                fn into_actor(self) -> Actor<Value<$t>> {
                    val(self)
                }
            }
        )*
    }
}

value_operands!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64, bool, char, String);

impl<'a> IntoActor for &'a str {
    type Expr = Value<&'a str>;
    fn into_actor(self) -> Actor<Value<&'a str>> {
        val(self)
    }
}

impl<T> IntoActor for Reverse<T> where T : Clone {
    type Expr = Value<Reverse<T>>;
    fn into_actor(self) -> Actor<Value<Reverse<T>>> {
        val(self)
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_placeholders_select_arguments() {
        assert_eq!(arg1.call(7), 7);
        assert_eq!(arg1.call2('a', "b"), 'a');
        assert_eq!(arg2.call2('a', "b"), "b");
        assert_eq!(arg3.call3(1, 2, 3), 3);
        assert_eq!(arg2.call3(1, 2, 3), 2);
    }

    #[test]
    fn test_values_ignore_arguments() {
        let v = val(String::from("bound"));
        assert_eq!(v.call(0), "bound");
        assert_eq!(v.call2(0, 1), "bound");
        assert_eq!(5i32.into_actor().call(()), 5);
        assert_eq!(arg1.into_actor(), arg1);
    }

    #[test]
    fn test_into_fn() {
        let first = arg1.into_fn::<&str>();
        assert_eq!(first("x"), "x");
        let second = arg2.into_fn2::<u8, u16>();
        assert_eq!(second(1, 2), 2);
    }
}
