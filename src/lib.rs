//! Lazy querying algorithms.
//!
//! A query such as `find(arg1, 2)` is built once and evaluated later against
//! concrete containers. Evaluation gives exactly the answer of the eager
//! algorithm on the same inputs: positions into slices, arrays and vectors
//! are indices (the length meaning "not found"), while ordered and hashed
//! sets and maps answer with their own lookup.
//!
//! ```
//! use std::collections::BTreeSet;
//! use elements_querying::{arg1, find, lower_bound_by, Greater};
//!
//! let array = [1, 2, 3];
//! assert_eq!(find(arg1, 2).call(&array), 1);
//!
//! let set : BTreeSet<i32> = array.into_iter().collect();
//! assert_eq!(find(arg1, 2).call(&set), set.get(&2));
//!
//! assert_eq!(lower_bound_by(arg1, 2, Greater).call(&[3, 2, 1]), 1);
//! ```

pub mod actor;
pub mod container;
pub mod elements;
pub mod error;
pub mod querying;
pub mod report;
pub mod suite;

pub use actor::{arg1, arg2, arg3, val, Actor, Expr, IntoActor};
pub use error::{Error, Result};
pub use querying::*;
pub use report::Report;
