//! Regression groups for the lazy querying algorithms.
//!
//! Each group builds a few small inputs, evaluates a lazy query against them
//! and compares the result with the eager answer: a literal position, or the
//! container's own lookup for sets and maps.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::ops::Bound::{Excluded, Unbounded};
use std::ops::Range;

use tracing::debug;

use crate::actor::{arg1, arg2};
use crate::check;
use crate::error::{Error, Result};
use crate::querying::{
    adjacent_find, adjacent_find_by, binary_search, count, count_if, distance, equal,
    equal_by, equal_range, equal_range_by, find, find_end, find_end_by, find_first_of,
    find_first_of_by, find_if, lower_bound, lower_bound_by, mismatch, mismatch_by, search,
    search_by, upper_bound, upper_bound_by, Greater,
};
use crate::report::Report;

pub struct Group {
    pub name : &'static str,
    body : fn(&mut Report),
}

impl Group {
    pub fn run(&self, report : &mut Report) {
        debug!(group = self.name, "running check group");
        (self.body)(report);
    }
}

// Fixed run order.
pub static GROUPS : [Group; 15] = [
    Group { name : "find", body : find_test },
    Group { name : "find_if", body : find_if_test },
    Group { name : "find_end", body : find_end_test },
    Group { name : "find_first_of", body : find_first_of_test },
    Group { name : "adjacent_find", body : adjacent_find_test },
    Group { name : "count", body : count_test },
    Group { name : "count_if", body : count_if_test },
    Group { name : "distance", body : distance_test },
    Group { name : "mismatch", body : mismatch_test },
    Group { name : "equal", body : equal_test },
    Group { name : "search", body : search_test },
    Group { name : "lower_bound", body : lower_bound_test },
    Group { name : "upper_bound", body : upper_bound_test },
    Group { name : "equal_range", body : equal_range_test },
    Group { name : "binary_search", body : binary_search_test },
];

/// The groups named in `names`, in run order; every group when `names` is
/// empty.
pub fn select(names : &[String]) -> Result<Vec<&'static Group>> {
    if let Some(unknown) = names.iter().find(|n| !GROUPS.iter().any(|g| g.name == n.as_str())) {
        return Err(Error::UnknownGroup(unknown.clone()));
    }
    Ok(GROUPS.iter()
        .filter(|g| names.is_empty() || names.iter().any(|n| n.as_str() == g.name))
        .collect())
}

/// Runs the groups named in `names` (every group when empty) into a fresh
/// report.
pub fn run(names : &[String]) -> Result<Report> {
    let groups = select(names)?;
    let mut report = Report::new();
    for group in groups {
        group.run(&mut report);
    }
    Ok(report)
}

/// Process exit status for a run: the number of failed checks, or 1 when the
/// run could not start.
pub fn exit_status(run : &Result<Report>) -> i32 {
    match run {
        Ok(report) => report.exit_code(),
        Err(_) => 1,
    }
}

fn even(i : &i32) -> bool {
    i % 2 == 0
}

fn mod_2_comparison(lhs : &i32, rhs : &i32) -> bool {
    lhs % 2 == rhs % 2
}

// Descending sets hold Reverse<i32>, so their ordering compares the wrapped
// values with >.
fn greater(lhs : &Reverse<i32>, rhs : &Reverse<i32>) -> bool {
    lhs.0 > rhs.0
}

fn find_test(report : &mut Report) {
    let array = [1, 2, 3];
    check!(report, find(arg1, 2).call(&array) == 1);

    let s : BTreeSet<i32> = array.into_iter().collect();
    check!(report, find(arg1, 2).call(&s) == s.get(&2));

    let m : BTreeMap<i32, i32> = [(0, 1), (2, 3), (4, 5)].into_iter().collect();
    check!(report, find(arg1, 2).call(&m) == m.get_key_value(&2));

    let hs : HashSet<i32> = array.into_iter().collect();
    check!(report, find(arg1, 2).call(&hs) == hs.get(&2));

    let hm : HashMap<i32, i32> = [(0, 1), (2, 3), (4, 5)].into_iter().collect();
    check!(report, find(arg1, 2).call(&hm) == hm.get_key_value(&2));
}

fn find_if_test(report : &mut Report) {
    let array = [1, 2, 3];
    check!(report, find_if(arg1, even).call(&array) == 1);
}

fn find_end_test(report : &mut Report) {
    let array = [1, 2, 3, 1, 2, 3, 1];
    let pattern = [1, 2, 3];
    check!(report, find_end(arg1, arg2).call2(&array, &pattern) == 3);
    let pattern2 = [5, 6, 5];
    check!(report, find_end_by(arg1, arg2, mod_2_comparison).call2(&array, &pattern2) == 3);
}

fn find_first_of_test(report : &mut Report) {
    let array = [1, 2, 3];
    let search_for = [2, 3, 4];
    check!(report, find_first_of(arg1, arg2).call2(&array, &search_for) == 1);

    let search_for2 = [0];
    check!(report, find_first_of_by(arg1, arg2, mod_2_comparison).call2(&array, &search_for2) == 1);
}

fn adjacent_find_test(report : &mut Report) {
    let array = [0, 1, 3, 4, 4];
    check!(report, adjacent_find(arg1).call(&array) == 3);
    check!(report, adjacent_find_by(arg1, mod_2_comparison).call(&array) == 1);
}

fn count_test(report : &mut Report) {
    let array = [1, 1, 0, 1, 1];
    check!(report, count(arg1, 1).call(&array) == 4);
}

fn count_if_test(report : &mut Report) {
    let array = [1, 2, 3, 4, 5];
    check!(report, count_if(arg1, even).call(&array) == 2);
}

fn distance_test(report : &mut Report) {
    let array = [1, 1, 0, 1, 1];
    check!(report, distance(arg1).call(&array) == 5);
}

fn mismatch_test(report : &mut Report) {
    let array = [1, 2, 3, 4, 5];
    let search = [1, 2, 4];
    check!(report, mismatch(arg1, arg2).call2(&array, &search) == (2, 2));

    let search2 = [1, 2, 1, 1];
    check!(report, mismatch_by(arg1, arg2, mod_2_comparison).call2(&array, &search2) == (3, 3));
}

fn equal_test(report : &mut Report) {
    let array = [1, 2, 3];
    let array2 = [1, 2, 3];
    let array3 = [1, 2, 4];
    check!(report, equal(arg1, arg2).call2(&array, &array2));
    check!(report, !equal(arg1, arg2).call2(&array, &array3));

    check!(report, equal_by(arg1, arg2, mod_2_comparison).call2(&array, &array2));
    check!(report, !equal_by(arg1, arg2, mod_2_comparison).call2(&array, &array3));
}

fn search_test(report : &mut Report) {
    let array = [1, 2, 3, 1, 2, 3];
    let pattern = [2, 3];
    check!(report, search(arg1, arg2).call2(&array, &pattern) == 1);

    let pattern2 = [1, 1];
    check!(report, search_by(arg1, arg2, mod_2_comparison).call2(&array, &pattern2) == 2);
}

fn lower_bound_test(report : &mut Report) {
    let array = [1, 2, 3];
    let test_set : BTreeSet<i32> = array.into_iter().collect();
    check!(report, lower_bound(arg1, 2).call(&array) == 1);
    check!(report, lower_bound(arg1, 2).call(&test_set) == test_set.range(2..).next());

    let array2 = [3, 2, 1];
    let test_set2 : BTreeSet<Reverse<i32>> = array2.into_iter().map(Reverse).collect();
    check!(report, lower_bound_by(arg1, 2, Greater).call(&array2) == 1);
    check!(report, lower_bound_by(arg1, Reverse(2), greater).call(&test_set2) == test_set2.range(Reverse(2)..).next());
}

fn upper_bound_test(report : &mut Report) {
    let array = [1, 2, 3];
    let test_set : BTreeSet<i32> = array.into_iter().collect();
    check!(report, upper_bound(arg1, 2).call(&array) == 2);
    check!(report, upper_bound(arg1, 2).call(&test_set)
        == test_set.range::<i32, _>((Excluded(2), Unbounded)).next());

    let array2 = [3, 2, 1];
    let test_set2 : BTreeSet<Reverse<i32>> = array2.into_iter().map(Reverse).collect();
    check!(report, upper_bound_by(arg1, 2, Greater).call(&array2) == 2);
    check!(report, upper_bound_by(arg1, Reverse(2), greater).call(&test_set2)
        == test_set2.range::<Reverse<i32>, _>((Excluded(Reverse(2)), Unbounded)).next());
}

fn equal_range_test(report : &mut Report) {
    let array = [1, 2, 2, 3];
    let test_set : BTreeSet<i32> = array.into_iter().collect();
    let range : Range<usize> = equal_range(arg1, 2).call(&array);
    check!(report, range.start == 1);
    check!(report, range.end == 3);

    let (lower, upper) : (Option<&i32>, Option<&i32>) = equal_range(arg1, 2).call(&test_set);
    check!(report, lower == test_set.range(2..).next());
    check!(report, upper == test_set.range::<i32, _>((Excluded(2), Unbounded)).next());

    let array2 = [3, 2, 2, 1];
    let test_set2 : BTreeSet<Reverse<i32>> = array2.into_iter().map(Reverse).collect();
    let range : Range<usize> = equal_range_by(arg1, 2, Greater).call(&array2);
    check!(report, range.start == 1);
    check!(report, range.end == 3);

    let (lower, upper) : (Option<&Reverse<i32>>, Option<&Reverse<i32>>) =
        equal_range_by(arg1, Reverse(2), greater).call(&test_set2);
    check!(report, lower == test_set2.range(Reverse(2)..).next());
    check!(report, upper == test_set2.range::<Reverse<i32>, _>((Excluded(Reverse(2)), Unbounded)).next());
}

fn binary_search_test(report : &mut Report) {
    let array = [1, 2, 3];
    check!(report, binary_search(arg1, 2).call(&array));
    check!(report, !binary_search(arg1, 4).call(&array));
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_every_group_holds() {
        for group in GROUPS.iter() {
            let mut report = Report::new();
            group.run(&mut report);
            assert!(report.checks() > 0, "{} ran no checks", group.name);
            assert_eq!(report.failures(), 0, "{} failed", group.name);
        }
    }

    #[test]
    fn test_run() {
        let report = run(&[]).unwrap();
        assert_eq!(report.finish(), Ok(41));

        let report = run(&["count".to_string(), "distance".to_string()]).unwrap();
        assert_eq!(report.checks(), 2);
        assert_eq!(report.failures(), 0);
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(&run(&[])), 0);
        assert_eq!(exit_status(&run(&["binary_search".to_string()])), 0);
        assert_eq!(exit_status(&run(&["find".to_string(), "bogus".to_string()])), 1);

        let mut report = Report::new();
        crate::check!(report, 1 == 2);
        crate::check!(report, true);
        crate::check!(report, 3 == 4);
        assert_eq!(exit_status(&Ok(report)), 2);
    }

    #[test]
    fn test_select_keeps_run_order() {
        let names = vec!["count".to_string(), "find".to_string()];
        let picked : Vec<&str> = select(&names).unwrap().iter().map(|g| g.name).collect();
        assert_eq!(picked, vec!["find", "count"]);
        assert_eq!(select(&[]).unwrap().len(), 15);
        assert_eq!(
            select(&["nope".to_string()]).err(),
            Some(Error::UnknownGroup("nope".to_string()))
        );
    }
}
