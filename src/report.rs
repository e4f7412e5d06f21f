//! Accounting for call-and-assert checks.
//!
//! A failed check is logged and counted, and the run carries on, so every
//! check is attempted regardless of earlier failures.

use tracing::{error, trace};

use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct Report {
    checks : usize,
    failures : usize,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    // Records one check; returns whether it passed.
    pub fn check(&mut self, passed : bool, expr : &str, file : &str, line : u32) -> bool {
        self.checks += 1;
        if passed {
            trace!(expr, file, line, "check passed");
        } else {
            self.failures += 1;
            error!(expr, file, line, "check failed");
        }
        passed
    }

    pub fn checks(&self) -> usize {
        self.checks
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    // Failed checks as a process exit status, saturating at i32::MAX.
    pub fn exit_code(&self) -> i32 {
        i32::try_from(self.failures).unwrap_or(i32::MAX)
    }

    /// Number of checks run, or the failure tally if any check failed.
    pub fn finish(&self) -> Result<usize> {
        if self.failures == 0 {
            Ok(self.checks)
        } else {
            Err(Error::ChecksFailed { failed : self.failures, total : self.checks })
        }
    }
}

/// Checks a condition against a [`Report`], recording its source text and
/// location.
#[macro_export]
macro_rules! check {
    ($report : expr, $cond : expr) => {
        $report.check($cond, stringify!($cond), file!(), line!())
    };
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_failures_do_not_stop_the_run() {
        let mut report = Report::new();
        assert!(!crate::check!(report, 1 + 1 == 3));
        assert!(crate::check!(report, 2 + 2 == 4));
        assert!(!crate::check!(report, "a" == "b"));
        assert_eq!(report.checks(), 3);
        assert_eq!(report.failures(), 2);
        assert_eq!(report.finish(), Err(Error::ChecksFailed { failed : 2, total : 3 }));
    }

    #[test]
    fn test_exit_code_counts_failures() {
        let mut report = Report::new();
        assert_eq!(report.exit_code(), 0);
        crate::check!(report, true);
        assert_eq!(report.exit_code(), 0);
        crate::check!(report, false);
        crate::check!(report, 1 > 2);
        assert_eq!(report.exit_code(), 2);

        let report = Report { checks : usize::MAX, failures : usize::MAX };
        assert_eq!(report.exit_code(), i32::MAX);
        let report = Report { checks : 1 << 31, failures : 1 << 31 };
        assert_eq!(report.exit_code(), i32::MAX);
    }

    #[test]
    fn test_clean_run() {
        let mut report = Report::new();
        crate::check!(report, true);
        assert_eq!(report.finish(), Ok(1));
        assert_eq!(report.finish().map_err(|e| e.to_string()), Ok(1));
        assert_eq!(
            Error::ChecksFailed { failed : 1, total : 4 }.to_string(),
            "1 of 4 checks failed"
        );
    }
}
