use {
    crate::harness::{
        case::{generate_cases, ConformanceCase, ParseTable},
        HarnessError,
    },
    std::{fmt, io::Write, path::Path},
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    pub passed: usize,
    pub mismatched: usize,
    pub errored: usize,
    pub bad_fixtures: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.passed + self.mismatched + self.errored + self.bad_fixtures
    }

    pub fn success(&self) -> bool {
        self.mismatched == 0 && self.errored == 0 && self.bad_fixtures == 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "result: {}. {} passed; {} mismatched; {} errored; {} bad fixtures",
            if self.success() { "ok" } else { "FAILED" },
            self.passed,
            self.mismatched,
            self.errored,
            self.bad_fixtures
        )
    }
}

/// Runs the conformance suite over the fixture corpus, writing one verdict
/// line per case to `report` as it goes, followed by a summary.
///
/// Cases execute sequentially in sorted base name order and are isolated from
/// each other: a crashing parser or a bad expected fixture fails its own case
/// and nothing else. Only a malformed corpus aborts the run as a whole.
pub fn run(
    raw_dir: &Path,
    expected_dir: &Path,
    parser: &impl ParseTable,
    report: &mut impl Write,
) -> Result<Summary, HarnessError> {
    let cases = generate_cases(raw_dir, expected_dir, parser)?;
    let mut summary = Summary::default();

    for ConformanceCase {
        basename,
        actual,
        expected,
    } in cases
    {
        write!(report, "case `{basename}` ... ")?;

        match (actual, expected) {
            (Ok(actual), Ok(expected)) if actual == expected => {
                summary.passed += 1;
                writeln!(report, "ok")?;
            }
            (Ok(actual), Ok(expected)) => {
                summary.mismatched += 1;
                writeln!(report, "FAILED")?;
                writeln!(report)?;
                writeln!(report, "expected:\n{expected}")?;
                writeln!(report, "got:\n{actual}")?;
            }
            (Err(error), _) => {
                summary.errored += 1;
                writeln!(report, "ERROR: {error:#}")?;
            }
            (Ok(_), Err(error)) => {
                summary.bad_fixtures += 1;
                writeln!(report, "BAD FIXTURE: {error:#}")?;
            }
        }
    }

    writeln!(report, "{}", "-".repeat(60))?;
    writeln!(report, "{summary}")?;

    Ok(summary)
}
