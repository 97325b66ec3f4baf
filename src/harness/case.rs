use {
    crate::{
        corpus::{
            extension::collect_extensions, list_directory, matching::match_fixtures, CorpusError,
        },
        syntax_tree::table::Table,
    },
    anyhow::Result,
    std::path::Path,
};

/// The parser under test: anything that turns the path of a raw fixture into
/// a table. Whatever error it reports is a parse failure for that fixture,
/// never silently coerced.
pub trait ParseTable {
    fn parse_table(&self, path: &Path) -> Result<Table>;
}

impl<F> ParseTable for F
where
    F: Fn(&Path) -> Result<Table>,
{
    fn parse_table(&self, path: &Path) -> Result<Table> {
        self(path)
    }
}

/// One unit of conformance testing: the parser's output on a raw fixture
/// paired with the table loaded from the expected fixture, tagged with the
/// base name both were derived from.
///
/// Failures on either side are captured here instead of aborting the run, so
/// a single crashing fixture cannot shadow the verdicts of the others.
#[derive(Debug)]
pub struct ConformanceCase {
    pub basename: String,
    pub actual: Result<Table>,
    pub expected: Result<Table>,
}

/// Pairs the fixtures below `raw_dir` and `expected_dir` by base name and
/// materializes one conformance case per pair, in sorted base name order.
///
/// An unreadable directory or an ambiguous base name to extension mapping is
/// a corpus integrity failure and aborts before any case is built.
pub fn generate_cases(
    raw_dir: &Path,
    expected_dir: &Path,
    parser: &impl ParseTable,
) -> Result<Vec<ConformanceCase>, CorpusError> {
    let raw_names = list_directory(raw_dir)?;
    let expected_names = list_directory(expected_dir)?;

    let matching = match_fixtures(
        raw_names.iter().map(String::as_str),
        expected_names.iter().map(String::as_str),
    )
    .map_err(|source| CorpusError::Ambiguous {
        // attribute the failure to the side whose mapping is ill-defined
        path: if collect_extensions(raw_names.iter().map(String::as_str)).is_err() {
            raw_dir.to_path_buf()
        } else {
            expected_dir.to_path_buf()
        },
        source,
    })?;

    let cases = matching
        .matched
        .iter()
        .map(|basename| {
            let raw_extension = matching.raw.get(basename).unwrap_or_default();
            let expected_extension = matching.expected.get(basename).unwrap_or_default();

            ConformanceCase {
                basename: basename.clone(),
                actual: parser.parse_table(&raw_dir.join(format!("{basename}{raw_extension}"))),
                expected: Table::from_file(
                    expected_dir.join(format!("{basename}{expected_extension}")),
                ),
            }
        })
        .collect();

    Ok(cases)
}

#[cfg(test)]
mod tests {
    use {
        super::generate_cases,
        crate::syntax_tree::table::Table,
        std::{fs, path::Path},
        tempfile::TempDir,
    };

    fn load(path: &Path) -> anyhow::Result<Table> {
        Table::from_file(path)
    }

    #[test]
    fn cases_follow_the_sorted_matching() {
        let corpus = TempDir::new().unwrap();
        let raw = corpus.path().join("raw");
        let parsed = corpus.path().join("parsed");
        fs::create_dir(&raw).unwrap();
        fs::create_dir(&parsed).unwrap();

        for basename in ["beta", "alpha"] {
            fs::write(raw.join(format!("{basename}.txt")), "x\n1\n").unwrap();
            fs::write(parsed.join(format!("{basename}.csv")), "x\n1\n").unwrap();
        }
        fs::write(raw.join("orphan.txt"), "x\n1\n").unwrap();

        let cases = generate_cases(&raw, &parsed, &load).unwrap();

        assert_eq!(
            cases.iter().map(|case| case.basename.as_str()).collect::<Vec<_>>(),
            vec!["alpha", "beta"]
        );
        for case in cases {
            assert_eq!(
                case.actual.as_ref().unwrap(),
                case.expected.as_ref().unwrap()
            );
        }
    }

    #[test]
    fn ambiguous_directory_aborts_before_any_case() {
        let corpus = TempDir::new().unwrap();
        let raw = corpus.path().join("raw");
        let parsed = corpus.path().join("parsed");
        fs::create_dir(&raw).unwrap();
        fs::create_dir(&parsed).unwrap();

        fs::write(raw.join("a.txt"), "").unwrap();
        fs::write(raw.join("a.dat"), "").unwrap();
        fs::write(parsed.join("a.csv"), "x\n1\n").unwrap();

        assert!(generate_cases(&raw, &parsed, &load).is_err())
    }

    #[test]
    fn parser_failures_are_captured_per_case() {
        let corpus = TempDir::new().unwrap();
        let raw = corpus.path().join("raw");
        let parsed = corpus.path().join("parsed");
        fs::create_dir(&raw).unwrap();
        fs::create_dir(&parsed).unwrap();

        fs::write(raw.join("a.txt"), "x\n1\n").unwrap();
        fs::write(parsed.join("a.csv"), "x\n1\n").unwrap();

        let parser = |_: &Path| -> anyhow::Result<Table> { anyhow::bail!("exploded") };
        let cases = generate_cases(&raw, &parsed, &parser).unwrap();

        assert_eq!(cases.len(), 1);
        assert!(cases[0].actual.is_err());
        assert!(cases[0].expected.is_ok());
    }
}
