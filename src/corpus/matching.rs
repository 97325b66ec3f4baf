use {
    crate::corpus::extension::{collect_extensions, ExtensionError, ExtensionMap},
    itertools::Itertools as _,
};

/// The result of pairing a raw listing with an expected listing.
///
/// `matched` is the sorted sequence of base names present on both sides; its
/// order is a contract, since downstream reporting and re-run diffing depend
/// on the suite running in the same order every time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Matching {
    pub raw: ExtensionMap,
    pub expected: ExtensionMap,
    pub matched: Vec<String>,
}

impl Matching {
    /// Base names with a raw fixture but no expected counterpart, sorted.
    pub fn raw_only(&self) -> Vec<&str> {
        self.orphans(&self.raw, &self.expected)
    }

    /// Base names with an expected fixture but no raw counterpart, sorted.
    pub fn expected_only(&self) -> Vec<&str> {
        self.orphans(&self.expected, &self.raw)
    }

    fn orphans<'a>(&self, from: &'a ExtensionMap, other: &ExtensionMap) -> Vec<&'a str> {
        from.basenames()
            .filter(|basename| other.get(basename).is_none())
            .sorted()
            .collect()
    }
}

/// Collects the extension map of each listing and intersects their base
/// names. An ambiguous mapping on either side fails the whole match; base
/// names present on one side only are silently excluded, which allows partial
/// corpora during iterative development.
pub fn match_fixtures<'a>(
    raw_names: impl IntoIterator<Item = &'a str>,
    expected_names: impl IntoIterator<Item = &'a str>,
) -> Result<Matching, ExtensionError> {
    let raw = collect_extensions(raw_names)?;
    let expected = collect_extensions(expected_names)?;

    let matched = raw
        .basenames()
        .filter(|basename| expected.get(basename).is_some())
        .map(str::to_string)
        .sorted()
        .collect();

    Ok(Matching {
        raw,
        expected,
        matched,
    })
}
