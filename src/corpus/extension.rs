use {
    indexmap::{IndexMap, IndexSet},
    thiserror::Error,
};

/// Splits a file name into base name and final extension.
///
/// The extension keeps its leading dot and only the last one counts, so
/// `a.tar.gz` yields `("a.tar", ".gz")`. Names whose leading characters are
/// all dots have no extension: `.hidden` yields `(".hidden", "")`.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) if name[..dot].bytes().any(|byte| byte != b'.') => name.split_at(dot),
        _ => (name, ""),
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ExtensionError {
    #[error("base name `{basename}` corresponds to several extensions: {extensions:?}")]
    Ambiguous {
        basename: String,
        extensions: Vec<String>,
    },
}

/// A single-valued base name to extension lookup for one directory listing.
///
/// The constant form is a space-saving representation chosen when every base
/// name shares the same extension; it answers every lookup exactly like the
/// keyed form would.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExtensionMap {
    Keyed(IndexMap<String, String>),
    Constant {
        extension: String,
        support: IndexSet<String>,
    },
}

impl ExtensionMap {
    pub fn get(&self, basename: &str) -> Option<&str> {
        match self {
            ExtensionMap::Keyed(map) => map.get(basename).map(String::as_str),
            ExtensionMap::Constant { extension, support } => {
                support.contains(basename).then_some(extension.as_str())
            }
        }
    }

    pub fn basenames(&self) -> impl Iterator<Item = &str> {
        match self {
            ExtensionMap::Keyed(map) => itertools::Either::Left(map.keys()),
            ExtensionMap::Constant { support, .. } => itertools::Either::Right(support.iter()),
        }
        .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        match self {
            ExtensionMap::Keyed(map) => map.len(),
            ExtensionMap::Constant { support, .. } => support.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Groups a directory listing by base name, keeping every extension seen.
///
/// This is the unvalidated diagnostic view; the conformance path goes through
/// [`collect_extensions`] instead.
pub fn group_extensions<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> IndexMap<String, Vec<String>> {
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();

    for (basename, extension) in names.into_iter().map(split_extension) {
        groups
            .entry(basename.to_string())
            .or_default()
            .push(extension.to_string());
    }

    groups
}

/// Builds the base name to extension lookup for a directory listing.
///
/// Fails if any base name appears with two or more extensions: such a listing
/// has no well-defined mapping and must not silently pick one. When every
/// base name shares a single extension, the constant form is substituted.
pub fn collect_extensions<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> Result<ExtensionMap, ExtensionError> {
    let mut map = IndexMap::new();

    for (basename, extensions) in group_extensions(names) {
        match <[String; 1]>::try_from(extensions) {
            Ok([extension]) => {
                map.insert(basename, extension);
            }
            Err(extensions) => {
                return Err(ExtensionError::Ambiguous {
                    basename,
                    extensions,
                })
            }
        }
    }

    let shared = match map.values().next() {
        Some(first) if map.values().all(|extension| extension == first) => Some(first.clone()),
        _ => None,
    };

    match shared {
        Some(extension) => Ok(ExtensionMap::Constant {
            extension,
            support: map.keys().cloned().collect(),
        }),
        None => Ok(ExtensionMap::Keyed(map)),
    }
}

#[cfg(test)]
mod tests {
    use super::{collect_extensions, group_extensions, split_extension, ExtensionMap};

    #[test]
    fn split_at_the_final_dot_only() {
        assert_eq!(split_extension("graph.txt"), ("graph", ".txt"));
        assert_eq!(split_extension("a.tar.gz"), ("a.tar", ".gz"));
        assert_eq!(split_extension("plain"), ("plain", ""));
        assert_eq!(split_extension("trailing."), ("trailing", "."));
        assert_eq!(split_extension(".hidden"), (".hidden", ""));
        assert_eq!(split_extension("..."), ("...", ""));
        assert_eq!(split_extension(""), ("", ""));
    }

    #[test]
    fn ambiguous_listing_names_the_base_name() {
        let error = collect_extensions(["a.txt", "a.csv", "b.txt"])
            .unwrap_err()
            .to_string();

        assert!(error.contains("`a`"), "unexpected message: {error}");
        assert!(error.contains(".txt"), "unexpected message: {error}");
        assert!(error.contains(".csv"), "unexpected message: {error}");
    }

    #[test]
    fn unambiguous_listing_succeeds() {
        let map = collect_extensions(["a.txt", "b.csv"]).unwrap();

        assert!(matches!(map, ExtensionMap::Keyed(_)));
        assert_eq!(map.get("a"), Some(".txt"));
        assert_eq!(map.get("b"), Some(".csv"));
        assert_eq!(map.get("c"), None);
    }

    #[test]
    fn shared_extension_collapses_to_the_constant_form() {
        let map = collect_extensions(["a.csv", "b.csv", "c.csv"]).unwrap();

        assert!(matches!(map, ExtensionMap::Constant { .. }));
        for basename in ["a", "b", "c"] {
            assert_eq!(map.get(basename), Some(".csv"));
        }
        assert_eq!(map.get("d"), None);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn constant_form_agrees_with_the_keyed_form() {
        let names = ["a.csv", "b.csv"];
        let constant = collect_extensions(names).unwrap();
        let keyed = ExtensionMap::Keyed(
            names
                .iter()
                .map(|name| {
                    let (basename, extension) = split_extension(name);
                    (basename.to_string(), extension.to_string())
                })
                .collect(),
        );

        for basename in ["a", "b", "absent"] {
            assert_eq!(constant.get(basename), keyed.get(basename));
        }
        assert_eq!(
            constant.basenames().collect::<Vec<_>>(),
            keyed.basenames().collect::<Vec<_>>()
        )
    }

    #[test]
    fn empty_listing_stays_keyed() {
        let map = collect_extensions([]).unwrap();

        assert!(matches!(map, ExtensionMap::Keyed(_)));
        assert!(map.is_empty())
    }

    #[test]
    fn grouping_keeps_every_extension() {
        let groups = group_extensions(["a.txt", "a.csv", "b.txt"]);

        assert_eq!(groups["a"], vec![".txt".to_string(), ".csv".to_string()]);
        assert_eq!(groups["b"], vec![".txt".to_string()])
    }
}
