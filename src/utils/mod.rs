use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;

use log::trace;

pub fn read_to_string(path: impl AsRef<Path>) -> io::Result<String> {
    trace!("reading from: {}", path.as_ref().display());
    fs::read_to_string(path)
}

pub trait PathExt {
    #[must_use]
    fn has_extension<E>(&self, extension: E) -> bool
    where
        for<'a> &'a OsStr: PartialEq<E>;
}

impl PathExt for Path {
    fn has_extension<E>(&self, extension: E) -> bool
    where
        for<'a> &'a OsStr: PartialEq<E>,
    {
        self.extension().map_or(false, |ext| ext == extension)
    }
}

pub trait StrExt {
    /// Splits the string into at most `N` parts, missing parts are `None`.
    /// The last part contains the remainder of the string.
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N];
}

impl StrExt for str {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N] {
        let mut split = self.splitn(N, pat);
        [(); N].map(|_| split.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_exact() {
        assert_eq!(
            "2024-01-07".split_exact::<3>("-"),
            [Some("2024"), Some("01"), Some("07")]
        );
        assert_eq!("2024".split_exact::<3>("-"), [Some("2024"), None, None]);
        assert_eq!("a-b-c-d".split_exact::<3>("-"), [Some("a"), Some("b"), Some("c-d")]);
    }

    #[test]
    fn test_has_extension() {
        assert!(Path::new("visits.toml").has_extension("toml"));
        assert!(Path::new("dir/visits.json").has_extension("json"));
        assert!(!Path::new("visits").has_extension("toml"));
        assert!(!Path::new("visits.toml.bak").has_extension("toml"));
    }
}
