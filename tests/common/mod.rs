use std::io::Write;

use tempfile::NamedTempFile;

/// Writes `contents` to a temporary file ending with `suffix`, the file is
/// deleted once the returned value is dropped.
#[must_use]
pub fn write_temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("should be able to create a temporary file");

    file.write_all(contents.as_bytes())
        .expect("should be able to write to the temporary file");

    file
}
