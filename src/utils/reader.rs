// bounded text reads for checked documents

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// default read limit for checked documents (128 KiB)
pub const DEFAULT_MAX_READ_BYTES: u64 = 131_072;

pub struct TextReader;

impl TextReader {
    /// read at most `limit` bytes of a file as text
    ///
    /// read failures yield an empty string; callers treat absent and wrong
    /// content the same way
    pub fn read_bounded<P: AsRef<Path>>(path: P, limit: u64) -> String {
        let path = path.as_ref();

        match Self::try_read_bounded(path, limit) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "unreadable document treated as empty");
                String::new()
            }
        }
    }

    /// like `read_bounded` but surfaces the io error
    pub fn try_read_bounded<P: AsRef<Path>>(path: P, limit: u64) -> std::io::Result<String> {
        let file = File::open(path.as_ref())?;
        let mut bytes = Vec::new();
        file.take(limit).read_to_end(&mut bytes)?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
