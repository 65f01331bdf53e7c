//! Dump file reader with automatic decompression support.
//!
//! Captured enrollment dumps are routinely archived compressed; this
//! reader decompresses `.gz` and `.zst` files transparently so they can
//! be audited without manual extraction.

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Opens a dump file with automatic decompression based on extension.
///
/// `.gz` files are gzip-decoded, `.zst` files are zstandard-decoded,
/// anything else is read as-is.
pub fn open_file(path: impl AsRef<Path>) -> Result<Box<dyn Read + Send>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match extension {
        "gz" => Ok(Box::new(GzDecoder::new(file))),
        "zst" => {
            let decoder = zstd::Decoder::new(file).with_context(|| {
                format!("Failed to create zstd decoder for: {}", path.display())
            })?;
            Ok(Box::new(decoder))
        }
        _ => Ok(Box::new(file)),
    }
}
