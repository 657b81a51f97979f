use std::io::{Read, Write};

use flate2::Compression;
use flate2::bufread::ZlibDecoder;
use flate2::write::ZlibEncoder;

use crate::{Error, Result};

/// Compresses `bytes` using a zlib encoder.
///
/// # Errors
///
/// This function will fail if the `ZlibEncoder` fails.
pub fn compress(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?)
}

/// Returns `bytes` decompressed, using a zlib decoder.
///
/// # Errors
///
/// Any failure while inflating is reported as a corrupt object, since the input is expected to
/// come from the object directory.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut decoder = ZlibDecoder::new(bytes);
    decoder
        .read_to_end(&mut buf)
        .map_err(|e| Error::corrupt(format!("could not decompress data: {e}")))?;

    Ok(buf)
}
