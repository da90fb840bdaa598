use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use anyhow::{ensure, Context, Result};
use log::{info, trace};
use rayon::prelude::*;
use sha2_engine::{Digest, Hasher, Variant};

use crate::report::FileReport;

/// Streams `reader` through the incremental hasher, `buffer_size` bytes at a
/// time. Returns the digest and the number of bytes consumed.
pub fn hash_reader<R: Read>(
    mut reader: R,
    variant: Variant,
    buffer_size: usize,
) -> Result<(Digest, u128)> {
    ensure!(buffer_size > 0, "read buffer size must be positive");

    let mut hasher = Hasher::new(variant);
    let mut buffer = vec![0u8; buffer_size];
    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        hasher.update(&buffer[..read])?;
    }

    let bytes = hasher.bytes_processed();
    trace!("read {} bytes for {}", bytes, variant);

    Ok((hasher.finalize()?, bytes))
}

pub fn hash_path<P: AsRef<Path>>(
    path: P,
    variant: Variant,
    buffer_size: usize,
) -> Result<FileReport> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let (digest, bytes) = hash_reader(file, variant, buffer_size)
        .with_context(|| format!("failed to hash {}", path.display()))?;

    Ok(FileReport::new(&path.display().to_string(), &digest, bytes))
}

/// Hashes every path; one result per path, in input order.
pub fn hash_paths<P: AsRef<Path> + Sync>(
    paths: &[P],
    variant: Variant,
    buffer_size: usize,
    parallel: bool,
) -> Vec<Result<FileReport>> {
    info!(
        "hashing {} files with {} (parallel: {})",
        paths.len(),
        variant,
        parallel
    );

    if parallel {
        paths
            .par_iter()
            .map(|path| hash_path(path, variant, buffer_size))
            .collect()
    } else {
        paths
            .iter()
            .map(|path| hash_path(path, variant, buffer_size))
            .collect()
    }
}
