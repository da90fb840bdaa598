use log::debug;
use rayon::prelude::*;

use crate::digest::Digest;
use crate::error::Result;
use crate::hasher::hash;
use crate::variant::Variant;

/// Hashes independent messages concurrently. Digests come back in input
/// order; the first failure aborts the batch.
pub fn hash_many<M>(messages: &[M], variant: Variant) -> Result<Vec<Digest>>
where
    M: AsRef<[u8]> + Sync,
{
    debug!("hashing {} messages with {}", messages.len(), variant);

    messages
        .par_iter()
        .map(|message| hash(message.as_ref(), variant))
        .collect()
}
