use super::types::{Chunk, Document};
use crate::error::{AnalysisError, Result};
use std::iter;

/// Splits `document` into exactly `parallelism` contiguous chunks.
///
/// Every chunk holds `len / parallelism` characters and the last one absorbs
/// the remainder. Split points are purely positional, so a word that straddles
/// one is cut in two and each fragment is later counted as its own token. When
/// `parallelism` exceeds the document length, the leading chunks are empty.
pub fn partition(document: &Document, parallelism: usize) -> Result<Vec<Chunk>> {
    if parallelism == 0 {
        return Err(AnalysisError::invalid("parallelism", parallelism));
    }

    let text = document.as_str();
    let chunk_len = text.chars().count() / parallelism;

    // Byte offsets of every split, measured in chars so no UTF-8 sequence is cut.
    let mut splits: Vec<usize> = if chunk_len == 0 {
        vec![0; parallelism]
    } else {
        iter::once(0)
            .chain(
                text.char_indices()
                    .enumerate()
                    .skip(1)
                    .filter(|(position, _)| position % chunk_len == 0)
                    .map(|(_, (offset, _))| offset)
                    .take(parallelism - 1),
            )
            .collect()
    };
    splits.push(text.len());

    let chunks: Vec<Chunk> = splits
        .windows(2)
        .enumerate()
        .map(|(index, bounds)| Chunk::new(index, &text[bounds[0]..bounds[1]]))
        .collect();

    tracing::debug!(
        "Partitioned {} bytes into {} chunks of ~{} chars",
        text.len(),
        chunks.len(),
        chunk_len
    );

    Ok(chunks)
}
