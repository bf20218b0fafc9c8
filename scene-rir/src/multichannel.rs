//! Conversion of ragged per-mic, per-source responses into padded tensors.

use crate::error::{Result, RirError};
use ndarray::{Array1, Array2};

/// One zero-padded `[length, num_mics]` tensor per source.
pub type MultichannelRir = Vec<Array2<f64>>;

/// Number of microphones in a `rir[mic][source]` collection.
pub fn num_mics(rir: &[Vec<Array1<f64>>]) -> usize {
    rir.len()
}

/// Number of sources in a `rir[mic][source]` collection.
///
/// Every microphone row must list the same number of sources.
pub fn num_sources(rir: &[Vec<Array1<f64>>]) -> Result<usize> {
    let expected = rir.first().map(|responses| responses.len()).unwrap_or(0);
    for (mic, responses) in rir.iter().enumerate() {
        if responses.len() != expected {
            return Err(RirError::SourceCountMismatch {
                mic,
                expected,
                found: responses.len(),
            });
        }
    }
    Ok(expected)
}

/// Longest native response length per source, across microphones.
pub fn source_lengths(rir: &[Vec<Array1<f64>>]) -> Result<Vec<usize>> {
    let n_sources = num_sources(rir)?;
    Ok((0..n_sources)
        .map(|source| {
            rir.iter()
                .map(|responses| responses[source].len())
                .max()
                .unwrap_or(0)
        })
        .collect())
}

/// Align a `rir[mic][source]` collection into one tensor per source.
///
/// For each source the output is a `[max_length, num_mics]` array: column
/// `m` holds `rir[m][source]` left-aligned at index 0 and zero-padded past
/// its native length. Native samples are copied verbatim; padding is
/// exactly 0.0. An empty collection yields an empty output.
pub fn convert_rir_to_multichannel(rir: &[Vec<Array1<f64>>]) -> Result<MultichannelRir> {
    let n_mics = num_mics(rir);
    let lengths = source_lengths(rir)?;

    let mut output = Vec::with_capacity(lengths.len());
    for (source, &max_len) in lengths.iter().enumerate() {
        let mut channels = Array2::zeros((max_len, n_mics));
        for (mic, responses) in rir.iter().enumerate() {
            for (i, &sample) in responses[source].iter().enumerate() {
                channels[[i, mic]] = sample;
            }
        }
        output.push(channels);
    }
    Ok(output)
}
