//! Multichannel alignment of room impulse responses.
//!
//! RIR generators hand back one variable-length response per
//! (microphone, source) pair. Downstream convolution wants one
//! time-aligned, zero-padded `[length, num_mics]` tensor per source. This
//! crate performs that reshaping and nothing else: it treats the RIR
//! producer as opaque and never alters a native sample.
//!
//! # Example
//! ```
//! use ndarray::array;
//! use scene_sim_rir::convert_rir_to_multichannel;
//!
//! // two mics, one source, different response lengths
//! let rir = vec![
//!     vec![array![1.0, 0.5]],
//!     vec![array![0.8, 0.4, 0.2]],
//! ];
//! let mc = convert_rir_to_multichannel(&rir).unwrap();
//! assert_eq!(mc[0].shape(), &[3, 2]);
//! assert_eq!(mc[0][[2, 0]], 0.0); // padding
//! ```

#![warn(clippy::all)]

mod error;
mod multichannel;

pub use error::*;
pub use multichannel::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
