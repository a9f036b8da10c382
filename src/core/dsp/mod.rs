//! Digital Signal Processing utilities
//!
//! Framing, FFT wrappers, windows, mel filterbank and small statistics
//! shared by the feature extractors.

pub mod fft;
pub mod framing;
pub mod mel;
pub mod stats;
pub mod windows;

pub use fft::{FftProcessor, PowerSpectrum};
pub use framing::{Framer, Frames};
pub use mel::{Dct, MelFilterbank};
pub use stats::{mean, peak_amplitude};
pub use windows::{create_window, WindowType};
