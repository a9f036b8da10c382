//! Overlapping frame slicing

use crate::error::{NoiseCheckError, Result};

/// Slices a buffer into fixed-length frames at a fixed stride.
///
/// Frame `i` covers `[i * hop_length, i * hop_length + frame_length)`.
/// Trailing samples that do not fill a whole frame are dropped. The value
/// is `Copy`, so the frame sequence can be restarted at will via
/// [`Framer::frames`].
#[derive(Debug)]
pub struct Framer<'a, T> {
    samples: &'a [T],
    frame_length: usize,
    hop_length: usize,
    num_frames: usize,
}

impl<'a, T> Framer<'a, T> {
    pub fn new(samples: &'a [T], frame_length: usize, hop_length: usize) -> Result<Self> {
        if frame_length == 0 || hop_length == 0 {
            return Err(NoiseCheckError::InvalidParameters(format!(
                "frame_length ({}) and hop_length ({}) must be positive",
                frame_length, hop_length
            )));
        }
        if samples.len() < frame_length {
            return Err(NoiseCheckError::InvalidParameters(format!(
                "buffer of {} samples is shorter than one frame ({})",
                samples.len(),
                frame_length
            )));
        }

        let num_frames = 1 + (samples.len() - frame_length) / hop_length;

        Ok(Self {
            samples,
            frame_length,
            hop_length,
            num_frames,
        })
    }

    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    pub fn frame_length(&self) -> usize {
        self.frame_length
    }

    pub fn hop_length(&self) -> usize {
        self.hop_length
    }

    /// Fresh iterator over all frames, starting from the first
    pub fn frames(&self) -> Frames<'a, T> {
        Frames {
            framer: *self,
            next: 0,
        }
    }
}

impl<T> Clone for Framer<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Framer<'_, T> {}

impl<'a, T> IntoIterator for &Framer<'a, T> {
    type Item = &'a [T];
    type IntoIter = Frames<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames()
    }
}

/// Iterator returned by [`Framer::frames`]
#[derive(Debug, Clone)]
pub struct Frames<'a, T> {
    framer: Framer<'a, T>,
    next: usize,
}

impl<'a, T> Iterator for Frames<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.framer.num_frames {
            return None;
        }
        let start = self.next * self.framer.hop_length;
        self.next += 1;
        Some(&self.framer.samples[start..start + self.framer.frame_length])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.framer.num_frames - self.next;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Frames<'_, T> {}
