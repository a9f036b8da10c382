//! Window function implementations

use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    /// No tapering; the frame is transformed as-is
    Rectangular,
    /// Periodic Hann (DFT-even), the usual STFT window
    Hann,
}

/// Create window function
pub fn create_window(size: usize, window_type: WindowType) -> Vec<f64> {
    let n = size as f64;
    (0..size)
        .map(|i| {
            let x = i as f64;
            match window_type {
                WindowType::Rectangular => 1.0,
                WindowType::Hann => 0.5 * (1.0 - (2.0 * PI * x / n).cos()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hann_window() {
        let window = create_window(4, WindowType::Hann);
        assert!((window[0]).abs() < 0.01);  // Should be ~0 at the start
        assert!((window[2] - 1.0).abs() < 0.01);  // Should be ~1 at center
    }

    #[test]
    fn test_hann_is_periodic() {
        // Periodic window: w[n - k] == w[k] for k >= 1
        let window = create_window(2048, WindowType::Hann);
        assert!((window[1] - window[2047]).abs() < 1e-12);
        assert!((window[1024] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rectangular_window() {
        let window = create_window(8, WindowType::Rectangular);
        assert!(window.iter().all(|&w| w == 1.0));
    }
}
