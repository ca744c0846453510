use ndarray::{concatenate, Array2, Axis};

use trichrome_core::frame::Frame;

/// Deterministic xorshift generator so test scenes are reproducible
/// without pulling in an RNG crate.
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }
}

/// Uniform noise in [0, 1).
pub fn noise(h: usize, w: usize, seed: u64) -> Array2<f32> {
    let mut rng = XorShift::new(seed);
    Array2::from_shape_fn((h, w), |_| rng.next_f32())
}

/// A scene of soft Gaussian blobs of varying size over faint noise.
///
/// Blob radii scale with the image so the structure survives several 2x
/// reductions, while the noise keeps every shift distinguishable at full
/// resolution. Values stay in [0, 1].
pub fn blob_scene(h: usize, w: usize, seed: u64) -> Array2<f32> {
    let mut rng = XorShift::new(seed);
    let side = h.min(w) as f32;
    let blobs: Vec<(f32, f32, f32, f32)> = (0..12)
        .map(|_| {
            let cy = rng.next_f32() * h as f32;
            let cx = rng.next_f32() * w as f32;
            let sigma = side * (0.02 + 0.06 * rng.next_f32());
            let amp = 0.3 + 0.7 * rng.next_f32();
            (cy, cx, sigma, amp)
        })
        .collect();

    let mut data = Array2::from_shape_fn((h, w), |(r, c)| {
        let mut v = 0.0f32;
        for &(cy, cx, sigma, amp) in &blobs {
            let dy = r as f32 - cy;
            let dx = c as f32 - cx;
            v += amp * (-(dy * dy + dx * dx) / (2.0 * sigma * sigma)).exp();
        }
        v
    });

    let max = data.iter().cloned().fold(f32::MIN, f32::max).max(1e-6);
    data.mapv_inplace(|v| 0.9 * v / max);
    data + &noise(h, w, seed.wrapping_mul(31)).mapv(|v| 0.1 * v)
}

/// Black image with a `size`x`size` bright square whose top-left corner is
/// at `(top, left)`.
pub fn square_scene(h: usize, w: usize, top: usize, left: usize, size: usize) -> Array2<f32> {
    let mut data = Array2::<f32>::zeros((h, w));
    for r in top..top + size {
        for c in left..left + size {
            data[[r, c]] = 1.0;
        }
    }
    data
}

/// Vertical stripes with the given column period; every row is identical.
pub fn stripes(h: usize, w: usize, period: usize) -> Array2<f32> {
    Array2::from_shape_fn((h, w), |(_, c)| if c % period == 0 { 1.0 } else { 0.0 })
}

/// Stack blue, green, red top to bottom into one plate frame.
pub fn build_plate(blue: &Array2<f32>, green: &Array2<f32>, red: &Array2<f32>) -> Frame {
    let data = concatenate(Axis(0), &[blue.view(), green.view(), red.view()])
        .expect("channels share a width");
    Frame::new(data, 16)
}
