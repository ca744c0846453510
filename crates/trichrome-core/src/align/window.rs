use crate::consts::DEFAULT_SEARCH_RADIUS;
use crate::frame::Displacement;

/// Closed rectangle of candidate displacements:
/// `[center.dy - radius_y, center.dy + radius_y] x [center.dx - radius_x, center.dx + radius_x]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchWindow {
    pub center: Displacement,
    pub radius_y: u32,
    pub radius_x: u32,
}

impl SearchWindow {
    /// Full-radius window around zero, used for the brute-force search.
    pub fn symmetric(radius: u32) -> Self {
        Self::around(Displacement::ZERO, radius)
    }

    /// Window of `radius` around a prior estimate, used for refinement.
    pub fn around(center: Displacement, radius: u32) -> Self {
        Self {
            center,
            radius_y: radius,
            radius_x: radius,
        }
    }

    /// Number of candidates in the window.
    pub fn candidate_count(&self) -> usize {
        (2 * self.radius_y as usize + 1) * (2 * self.radius_x as usize + 1)
    }

    /// Enumerate candidates with `dy` in the outer loop and `dx` in the
    /// inner loop, both ascending. Search ties resolve to the earliest
    /// candidate in this order.
    pub fn candidates(self) -> impl Iterator<Item = Displacement> {
        let ry = self.radius_y as i32;
        let rx = self.radius_x as i32;
        let center = self.center;
        (-ry..=ry).flat_map(move |oy| {
            (-rx..=rx).map(move |ox| center + Displacement::new(oy, ox))
        })
    }
}

impl Default for SearchWindow {
    fn default() -> Self {
        Self::symmetric(DEFAULT_SEARCH_RADIUS)
    }
}
