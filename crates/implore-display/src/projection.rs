//! Projection matrices and the default "maximized" framing
//!
//! The engine hands out projections as flat arrays. 3D surfaces use a
//! row-major 4x4 affine matrix (16 entries); native 2D surfaces use a short
//! affine layout. The two shapes have no common formula for framing, so
//! [`ProjectionMatrix::maximize`] branches on length.

use serde::{Deserialize, Serialize};

/// Scale written to the three diagonal entries of a 3D matrix
pub const MAXIMIZED_SCALE_3D: f64 = 0.95;

/// Scale written to entries 0 and 3 (negated) of a 2D matrix
pub const MAXIMIZED_SCALE_2D: f64 = 1.4;

/// Matrices longer than this use the 3D layout
const LAYOUT_3D_THRESHOLD: usize = 10;

/// A flat projection matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionMatrix(Vec<f64>);

impl ProjectionMatrix {
    pub fn new(entries: Vec<f64>) -> Self {
        Self(entries)
    }

    /// Row-major 4x4 identity
    pub fn identity_3d() -> Self {
        let mut entries = vec![0.0; 16];
        for i in 0..4 {
            entries[i * 5] = 1.0;
        }
        Self(entries)
    }

    /// 2D affine identity `[m00, m10, m01, m11, m02, m12]`
    pub fn identity_2d() -> Self {
        Self(vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0])
    }

    pub fn entries(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if the matrix uses the 3D layout
    pub fn is_3d_layout(&self) -> bool {
        self.0.len() > LAYOUT_3D_THRESHOLD
    }

    /// Frame the content to fill most of the viewport.
    ///
    /// 3D layout: entries 0, 5 and 10 become 0.95. 2D layout: entry 0
    /// becomes 1.4 and entry 3 becomes -1.4. Nothing else changes, and
    /// indices past the end of a short matrix are skipped.
    pub fn maximize(&mut self) {
        if self.is_3d_layout() {
            for index in [0, 5, 10] {
                self.0[index] = MAXIMIZED_SCALE_3D;
            }
        } else {
            self.set_if_present(0, MAXIMIZED_SCALE_2D);
            self.set_if_present(3, -MAXIMIZED_SCALE_2D);
        }
    }

    /// Copy of the matrix with [`ProjectionMatrix::maximize`] applied
    pub fn maximized(mut self) -> Self {
        self.maximize();
        self
    }

    fn set_if_present(&mut self, index: usize, value: f64) {
        if let Some(entry) = self.0.get_mut(index) {
            *entry = value;
        }
    }
}

impl From<Vec<f64>> for ProjectionMatrix {
    fn from(entries: Vec<f64>) -> Self {
        Self(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maximize_3d_sets_diagonal_only() {
        let input: Vec<f64> = (0..16).map(|i| i as f64 + 0.5).collect();
        let output = ProjectionMatrix::new(input.clone()).maximized();

        for (index, value) in output.entries().iter().enumerate() {
            match index {
                0 | 5 | 10 => assert_eq!(*value, 0.95),
                _ => assert_eq!(*value, input[index]),
            }
        }
    }

    #[test]
    fn test_maximize_2d_layout() {
        let output = ProjectionMatrix::identity_2d().maximized();
        assert_eq!(output.entries(), &[1.4, 0.0, 0.0, -1.4, 0.0, 0.0]);
    }

    #[test]
    fn test_maximize_ten_entries_is_2d() {
        let output = ProjectionMatrix::new(vec![0.0; 10]).maximized();
        assert_eq!(output.entries()[0], 1.4);
        assert_eq!(output.entries()[3], -1.4);
        assert_eq!(output.entries()[5], 0.0);
    }

    #[test]
    fn test_maximize_eleven_entries_is_3d() {
        let output = ProjectionMatrix::new(vec![0.0; 11]).maximized();
        assert_eq!(output.entries()[0], 0.95);
        assert_eq!(output.entries()[3], 0.0);
        assert_eq!(output.entries()[10], 0.95);
    }

    #[test]
    fn test_maximize_short_matrix() {
        let output = ProjectionMatrix::new(vec![1.0, 1.0]).maximized();
        assert_eq!(output.entries(), &[1.4, 1.0]);

        let empty = ProjectionMatrix::new(Vec::new()).maximized();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_identity_3d() {
        let identity = ProjectionMatrix::identity_3d();
        assert_eq!(identity.len(), 16);
        assert!(identity.is_3d_layout());
        assert_eq!(identity.entries()[15], 1.0);
        assert_eq!(identity.entries()[1], 0.0);
    }
}
