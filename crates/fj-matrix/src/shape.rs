use std::fmt;

/// The `rows x cols` extent of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Shape { rows, cols }
    }

    /// Total number of elements (`rows * cols`).
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if `(row, col)` addresses an element inside this shape.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Row-major offset of `(row, col)`. The caller must have checked `contains`.
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Shape of `self @ other`, or `None` when the inner dimensions disagree.
    pub fn product(&self, other: &Shape) -> Option<Shape> {
        if self.cols == other.rows {
            Some(Shape::new(self.rows, other.cols))
        } else {
            None
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_shape() {
        let s = Shape::new(2, 3);
        assert_eq!(s.numel(), 6);
        assert_eq!(s.offset(1, 2), 5);
        assert!(s.contains(1, 2));
        assert!(!s.contains(2, 0));
        assert!(!s.contains(0, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Shape::new(100, 7).to_string(), "100x7");
    }

    #[test]
    fn test_product() {
        let a = Shape::new(2, 3);
        let b = Shape::new(3, 4);
        assert_eq!(a.product(&b), Some(Shape::new(2, 4)));
        assert_eq!(b.product(&a), None);
    }
}
