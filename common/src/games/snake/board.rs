use super::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn is_out_of_bounds(&self, p: Point) -> bool {
        p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height
    }

    /// Row-major iteration over every cell.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }
}
