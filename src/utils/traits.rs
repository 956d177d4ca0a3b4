use crate::Cell;

/// Engine trait for a fixed-size Game of Life field whose edges are dead.
pub trait Engine {
    /// Width of the field in cells.
    fn width(&self) -> usize;

    /// Height of the field in cells.
    fn height(&self) -> usize;

    /// Clear the field, then set `width * height / 2` randomly drawn cells alive.
    ///
    /// Draws are made with replacement, so the resulting population may be
    /// smaller than the number of draws.
    fn initialize(&mut self);

    /// State of the cell at `(x, y)`; anything outside the field is dead.
    fn get(&self, x: isize, y: isize) -> Cell;

    /// Advance the field by one generation (B3/S23).
    fn step(&mut self);

    /// Number of live cells.
    fn population(&self) -> usize {
        let (w, h) = (self.width() as isize, self.height() as isize);
        (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .filter(|&(x, y)| self.get(x, y).is_alive())
            .count()
    }

    /// Number of generations since the last `initialize`.
    fn generation(&self) -> u64;
}
