use crate::Engine;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;


/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Positions drawn (with replacement) when the field is randomized:
/// `cells / 2` uniform picks from `0..cells`.
fn draw_positions<R: Rng>(rng: &mut R, cells: usize) -> impl Iterator<Item = usize> + '_ {
    (0..cells / 2).map(move |_| rng.gen_range(0..cells))
}

/// `W x H` field whose borders are permanently dead.
///
/// Two buffers are kept: `cells_curr` holds the latest completed generation
/// and `cells_next` is scratch space written by [`Engine::step`].
pub struct LifeGrid<const W: usize, const H: usize> {
    cells_curr: [[Cell; W]; H],
    cells_next: [[Cell; W]; H],
    rng: ChaCha8Rng,
    generation: u64,
}

impl<const W: usize, const H: usize> LifeGrid<W, H> {
    pub const CELLS: usize = W * H;

    const NOT_EMPTY: () = assert!(W > 0 && H > 0, "field must have at least one cell");

    /// Create an all-dead field.
    ///
    /// `seed` - random seed for later [`Engine::initialize`] calls
    /// (if `None`, then random seed is generated)
    pub fn blank(seed: Option<u64>) -> Self {
        let () = Self::NOT_EMPTY;
        let rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self {
            cells_curr: [[Cell::Dead; W]; H],
            cells_next: [[Cell::Dead; W]; H],
            rng,
            generation: 0,
        }
    }

    /// Create a field and randomize it right away.
    pub fn random(seed: Option<u64>) -> Self {
        let mut field = Self::blank(seed);
        field.initialize();
        field
    }

    /// Place a cell; coordinates outside the field are ignored.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < W && y < H {
            self.cells_curr[y][x] = cell;
        }
    }

    /// Coordinates of live cells, column by column.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..W).flat_map(move |x| {
            (0..H).filter_map(move |y| self.cells_curr[y][x].is_alive().then_some((x, y)))
        })
    }

    fn count_neibs(&self, x: usize, y: usize) -> usize {
        let (x, y) = (x as isize, y as isize);
        NEIGHBOURS
            .iter()
            .filter(|&&(dx, dy)| self.get(x + dx, y + dy).is_alive())
            .count()
    }
}

impl<const W: usize, const H: usize> Engine for LifeGrid<W, H> {
    fn width(&self) -> usize {
        W
    }

    fn height(&self) -> usize {
        H
    }

    fn initialize(&mut self) {
        self.cells_curr = [[Cell::Dead; W]; H];
        for n in draw_positions(&mut self.rng, W * H) {
            self.cells_curr[n / W][n % W] = Cell::Alive;
        }
        self.generation = 0;
    }

    fn get(&self, x: isize, y: isize) -> Cell {
        if x < 0 || y < 0 || x as usize >= W || y as usize >= H {
            return Cell::Dead;
        }
        self.cells_curr[y as usize][x as usize]
    }

    fn step(&mut self) {
        for y in 0..H {
            for x in 0..W {
                let neibs = self.count_neibs(x, y);
                self.cells_next[y][x] = match (self.cells_curr[y][x], neibs) {
                    (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
                    _ => Cell::Dead,
                };
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        self.generation += 1;
    }

    fn population(&self) -> usize {
        self.cells_curr
            .iter()
            .flatten()
            .filter(|cell| cell.is_alive())
            .count()
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
