#[cfg(test)]
mod tests {
    use gameoflife::{Cell, Engine, Field, LifeGrid};

    const SEED: u64 = 42;

    type Field5 = LifeGrid<5, 5>;

    fn from_cells<const W: usize, const H: usize>(cells: &[(usize, usize)]) -> LifeGrid<W, H> {
        let mut field = LifeGrid::blank(Some(SEED));
        for &(x, y) in cells {
            field.set(x, y, Cell::Alive);
        }
        field
    }

    fn alive<const W: usize, const H: usize>(field: &LifeGrid<W, H>) -> Vec<(usize, usize)> {
        let mut cells = field.alive_cells().collect::<Vec<_>>();
        cells.sort();
        cells
    }

    #[test]
    fn test_dead_field_stays_dead() {
        let mut field = Field::blank(Some(SEED));
        for _ in 0..4 {
            field.step();
            assert_eq!(field.population(), 0);
        }
        assert_eq!(field.generation(), 4);
    }

    #[test]
    fn test_blinker() {
        let vertical = [(1, 0), (1, 1), (1, 2)];
        let horizontal = [(0, 1), (1, 1), (2, 1)];
        let mut field = from_cells::<5, 5>(&vertical);

        field.step();
        assert_eq!(alive(&field), horizontal);

        field.step();
        assert_eq!(alive(&field), vertical);
    }

    #[test]
    fn test_blinker_away_from_edges() {
        let mut field = from_cells::<7, 7>(&[(3, 2), (3, 3), (3, 4)]);

        field.step();
        assert_eq!(alive(&field), [(2, 3), (3, 3), (4, 3)]);
    }

    #[test]
    fn test_underpopulation() {
        let mut field = from_cells::<5, 5>(&[(2, 2)]);
        field.step();
        assert_eq!(field.population(), 0);
    }

    #[test]
    fn test_birth_needs_exactly_three() {
        // live cells around (2, 2)
        let around = [(1, 1), (2, 1), (3, 1), (1, 3), (3, 3)];
        for n in 0..=around.len() {
            let mut field = from_cells::<5, 5>(&around[..n]);
            field.step();
            let expected = if n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(field.get(2, 2), expected, "{n} neighbours");
        }
    }

    #[test]
    fn test_survival() {
        // block is a still life: each cell has exactly 3 neighbours
        let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
        let mut field = from_cells::<5, 5>(&block);
        field.step();
        assert_eq!(alive(&field), block);

        // overcrowded centre of a plus sign dies
        let mut field = from_cells::<5, 5>(&[(2, 1), (1, 2), (2, 2), (3, 2), (2, 3)]);
        field.step();
        assert_eq!(field.get(2, 2), Cell::Dead);
    }

    #[test]
    fn test_out_of_bounds_is_dead() {
        let mut field = Field5::blank(Some(SEED));
        for y in 0..5 {
            for x in 0..5 {
                field.set(x, y, Cell::Alive);
            }
        }
        for (x, y) in [(-1, 0), (0, -1), (5, 0), (0, 5), (-1, -1), (5, 5), (isize::MIN, isize::MAX)] {
            assert_eq!(field.get(x, y), Cell::Dead);
        }

        field.set(5, 0, Cell::Alive);
        assert_eq!(field.population(), 25);
    }

    #[test]
    fn test_no_wrapping() {
        // on a torus (0, 0) would see all three and be born
        let mut field = from_cells::<5, 5>(&[(4, 0), (0, 4), (4, 4)]);
        field.step();
        assert_eq!(field.get(0, 0), Cell::Dead);
        assert_eq!(field.population(), 0);
    }

    #[test]
    fn test_edge_births() {
        // an edge cell with three on-grid neighbours is born
        let mut field = from_cells::<5, 5>(&[(0, 1), (1, 1), (1, 0)]);
        field.step();
        assert_eq!(alive(&field), [(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = Field::random(Some(SEED));
        let b = Field::random(Some(SEED));
        assert_eq!(alive(&a), alive(&b));
        assert!(a.population() > 0);
        assert!(a.population() <= Field::CELLS / 2);
    }

    #[test]
    fn test_reinitialize_draws_fresh_cells() {
        let mut field = Field::random(Some(SEED));
        let first = alive(&field);
        field.initialize();
        assert_ne!(alive(&field), first);
        assert!(field.population() <= Field::CELLS / 2);
    }

    #[test]
    fn test_dimensions() {
        let field = Field::blank(None);
        assert_eq!((field.width(), field.height()), (24, 18));
        assert_eq!(Field::CELLS, 432);
    }
}
