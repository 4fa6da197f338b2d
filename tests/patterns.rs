#[cfg(test)]
mod tests {
    use torus_life::{
        from_coordinates, stamp_shape, step, Board, Dimensions, NeighborTable, Seed, Simulation,
    };

    fn shape_board(name: &str, width: usize, height: usize, x: usize, y: usize) -> Board {
        let seed = Seed::Shape {
            name: name.to_string(),
            x,
            y,
        };
        seed.build(width, height).unwrap()
    }

    #[test]
    fn test_blinker_has_period_two() {
        let start = shape_board("blinker", 10, 10, 3, 4);
        let table = NeighborTable::build(10, 10).unwrap();
        let once = step(&start, &table).unwrap();
        let twice = step(&once, &table).unwrap();

        let vertical = from_coordinates(10, 10, &[(4, 3), (4, 4), (4, 5)]).unwrap();
        assert_eq!(once, vertical);
        assert_eq!(twice, start);
    }

    #[test]
    fn test_beacon_one_step() {
        let start = shape_board("beacon", 10, 10, 2, 2);
        let table = NeighborTable::build(10, 10).unwrap();

        #[rustfmt::skip]
        let expected = Board::from_bits(10, 10, &[
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 1, 1, 0, 0, 0, 0, 0, 0, 0,
            0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
            0, 0, 0, 1, 1, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ])
        .unwrap();

        let next = step(&start, &table).unwrap();
        assert_eq!(next, expected, "\n{}", next);
        assert_eq!(step(&next, &table).unwrap(), start);
    }

    #[test]
    fn test_block_is_still_life() {
        let start = shape_board("block", 8, 8, 1, 1);
        let mut sim = Simulation::new(start.clone());
        sim.advance(5);
        assert_eq!(sim.board(), &start);
    }

    #[test]
    fn test_toad_has_period_two() {
        let start = shape_board("toad", 12, 12, 4, 4);
        let mut sim = Simulation::new(start.clone());
        sim.step();
        assert_ne!(sim.board(), &start);
        assert_eq!(sim.population(), 6);
        sim.step();
        assert_eq!(sim.board(), &start);
    }

    /// A glider moves one cell right and one down every 4 generations and
    /// reappears on the opposite side after crossing an edge.
    #[test]
    fn test_glider_wraps_around() {
        let (w, h) = (8, 8);
        let dims = Dimensions::new(w, h).unwrap();
        let blank = Board::blank(dims);
        let mut sim = Simulation::new(stamp_shape(&blank, "glider", 1, 1).unwrap());

        let expected_at = |x: usize, y: usize| {
            let points = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]
                .iter()
                .map(|&(dx, dy)| ((x - 1 + dx) % w + 1, (y - 1 + dy) % h + 1))
                .collect::<Vec<_>>();
            from_coordinates(w, h, &points).unwrap()
        };

        for k in 1..=2 * w {
            sim.advance(4);
            let x = (k % w) + 1;
            let y = (k % h) + 1;
            assert_eq!(sim.board(), &expected_at(x, y), "after {} periods\n{}", k, sim.board());
        }
        assert_eq!(sim.generation(), 8 * w as u64);
    }
}
