use crate::{Coord, Dims};

/// Moore neighborhood as `(d_row, d_col)`, clockwise starting at West.
///
/// Index `i` is direction `i`; `(i + 1) & 7` is the next direction clockwise.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (0, -1),  // W
    (-1, -1), // NW
    (-1, 0),  // N
    (-1, 1),  // NE
    (0, 1),   // E
    (1, 1),   // SE
    (1, 0),   // S
    (1, -1),  // SW
];

pub const DIR_W: u8 = 0;
pub const DIR_NW: u8 = 1;
pub const DIR_N: u8 = 2;
pub const DIR_NE: u8 = 3;
pub const DIR_E: u8 = 4;
pub const DIR_SE: u8 = 5;
pub const DIR_S: u8 = 6;
pub const DIR_SW: u8 = 7;

#[inline]
pub fn step(c: Coord, dir: u8) -> Coord {
    c + MOORE_OFFSETS[(dir & 7) as usize]
}

pub fn neighbors(c: Coord, dims: Dims) -> impl Iterator<Item = Coord> {
    neighbors_from(c, DIR_W, dims).map(|(_, nb)| nb)
}

/// Same set as [`neighbors`], rotated to begin at `start_dir` and tagged with
/// the direction each neighbor lies in.
pub fn neighbors_from(c: Coord, start_dir: u8, dims: Dims) -> impl Iterator<Item = (u8, Coord)> {
    (0..8u8)
        .map(move |k| (start_dir.wrapping_add(k)) & 7)
        .map(move |dir| (dir, step(c, dir)))
        .filter(move |&(_, nb)| dims.contains(nb))
}

pub fn direction_between(from: Coord, to: Coord) -> Option<u8> {
    let d = to - from;
    MOORE_OFFSETS
        .iter()
        .position(|&o| o == d)
        .map(|i| i as u8)
}

/// Backtrack direction for the pixel reached by moving along `dir`.
///
/// The cell examined just before a hit in direction `dir` is the one in
/// direction `dir - 1` from the old pixel. Seen from the new pixel that cell
/// lies two steps counter-clockwise of `dir` for axis moves and three for
/// diagonal moves.
#[inline]
pub fn backtrack_after(dir: u8) -> u8 {
    if dir & 1 == 0 {
        (dir + 6) & 7
    } else {
        (dir + 5) & 7
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let d = Dims::new(5, 5);
        let nb: Vec<Coord> = neighbors(Coord::new(0, 0), d).collect();
        assert_eq!(
            nb,
            vec![Coord::new(0, 1), Coord::new(1, 1), Coord::new(1, 0)]
        );
    }

    #[test]
    fn interior_has_eight_in_clockwise_order() {
        let d = Dims::new(5, 5);
        let nb: Vec<Coord> = neighbors(Coord::new(2, 2), d).collect();
        assert_eq!(
            nb,
            vec![
                Coord::new(2, 1),
                Coord::new(1, 1),
                Coord::new(1, 2),
                Coord::new(1, 3),
                Coord::new(2, 3),
                Coord::new(3, 3),
                Coord::new(3, 2),
                Coord::new(3, 1),
            ]
        );
    }

    #[test]
    fn out_of_bounds_probe_is_clipped() {
        let d = Dims::new(5, 5);
        let nb: Vec<Coord> = neighbors(Coord::new(-1, 2), d).collect();
        assert_eq!(
            nb,
            vec![Coord::new(0, 3), Coord::new(0, 2), Coord::new(0, 1)]
        );
        assert_eq!(neighbors(Coord::new(-5, -5), d).count(), 0);
        assert_eq!(neighbors(Coord::new(0, 0), Dims::new(1, 1)).count(), 0);
    }

    #[test]
    fn rotated_start_keeps_order() {
        let d = Dims::new(5, 5);
        let dirs: Vec<u8> = neighbors_from(Coord::new(2, 2), DIR_SE, d)
            .map(|(dir, _)| dir)
            .collect();
        assert_eq!(dirs, vec![5, 6, 7, 0, 1, 2, 3, 4]);

        let edge: Vec<u8> = neighbors_from(Coord::new(0, 2), DIR_E, d)
            .map(|(dir, _)| dir)
            .collect();
        assert_eq!(edge, vec![DIR_E, DIR_SE, DIR_S, DIR_SW, DIR_W]);
    }

    #[test]
    fn direction_between_inverts_step() {
        let c = Coord::new(4, 4);
        for dir in 0..8u8 {
            assert_eq!(direction_between(c, step(c, dir)), Some(dir));
        }
        assert_eq!(direction_between(c, c), None);
        assert_eq!(direction_between(c, Coord::new(6, 4)), None);
    }

    #[test]
    fn backtrack_matches_previous_examined_cell() {
        let c = Coord::new(4, 4);
        for dir in 0..8u8 {
            let next = step(c, dir);
            let examined = step(c, dir.wrapping_sub(1) & 7);
            assert_eq!(direction_between(next, examined), Some(backtrack_after(dir)));
        }
    }
}
