//! A single polygonal tile of the board.

use std::f64::consts::{PI, TAU};
use std::fmt;

use crate::error::{ReversiError, Result};
use crate::position::Position;

/// Piece colour. An empty cell is `None` wherever occupancy is stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// One regular polygon of the tiling.
///
/// The geometry (centre, radius, side count, orientation and the vertex
/// list derived from them) is fixed at construction. Occupancy only ever
/// moves away from empty, and the legality flag is rewritten every turn.
#[derive(Debug, Clone)]
pub struct Cell {
    center: Position,
    radius: f64,
    sides: usize,
    orientation: f64,
    vertices: Vec<Position>,
    occupancy: Option<Color>,
    legal: bool,
}

impl Cell {
    /// Create an empty cell.
    ///
    /// `radius` is the centre-to-vertex distance and `orientation` the angle
    /// of the first vertex, counter-clockwise from +x.
    ///
    /// # Errors
    /// `InvalidArgument` if the radius is not a positive finite number, the
    /// orientation is not finite, or there are fewer than 3 sides.
    pub fn new(center: Position, radius: f64, sides: usize, orientation: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ReversiError::invalid_argument(format!(
                "cell radius must be positive, got {radius}"
            )));
        }
        if sides < 3 {
            return Err(ReversiError::invalid_argument(format!(
                "a cell needs at least 3 sides, got {sides}"
            )));
        }
        if !orientation.is_finite() {
            return Err(ReversiError::invalid_argument("orientation must be finite"));
        }

        let vertices = (0..sides)
            .map(|i| {
                Position::polar(radius, orientation + i as f64 * TAU / sides as f64)
                    .map(|v| v.plus(&center))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Cell {
            center,
            radius,
            sides,
            orientation,
            vertices,
            occupancy: None,
            legal: false,
        })
    }

    pub fn center(&self) -> Position {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn sides(&self) -> usize {
        self.sides
    }

    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    /// Vertices in counter-clockwise order, in model space.
    pub fn vertices(&self) -> &[Position] {
        &self.vertices
    }

    pub fn occupancy(&self) -> Option<Color> {
        self.occupancy
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy.is_none()
    }

    /// Whether the side to move may play here this turn.
    pub fn is_legal(&self) -> bool {
        self.legal
    }

    pub fn set_legal(&mut self, legal: bool) {
        self.legal = legal;
    }

    /// Place a piece. There is no way back to empty.
    pub fn set_occupancy(&mut self, color: Color) {
        self.occupancy = Some(color);
    }

    /// Swap the colour of the piece on this cell.
    ///
    /// # Errors
    /// `InvalidArgument` if the cell is empty.
    pub fn flip(&mut self) -> Result<()> {
        match self.occupancy {
            Some(color) => {
                self.occupancy = Some(color.opponent());
                Ok(())
            }
            None => Err(ReversiError::invalid_argument("cannot flip an empty cell")),
        }
    }

    /// Ray-casting point-in-polygon test over the vertex list.
    pub fn is_inside(&self, point: &Position) -> bool {
        let crossings = (0..self.sides)
            .filter(|&i| {
                let start = &self.vertices[i];
                let end = &self.vertices[(i + 1) % self.sides];
                point.right_line_crosses_segment(start, end)
            })
            .count();
        crossings % 2 == 1
    }

    /// Distance between the centres of two cells sharing an edge.
    pub fn center_to_center_distance(&self) -> f64 {
        2.0 * self.radius * (PI / self.sides as f64).cos()
    }

    /// Centre of the cell across edge `direction`.
    ///
    /// Edge `d` lies between vertices `d` and `d + 1`. This is pure geometry:
    /// the returned point may well be off the board.
    ///
    /// # Errors
    /// `InvalidArgument` if `direction` is not in `0..sides`.
    pub fn adjacent_center(&self, direction: usize) -> Result<Position> {
        if direction >= self.sides {
            return Err(ReversiError::invalid_argument(format!(
                "direction must be in 0..{}, got {direction}",
                self.sides
            )));
        }
        let sides = self.sides as f64;
        let angle = self.orientation + PI / sides + direction as f64 * TAU / sides;
        let offset = Position::polar(self.center_to_center_distance(), angle)?;
        Ok(self.center.plus(&offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HEX_ORIENTATION, SQUARE_ORIENTATION};

    fn hex_at_origin() -> Cell {
        Cell::new(Position::ORIGIN, 10.0, 6, HEX_ORIENTATION).unwrap()
    }

    #[test]
    fn test_vertices_on_circle() {
        let cell = hex_at_origin();
        assert_eq!(cell.vertices().len(), 6);
        for v in cell.vertices() {
            assert!((v.magnitude() - 10.0).abs() < 1e-9);
        }
        assert_eq!(cell.vertices()[0], Position::cartesian(0.0, 10.0));
    }

    #[test]
    fn test_is_inside() {
        let cell = hex_at_origin();
        assert!(cell.is_inside(&Position::ORIGIN));
        assert!(cell.is_inside(&Position::cartesian(8.0, 0.0)));
        assert!(!cell.is_inside(&Position::cartesian(9.0, 0.0)));
        assert!(!cell.is_inside(&Position::cartesian(0.0, 11.0)));
        assert!(!cell.is_inside(&Position::cartesian(-50.0, 3.0)));

        let square = Cell::new(Position::cartesian(5.0, 5.0), 2f64.sqrt(), 4, SQUARE_ORIENTATION)
            .unwrap();
        assert!(square.is_inside(&Position::cartesian(5.9, 4.1)));
        assert!(!square.is_inside(&Position::cartesian(6.1, 5.0)));
    }

    #[test]
    fn test_adjacent_center_distance_and_return() {
        let cell = hex_at_origin();
        for d in 0..6 {
            let next = cell.adjacent_center(d).unwrap();
            assert!((next.magnitude() - cell.center_to_center_distance()).abs() < 1e-9);
            assert!(!cell.is_inside(&next));

            let neighbour = Cell::new(next, 10.0, 6, HEX_ORIENTATION).unwrap();
            assert_eq!(neighbour.adjacent_center((d + 3) % 6).unwrap(), Position::ORIGIN);
        }
    }

    #[test]
    fn test_square_directions() {
        let cell = Cell::new(Position::ORIGIN, 2f64.sqrt(), 4, SQUARE_ORIENTATION).unwrap();
        assert_eq!(cell.adjacent_center(0).unwrap(), Position::cartesian(0.0, 2.0));
        assert_eq!(cell.adjacent_center(1).unwrap(), Position::cartesian(-2.0, 0.0));
        assert_eq!(cell.adjacent_center(2).unwrap(), Position::cartesian(0.0, -2.0));
        assert_eq!(cell.adjacent_center(3).unwrap(), Position::cartesian(2.0, 0.0));
    }

    #[test]
    fn test_direction_out_of_range() {
        let cell = hex_at_origin();
        assert!(matches!(
            cell.adjacent_center(6),
            Err(ReversiError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_flip() {
        let mut cell = hex_at_origin();
        assert!(cell.flip().is_err());
        cell.set_occupancy(Color::Black);
        cell.flip().unwrap();
        assert_eq!(cell.occupancy(), Some(Color::White));
        cell.flip().unwrap();
        assert_eq!(cell.occupancy(), Some(Color::Black));
    }

    #[test]
    fn test_invalid_geometry() {
        assert!(Cell::new(Position::ORIGIN, 0.0, 6, 0.0).is_err());
        assert!(Cell::new(Position::ORIGIN, -1.0, 6, 0.0).is_err());
        assert!(Cell::new(Position::ORIGIN, 1.0, 2, 0.0).is_err());
        assert!(Cell::new(Position::ORIGIN, 1.0, 4, f64::INFINITY).is_err());
    }
}
