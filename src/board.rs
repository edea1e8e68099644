//! Polygonal boards and the shared legality / capture walk.
//!
//! A [`Board`] is a set of [`Cell`]s laid out ring by ring around the origin.
//! Each topology only decides three things: how many sides a cell has, how a
//! ring is walked when the board is built, and whether diagonal lines (two
//! consecutive edge directions composed) take part in captures. Everything
//! else, from neighbour lookup to flipping, is written once against
//! [`Line`]s and the neighbour table.
//!
//! Cells are addressed either by [`CellId`] (index into the flat cell list,
//! in layout order) or by `(layer, index)`, where a layer is one ring.

use std::collections::BTreeMap;
use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use crate::cell::{Cell, Color};
use crate::constants::{
    HEX_ORIENTATION, HEX_OUTWARD_DIRECTION, SQUARE_ORIENTATION, SQUARE_OUTWARD_DIRECTION,
};
use crate::error::{ReversiError, Result};
use crate::position::Position;

/// Index of a cell in [`Board::cells`].
pub type CellId = usize;

/// The tilings the engine knows how to build.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Hexagonal cells in concentric hexagonal rings around one seed cell.
    Hex,
    /// Square cells in concentric square rings around a 2x2 seed block.
    Square,
}

impl Topology {
    pub fn sides(self) -> usize {
        match self {
            Topology::Hex => 6,
            Topology::Square => 4,
        }
    }

    /// Whether capture lines also run along vertex-sharing diagonals.
    /// Hex cells have none: every neighbour already shares an edge.
    pub fn has_diagonals(self) -> bool {
        matches!(self, Topology::Square)
    }

    pub fn default_orientation(self) -> f64 {
        match self {
            Topology::Hex => HEX_ORIENTATION,
            Topology::Square => SQUARE_ORIENTATION,
        }
    }

    /// Number of cells in ring `ring`.
    pub fn ring_len(self, ring: usize) -> usize {
        match self {
            Topology::Hex if ring == 0 => 1,
            Topology::Hex => 6 * ring,
            Topology::Square => 4 + 8 * ring,
        }
    }
}

impl FromStr for Topology {
    type Err = ReversiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hex" | "hexa" | "hexagon" => Ok(Topology::Hex),
            "square" => Ok(Topology::Square),
            other => Err(ReversiError::invalid_argument(format!(
                "board must be 'hex' or 'square', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Hex => write!(f, "hex"),
            Topology::Square => write!(f, "square"),
        }
    }
}

/// A straight line of cells leaving a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Line {
    /// Repeatedly cross edge `d`.
    Edge(usize),
    /// Repeatedly cross edge `d` then edge `d + 1`.
    Diagonal(usize),
}

/// A complete board: cells, ring layout and resolved adjacency.
///
/// `Clone` is a full deep copy. Cells own their geometry and the neighbour
/// table holds plain indices, so a clone shares nothing with the original.
#[derive(Debug, Clone)]
pub struct Board {
    topology: Topology,
    size: usize,
    radius: f64,
    orientation: f64,
    cells: Vec<Cell>,
    /// Layer `i` spans `layer_starts[i]..layer_starts[i + 1]`.
    layer_starts: Vec<usize>,
    /// `neighbors[id][d]` is the cell across edge `d` of `id`, if any.
    neighbors: Vec<Vec<Option<CellId>>>,
}

impl Board {
    /// Build a board of `size` rings with the topology's default orientation.
    pub fn new(topology: Topology, size: usize, radius: f64) -> Result<Self> {
        Self::with_orientation(topology, size, radius, topology.default_orientation())
    }

    /// Build a board of `size` rings of cells with centre-to-vertex `radius`.
    ///
    /// # Errors
    /// `InvalidArgument` if `size` is zero, or the radius or orientation is
    /// unusable.
    pub fn with_orientation(
        topology: Topology,
        size: usize,
        radius: f64,
        orientation: f64,
    ) -> Result<Self> {
        if size == 0 {
            return Err(ReversiError::invalid_argument(
                "board size must be at least 1 ring",
            ));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ReversiError::invalid_argument(format!(
                "cell radius must be positive, got {radius}"
            )));
        }

        let (cells, layer_starts) = match topology {
            Topology::Hex => hex_layout(size, radius, orientation)?,
            Topology::Square => square_layout(size, radius, orientation)?,
        };

        let sides = topology.sides();
        let neighbors = cells
            .iter()
            .map(|cell| {
                (0..sides)
                    .map(|d| Ok(locate(&cells, &cell.adjacent_center(d)?)))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Board {
            topology,
            size,
            radius,
            orientation,
            cells,
            layer_starts,
            neighbors,
        })
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Number of rings.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    pub fn sides(&self) -> usize {
        self.topology.sides()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells in layout order; a cell's position here is its [`CellId`].
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, id: CellId) -> Result<&Cell> {
        self.cells.get(id).ok_or_else(|| {
            ReversiError::invalid_argument(format!(
                "cell id {id} out of range (board has {} cells)",
                self.cells.len()
            ))
        })
    }

    pub fn layer_count(&self) -> usize {
        self.layer_starts.len() - 1
    }

    pub fn layer_len(&self, layer: usize) -> Result<usize> {
        if layer >= self.layer_count() {
            return Err(ReversiError::invalid_argument(format!(
                "layer must be in 0..{}, got {layer}",
                self.layer_count()
            )));
        }
        Ok(self.layer_starts[layer + 1] - self.layer_starts[layer])
    }

    /// Translate `(layer, index)` into a [`CellId`].
    pub fn cell_id(&self, layer: usize, index: usize) -> Result<CellId> {
        let len = self.layer_len(layer)?;
        if index >= len {
            return Err(ReversiError::invalid_argument(format!(
                "index must be in 0..{len} for layer {layer}, got {index}"
            )));
        }
        Ok(self.layer_starts[layer] + index)
    }

    pub fn cell_at(&self, layer: usize, index: usize) -> Result<&Cell> {
        Ok(&self.cells[self.cell_id(layer, index)?])
    }

    /// Inverse of [`Board::cell_id`].
    pub fn coordinates(&self, id: CellId) -> Result<(usize, usize)> {
        self.cell(id)?;
        // layer_starts is sorted and starts at 0, so this always finds a layer
        let layer = self.layer_starts.partition_point(|&start| start <= id) - 1;
        Ok((layer, id - self.layer_starts[layer]))
    }

    /// Hit test: the cell whose polygon contains `point`.
    pub fn point_to_cell(&self, point: &Position) -> Option<CellId> {
        locate(&self.cells, point)
    }

    /// The cell across edge `direction` of `id`.
    pub fn neighbor(&self, id: CellId, direction: usize) -> Result<Option<CellId>> {
        self.cell(id)?;
        if direction >= self.sides() {
            return Err(ReversiError::invalid_argument(format!(
                "direction must be in 0..{}, got {direction}",
                self.sides()
            )));
        }
        Ok(self.neighbors[id][direction])
    }

    /// Every line the capture walk follows, in evaluation order: edges
    /// `0..sides`, then (if the topology has them) diagonals `0..sides`.
    pub fn lines(&self) -> Vec<Line> {
        let sides = self.sides();
        let edges = (0..sides).map(Line::Edge);
        if self.topology.has_diagonals() {
            edges.chain((0..sides).map(Line::Diagonal)).collect()
        } else {
            edges.collect()
        }
    }

    /// One step along `line`. `id` must be valid.
    fn step(&self, id: CellId, line: Line) -> Option<CellId> {
        match line {
            Line::Edge(d) => self.neighbors[id][d],
            Line::Diagonal(d) => {
                let via = self.neighbors[id][d]?;
                self.neighbors[via][(d + 1) % self.sides()]
            }
        }
    }

    /// Opponent cells that `color` would capture along `line` when playing
    /// at `from`. Empty unless the run is closed by a `color` piece before
    /// an empty cell or the board edge.
    fn capture_run(&self, from: CellId, line: Line, color: Color) -> Vec<CellId> {
        let mut run = Vec::new();
        let mut next = self.step(from, line);
        while let Some(id) = next {
            match self.cells[id].occupancy() {
                Some(c) if c == color => return run,
                Some(_) => run.push(id),
                None => break,
            }
            next = self.step(id, line);
        }
        Vec::new()
    }

    /// Whether `color` may play on `id`: the cell is empty and at least one
    /// line from it captures.
    pub fn is_legal_move(&self, id: CellId, color: Color) -> Result<bool> {
        if !self.cell(id)?.is_empty() {
            return Ok(false);
        }
        Ok(self
            .lines()
            .into_iter()
            .any(|line| !self.capture_run(id, line, color).is_empty()))
    }

    /// Whether `color` has any legal move, computed from scratch.
    pub fn has_legal_move(&self, color: Color) -> bool {
        (0..self.cells.len()).any(|id| self.is_legal_move(id, color).unwrap_or(false))
    }

    /// Recompute every cell's legality flag for `turn`. `None` (no side to
    /// move) clears all flags.
    pub fn refresh_legal_moves(&mut self, turn: Option<Color>) {
        let flags: Vec<bool> = (0..self.cells.len())
            .map(|id| turn.is_some_and(|color| self.is_legal_move(id, color).unwrap_or(false)))
            .collect();
        for (cell, legal) in self.cells.iter_mut().zip(flags) {
            cell.set_legal(legal);
        }
    }

    /// Cells currently flagged legal, in layout order.
    pub fn legal_cells(&self) -> Vec<CellId> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_legal())
            .map(|(id, _)| id)
            .collect()
    }

    /// Place a piece without capturing. Used to seed starting positions.
    pub fn set_occupancy(&mut self, id: CellId, color: Color) -> Result<()> {
        self.cell(id)?;
        self.cells[id].set_occupancy(color);
        Ok(())
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.occupancy() == Some(color))
            .count()
    }

    /// Play `color` on `id` and flip every captured run.
    ///
    /// Lines are processed in [`Board::lines`] order and each one commits
    /// its own run independently. Legality is not checked here: a move that
    /// captures nothing still places its piece.
    ///
    /// Returns the number of pieces flipped.
    ///
    /// # Errors
    /// - `InvalidArgument` if `id` is out of range.
    /// - `IllegalMove` if the cell is occupied.
    pub fn one_move(&mut self, id: CellId, color: Color) -> Result<usize> {
        if !self.cell(id)?.is_empty() {
            return Err(ReversiError::illegal_move(format!("cell {id} is occupied")));
        }
        self.cells[id].set_occupancy(color);

        let mut flipped = 0;
        for line in self.lines() {
            let run = self.capture_run(id, line, color);
            for &captured in &run {
                self.cells[captured].flip()?;
            }
            flipped += run.len();
        }
        Ok(flipped)
    }

    /// How many pieces the opponent of `color` loses if `color` plays `id`.
    /// The board itself is never touched; the move is tried on a clone.
    ///
    /// # Errors
    /// `IllegalMove` if the move is not legal for `color`.
    pub fn move_score(&self, id: CellId, color: Color) -> Result<usize> {
        if !self.is_legal_move(id, color)? {
            return Err(ReversiError::illegal_move(format!(
                "cell {id} is not a legal move for {color}"
            )));
        }
        let opponent = color.opponent();
        let before = self.count(opponent);
        let mut trial = self.clone();
        trial.one_move(id, color)?;
        Ok(before - trial.count(opponent))
    }

    /// Whether walking any straight line from `a` reaches `b`.
    pub fn on_same_line(&self, a: CellId, b: CellId) -> Result<bool> {
        self.cell(a)?;
        self.cell(b)?;
        for line in self.lines() {
            let mut next = self.step(a, line);
            while let Some(id) = next {
                if id == b {
                    return Ok(true);
                }
                next = self.step(id, line);
            }
        }
        Ok(false)
    }

    /// Number of edge directions of `id` with no cell on the other side.
    pub fn missing_neighbors(&self, id: CellId) -> Result<usize> {
        self.cell(id)?;
        Ok(self.neighbors[id].iter().filter(|n| n.is_none()).count())
    }

    /// A corner of the whole tiling: exactly half of the cell's neighbours
    /// are off the board.
    pub fn is_corner(&self, id: CellId) -> Result<bool> {
        Ok(self.missing_neighbors(id)? == self.sides() / 2)
    }

    pub fn is_next_to_corner(&self, id: CellId) -> Result<bool> {
        self.cell(id)?;
        for &neighbor in self.neighbors[id].iter().flatten() {
            if self.is_corner(neighbor)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// First cell whose polygon contains `point`.
fn locate(cells: &[Cell], point: &Position) -> Option<CellId> {
    cells.iter().position(|cell| cell.is_inside(point))
}

/// Ring 0 is a single cell at the origin. Ring `i` starts one step outward
/// from the first cell of ring `i - 1` and walks counter-clockwise, turning
/// to the next direction every `i` cells.
fn hex_layout(size: usize, radius: f64, orientation: f64) -> Result<(Vec<Cell>, Vec<usize>)> {
    let sides = Topology::Hex.sides();
    let mut cells = vec![Cell::new(Position::ORIGIN, radius, sides, orientation)?];
    let mut layer_starts = vec![0, 1];

    for ring in 1..size {
        let ring_start = cells.len();
        let seed = cells[layer_starts[ring - 1]].adjacent_center(HEX_OUTWARD_DIRECTION)?;
        cells.push(Cell::new(seed, radius, sides, orientation)?);
        for j in 1..Topology::Hex.ring_len(ring) {
            let center = cells[ring_start + j - 1].adjacent_center((j - 1) / ring)?;
            cells.push(Cell::new(center, radius, sides, orientation)?);
        }
        layer_starts.push(cells.len());
    }
    Ok((cells, layer_starts))
}

/// Ring 0 is the 2x2 block around the origin. Ring `i` starts one step
/// outward from the last cell of ring `i - 1` and walks counter-clockwise,
/// turning every `2i + 1` cells.
fn square_layout(size: usize, radius: f64, orientation: f64) -> Result<(Vec<Cell>, Vec<usize>)> {
    let sides = Topology::Square.sides();
    let mut cells = (0..Topology::Square.ring_len(0))
        .map(|j| {
            let center = Position::polar(radius, orientation + j as f64 * FRAC_PI_2)?;
            Cell::new(center, radius, sides, orientation)
        })
        .collect::<Result<Vec<_>>>()?;
    let mut layer_starts = vec![0, cells.len()];

    for ring in 1..size {
        let ring_start = cells.len();
        let seed = cells[ring_start - 1].adjacent_center(SQUARE_OUTWARD_DIRECTION)?;
        cells.push(Cell::new(seed, radius, sides, orientation)?);
        for j in 1..Topology::Square.ring_len(ring) {
            let center = cells[ring_start + j - 1].adjacent_center(j / (2 * ring + 1))?;
            cells.push(Cell::new(center, radius, sides, orientation)?);
        }
        layer_starts.push(cells.len());
    }
    Ok((cells, layer_starts))
}

/// Text rendering: one character per cell placed at its centre.
/// `X` black, `O` white, `*` legal for the side to move, `.` empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let half_step = self.cells[0].center_to_center_distance() / 2.0;

        // Rows keyed by rounded height, highest first.
        let mut rows: BTreeMap<i64, Vec<(i64, char)>> = BTreeMap::new();
        for cell in &self.cells {
            let center = cell.center();
            let row = -(center.y() * 1000.0).round() as i64;
            let col = (center.x() / half_step).round() as i64;
            let ch = match cell.occupancy() {
                Some(Color::Black) => 'X',
                Some(Color::White) => 'O',
                None if cell.is_legal() => '*',
                None => '.',
            };
            rows.entry(row).or_default().push((col, ch));
        }

        let min_col = rows
            .values()
            .flatten()
            .map(|&(col, _)| col)
            .min()
            .unwrap_or(0);
        for row in rows.values() {
            let width = row.iter().map(|&(col, _)| col - min_col).max().unwrap_or(0) + 1;
            let mut line = vec![' '; width as usize];
            for &(col, ch) in row {
                line[(col - min_col) as usize] = ch;
            }
            writeln!(f, "{}", line.into_iter().collect::<String>().trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(size: usize) -> Board {
        Board::new(Topology::Hex, size, 10.0).unwrap()
    }

    fn square(size: usize) -> Board {
        Board::new(Topology::Square, size, 2f64.sqrt() / 2.0).unwrap()
    }

    /// Id of the square cell centred at `(x, y)`, in units of one cell side.
    fn sq(board: &Board, x: f64, y: f64) -> CellId {
        board.point_to_cell(&Position::cartesian(x, y)).unwrap()
    }

    #[test]
    fn test_ring_sizes() {
        let board = hex(3);
        assert_eq!(board.layer_count(), 3);
        assert_eq!(board.layer_len(0).unwrap(), 1);
        assert_eq!(board.layer_len(1).unwrap(), 6);
        assert_eq!(board.layer_len(2).unwrap(), 12);
        assert_eq!(board.cell_count(), 19);

        let board = square(3);
        assert_eq!(board.layer_len(0).unwrap(), 4);
        assert_eq!(board.layer_len(1).unwrap(), 12);
        assert_eq!(board.layer_len(2).unwrap(), 20);
        assert_eq!(board.cell_count(), 36);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(Board::new(Topology::Hex, 0, 10.0).is_err());
        assert!(Board::new(Topology::Square, 2, 0.0).is_err());
    }

    #[test]
    fn test_cells_do_not_overlap() {
        for board in [hex(4), square(4)] {
            let ccd = board.cells()[0].center_to_center_distance();
            for (a, ca) in board.cells().iter().enumerate() {
                for cb in &board.cells()[a + 1..] {
                    assert!(ca.center().distance_to(&cb.center()) > ccd * 0.99);
                }
            }
        }
    }

    #[test]
    fn test_hex_layout_geometry() {
        let board = hex(3);
        let ccd = board.cells()[0].center_to_center_distance();
        // Ring 1 index k sits at angle 60k degrees.
        for k in 0..6 {
            let cell = board.cell_at(1, k).unwrap();
            let angle = (k as f64) * std::f64::consts::PI / 3.0;
            assert_eq!(cell.center(), Position::polar(ccd, angle).unwrap());
        }
        assert_eq!(board.cell_at(2, 0).unwrap().center(), Position::cartesian(2.0 * ccd, 0.0));
    }

    #[test]
    fn test_square_layout_geometry() {
        let board = square(2);
        assert_eq!(board.cell_at(0, 0).unwrap().center(), Position::cartesian(0.5, 0.5));
        assert_eq!(board.cell_at(0, 3).unwrap().center(), Position::cartesian(0.5, -0.5));
        assert_eq!(board.cell_at(1, 0).unwrap().center(), Position::cartesian(1.5, -0.5));
        assert_eq!(board.cell_at(1, 11).unwrap().center(), Position::cartesian(1.5, -1.5));
    }

    #[test]
    fn test_coordinates_roundtrip() {
        let board = hex(3);
        for id in 0..board.cell_count() {
            let (layer, index) = board.coordinates(id).unwrap();
            assert_eq!(board.cell_id(layer, index).unwrap(), id);
        }
        assert!(board.cell_id(3, 0).is_err());
        assert!(board.cell_id(1, 6).is_err());
        assert!(board.coordinates(19).is_err());
    }

    #[test]
    fn test_neighbor_counts() {
        let board = hex(3);
        assert_eq!(board.missing_neighbors(0).unwrap(), 0);
        let corner = board.cell_id(2, 0).unwrap();
        let edge = board.cell_id(2, 1).unwrap();
        assert_eq!(board.missing_neighbors(corner).unwrap(), 3);
        assert_eq!(board.missing_neighbors(edge).unwrap(), 2);
        assert!(board.is_corner(corner).unwrap());
        assert!(!board.is_corner(edge).unwrap());
        assert!(board.is_next_to_corner(edge).unwrap());
        assert!(!board.is_next_to_corner(0).unwrap());
        assert!(board.neighbor(0, 6).is_err());

        let board = square(2);
        assert!(board.is_corner(sq(&board, 1.5, 1.5)).unwrap());
        assert!(!board.is_corner(sq(&board, 0.5, 1.5)).unwrap());
        assert!(board.is_next_to_corner(sq(&board, 0.5, 1.5)).unwrap());
        assert!(!board.is_next_to_corner(sq(&board, 0.5, 0.5)).unwrap());
    }

    #[test]
    fn test_adjacency_symmetric() {
        for board in [hex(4), square(3)] {
            for a in 0..board.cell_count() {
                for d in 0..board.sides() {
                    if let Some(b) = board.neighbor(a, d).unwrap() {
                        let back = (0..board.sides())
                            .any(|e| board.neighbor(b, e).unwrap() == Some(a));
                        assert!(back, "{a} -> {b} has no way back");
                    }
                }
            }
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = hex(3);
        board.set_occupancy(1, Color::Black).unwrap();
        let mut copy = board.clone();
        copy.set_occupancy(0, Color::White).unwrap();
        copy.refresh_legal_moves(Some(Color::White));
        copy.one_move(3, Color::White).unwrap();

        assert!(board.cells()[0].is_empty());
        assert!(board.cells()[3].is_empty());
        assert_eq!(board.count(Color::Black), 1);
        assert!(board.legal_cells().is_empty());
    }

    #[test]
    fn test_capture_run_stops_at_own_piece() {
        let board_size = 4;
        let mut board = hex(board_size);
        let ccd = board.cells()[0].center_to_center_distance();
        let at = |n: f64| Position::cartesian(n * ccd, 0.0);
        let c0 = board.point_to_cell(&at(0.0)).unwrap();
        let c1 = board.point_to_cell(&at(1.0)).unwrap();
        let c2 = board.point_to_cell(&at(2.0)).unwrap();
        let c3 = board.point_to_cell(&at(3.0)).unwrap();
        board.set_occupancy(c0, Color::Black).unwrap();
        board.set_occupancy(c1, Color::White).unwrap();
        board.set_occupancy(c2, Color::White).unwrap();

        assert!(board.is_legal_move(c3, Color::Black).unwrap());
        assert!(!board.is_legal_move(c3, Color::White).unwrap());
        assert_eq!(board.move_score(c3, Color::Black).unwrap(), 2);

        let flipped = board.one_move(c3, Color::Black).unwrap();
        assert_eq!(flipped, 2);
        assert_eq!(board.count(Color::Black), 4);
        assert_eq!(board.count(Color::White), 0);
    }

    #[test]
    fn test_open_run_is_not_captured() {
        let mut board = hex(4);
        let ccd = board.cells()[0].center_to_center_distance();
        let c1 = board.point_to_cell(&Position::cartesian(ccd, 0.0)).unwrap();
        let c2 = board.point_to_cell(&Position::cartesian(2.0 * ccd, 0.0)).unwrap();
        board.set_occupancy(c1, Color::White).unwrap();

        assert!(!board.is_legal_move(0, Color::Black).unwrap());
        assert!(!board.is_legal_move(c2, Color::Black).unwrap());
        assert!(matches!(
            board.move_score(0, Color::Black),
            Err(ReversiError::IllegalMove { .. })
        ));
        // Placing anyway flips nothing.
        assert_eq!(board.one_move(0, Color::Black).unwrap(), 0);
        assert_eq!(board.cells()[c1].occupancy(), Some(Color::White));
    }

    #[test]
    fn test_one_move_on_occupied_cell() {
        let mut board = square(2);
        board.set_occupancy(0, Color::Black).unwrap();
        assert!(matches!(
            board.one_move(0, Color::White),
            Err(ReversiError::IllegalMove { .. })
        ));
        assert_eq!(board.cells()[0].occupancy(), Some(Color::Black));
        assert!(board.one_move(99, Color::White).is_err());
    }

    #[test]
    fn test_square_diagonal_capture() {
        let mut board = square(2);
        let corner = sq(&board, 1.5, 1.5);
        let middle = sq(&board, 0.5, 0.5);
        let mover = sq(&board, -0.5, -0.5);
        board.set_occupancy(corner, Color::Black).unwrap();
        board.set_occupancy(middle, Color::White).unwrap();

        assert!(board.is_legal_move(mover, Color::Black).unwrap());
        assert_eq!(board.one_move(mover, Color::Black).unwrap(), 1);
        assert_eq!(board.cells()[middle].occupancy(), Some(Color::Black));
    }

    #[test]
    fn test_hex_has_no_diagonals() {
        assert_eq!(hex(2).lines().len(), 6);
        assert_eq!(square(2).lines().len(), 8);
    }

    #[test]
    fn test_multiple_directions_flip_together() {
        let mut board = square(2);
        for (x, y) in [(-1.5, 0.5), (1.5, -1.5), (0.5, 0.5)] {
            board.set_occupancy(sq(&board, x, y), Color::Black).unwrap();
        }
        for (x, y) in [(-1.5, -0.5), (-0.5, -1.5), (0.5, -1.5), (-0.5, -0.5)] {
            board.set_occupancy(sq(&board, x, y), Color::White).unwrap();
        }
        // Up captures one, right captures two, the up-right diagonal one.
        let mover = sq(&board, -1.5, -1.5);
        assert_eq!(board.one_move(mover, Color::Black).unwrap(), 4);
        assert_eq!(board.count(Color::White), 0);
        assert_eq!(board.count(Color::Black), 8);
    }

    #[test]
    fn test_on_same_line() {
        let board = square(2);
        let a = sq(&board, -1.5, -1.5);
        assert!(board.on_same_line(a, sq(&board, 1.5, 1.5)).unwrap());
        assert!(board.on_same_line(a, sq(&board, -1.5, 1.5)).unwrap());
        assert!(!board.on_same_line(a, sq(&board, 0.5, 1.5)).unwrap());

        let board = hex(3);
        let corner = board.cell_id(2, 0).unwrap();
        assert!(board.on_same_line(corner, 0).unwrap());
        assert!(!board.on_same_line(corner, board.cell_id(2, 5).unwrap()).unwrap());
    }

    #[test]
    fn test_point_to_cell() {
        let board = hex(2);
        assert_eq!(board.point_to_cell(&Position::ORIGIN), Some(0));
        assert_eq!(board.point_to_cell(&Position::cartesian(1000.0, 0.0)), None);
    }

    #[test]
    fn test_display() {
        let mut board = square(2);
        board.set_occupancy(sq(&board, 0.5, 0.5), Color::Black).unwrap();
        board.set_occupancy(sq(&board, -0.5, 0.5), Color::White).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], ". O X .");
        assert_eq!(lines[0], ". . . .");

        let text = hex(2).to_string();
        assert_eq!(text.lines().count(), 3);
        assert_eq!(text.lines().nth(1), Some(". . ."));
    }

    #[test]
    fn test_topology_from_str() {
        assert_eq!("hex".parse::<Topology>().unwrap(), Topology::Hex);
        assert_eq!("hexa".parse::<Topology>().unwrap(), Topology::Hex);
        assert_eq!("Square".parse::<Topology>().unwrap(), Topology::Square);
        assert!("triangle".parse::<Topology>().is_err());
    }
}
