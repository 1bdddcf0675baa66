//! Dense grid storage and its row-major coordinate layout
//!
//! `Layout` is the only place stride arithmetic happens: every coordinate
//! to flat-index conversion in the crate goes through it, bounds-checked.
//! `Grid` pairs a layout with a flat backing vector; equality compares
//! shape and contents.

use crate::spatial::direction;

/// Row-major index layout over a fixed `D`-dimensional extent
///
/// The last coordinate varies fastest. Extents are fixed at construction;
/// there is no resizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout<const D: usize> {
    extents: [usize; D],
    strides: [usize; D],
    len: usize,
}

impl<const D: usize> Layout<D> {
    /// Build a layout for the given extents
    pub fn new(extents: [usize; D]) -> Self {
        let mut strides = [1usize; D];
        let mut len = 1usize;
        for (stride, &extent) in strides.iter_mut().zip(extents.iter()).rev() {
            *stride = len;
            len *= extent;
        }
        Self {
            extents,
            strides,
            len,
        }
    }

    /// Total number of cells
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if the layout covers no cells
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Extents along each axis
    pub const fn extents(&self) -> [usize; D] {
        self.extents
    }

    /// Flat index of a coordinate tuple, `None` when out of range
    pub fn index_of(&self, coords: [usize; D]) -> Option<usize> {
        let mut index = 0;
        for ((&coord, &extent), &stride) in coords
            .iter()
            .zip(self.extents.iter())
            .zip(self.strides.iter())
        {
            if coord >= extent {
                return None;
            }
            index += coord * stride;
        }
        Some(index)
    }

    /// Coordinate tuple of a flat index
    pub fn coords_of(&self, index: usize) -> [usize; D] {
        debug_assert!(index < self.len, "cell index {index} out of range");
        let mut coords = [0usize; D];
        let mut rest = index;
        for (coord, &stride) in coords.iter_mut().zip(self.strides.iter()) {
            *coord = rest / stride;
            rest %= stride;
        }
        coords
    }

    /// Flat index of the cell one step away along `dir`
    ///
    /// Wraps modulo the axis extent when `periodic`; otherwise returns
    /// `None` when the step would leave the grid.
    pub fn neighbor(&self, index: usize, dir: usize, periodic: bool) -> Option<usize> {
        let mut coords = self.coords_of(index);
        let axis = direction::axis::<D>(dir);
        let extent = self.extents.get(axis).copied()?;
        let coord = coords.get_mut(axis)?;
        if periodic {
            *coord = if direction::is_negative::<D>(dir) {
                (*coord + extent - 1) % extent
            } else {
                (*coord + 1) % extent
            };
        } else if direction::is_negative::<D>(dir) {
            *coord = coord.checked_sub(1)?;
        } else {
            let next = *coord + 1;
            if next >= extent {
                return None;
            }
            *coord = next;
        }
        self.index_of(coords)
    }
}

/// Dense fixed-size storage addressed by `D` integer coordinates
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T, const D: usize> {
    layout: Layout<D>,
    data: Vec<T>,
}

impl<T, const D: usize> Grid<T, D> {
    /// Allocate a grid holding `fill` in every cell
    pub fn new(extents: [usize; D], fill: T) -> Self
    where
        T: Clone,
    {
        let layout = Layout::new(extents);
        let data = vec![fill; layout.len()];
        Self { layout, data }
    }

    /// Build a grid by evaluating `f` at every coordinate tuple
    pub fn from_fn(extents: [usize; D], mut f: impl FnMut([usize; D]) -> T) -> Self {
        let layout = Layout::new(extents);
        let data = (0..layout.len()).map(|i| f(layout.coords_of(i))).collect();
        Self { layout, data }
    }

    /// The grid's index layout
    pub const fn layout(&self) -> &Layout<D> {
        &self.layout
    }

    /// Extents along each axis
    pub const fn extents(&self) -> [usize; D] {
        self.layout.extents()
    }

    /// Cell value at a coordinate tuple
    pub fn get(&self, coords: [usize; D]) -> Option<&T> {
        self.data.get(self.layout.index_of(coords)?)
    }

    /// Mutable cell value at a coordinate tuple
    pub fn get_mut(&mut self, coords: [usize; D]) -> Option<&mut T> {
        let index = self.layout.index_of(coords)?;
        self.data.get_mut(index)
    }

    /// Cell values in flat row-major order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Clone> Grid<T, 2> {
    /// Quarter-turn rotation of the plane
    ///
    /// Used when expanding oriented pattern variants before solving; the
    /// solver itself never rotates.
    #[must_use]
    pub fn rotated90(&self) -> Self {
        let [rows, cols] = self.extents();
        let layout = Layout::new([cols, rows]);
        let mut data = Vec::with_capacity(layout.len());
        for index in 0..layout.len() {
            let [r, c] = layout.coords_of(index);
            if let Some(value) = self.get([rows - 1 - c, r]) {
                data.push(value.clone());
            }
        }
        Self { layout, data }
    }
}

impl<T: Clone> Grid<T, 3> {
    /// Quarter-turn rotation about the first axis
    ///
    /// Each layer rotates in its own plane, keeping the layer axis fixed.
    #[must_use]
    pub fn rotated90(&self) -> Self {
        let [layers, rows, cols] = self.extents();
        let layout = Layout::new([layers, cols, rows]);
        let mut data = Vec::with_capacity(layout.len());
        for index in 0..layout.len() {
            let [l, r, c] = layout.coords_of(index);
            if let Some(value) = self.get([l, rows - 1 - c, r]) {
                data.push(value.clone());
            }
        }
        Self { layout, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::direction;

    #[test]
    fn test_index_and_coords_round_trip() {
        let layout = Layout::new([3, 4, 5]);
        assert_eq!(layout.len(), 60);
        for index in 0..layout.len() {
            let coords = layout.coords_of(index);
            assert_eq!(layout.index_of(coords), Some(index));
        }
    }

    #[test]
    fn test_last_coordinate_varies_fastest() {
        let layout = Layout::new([2, 3]);
        assert_eq!(layout.index_of([0, 0]), Some(0));
        assert_eq!(layout.index_of([0, 1]), Some(1));
        assert_eq!(layout.index_of([1, 0]), Some(3));
    }

    #[test]
    fn test_out_of_range_coordinates_are_rejected() {
        let layout = Layout::new([2, 2]);
        assert_eq!(layout.index_of([2, 0]), None);
        assert_eq!(layout.index_of([0, 2]), None);
    }

    #[test]
    fn test_non_periodic_neighbors_stop_at_the_boundary() {
        let layout = Layout::new([3, 3]);
        let corner = layout.index_of([0, 0]).unwrap_or(0);
        let mut reachable = 0;
        for dir in 0..direction::count::<2>() {
            if let Some(neighbor) = layout.neighbor(corner, dir, false) {
                let coords = layout.coords_of(neighbor);
                assert!(coords.iter().all(|&c| c < 3));
                reachable += 1;
            }
        }
        assert_eq!(reachable, 2);
    }

    #[test]
    fn test_periodic_neighbors_wrap() {
        let layout = Layout::new([3, 3]);
        let corner = layout.index_of([0, 0]).unwrap_or(0);
        for dir in 0..direction::count::<2>() {
            assert!(layout.neighbor(corner, dir, true).is_some());
        }
        // stepping negatively along the first axis lands on the far row
        assert_eq!(layout.neighbor(corner, 0, true), layout.index_of([2, 0]));
    }

    #[test]
    fn test_single_cell_periodic_grid_is_its_own_neighbor() {
        let layout = Layout::new([1, 1]);
        for dir in 0..direction::count::<2>() {
            assert_eq!(layout.neighbor(0, dir, true), Some(0));
            assert_eq!(layout.neighbor(0, dir, false), None);
        }
    }

    #[test]
    fn test_rotation_2d_moves_corners() {
        let grid = Grid::from_fn([2, 3], |[r, c]| r * 3 + c);
        let rotated = grid.rotated90();
        assert_eq!(rotated.extents(), [3, 2]);
        // top-left of the rotated grid was the bottom-left of the original
        assert_eq!(rotated.get([0, 0]), Some(&3));
        assert_eq!(rotated.get([0, 1]), Some(&0));
        assert_eq!(rotated.get([2, 1]), Some(&2));
    }

    #[test]
    fn test_four_rotations_restore_a_square_grid() {
        let grid = Grid::from_fn([3, 3], |[r, c]| r * 3 + c);
        let spun = grid.rotated90().rotated90().rotated90().rotated90();
        assert_eq!(spun, grid);
    }

    #[test]
    fn test_rotation_3d_keeps_the_layer_axis() {
        let grid = Grid::from_fn([2, 2, 3], |[l, r, c]| l * 100 + r * 10 + c);
        let rotated = grid.rotated90();
        assert_eq!(rotated.extents(), [2, 3, 2]);
        assert_eq!(rotated.get([1, 0, 0]), Some(&110));
        assert_eq!(rotated.get([0, 0, 1]), Some(&0));
    }

    #[test]
    fn test_equality_compares_shape_and_contents() {
        let a = Grid::new([2, 2], 1);
        let b = Grid::new([2, 2], 1);
        let c = Grid::new([4, 1], 1);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
