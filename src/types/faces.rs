//! Per-face containers with named fields.
//!
//! A structured 3D block has six bounding faces. [`Faces`] stores one value
//! per face so boundary data can be addressed by name instead of by an
//! index convention.

use std::fmt;
use std::ops::{Index, IndexMut};

use super::axis::Axis3;

/// One of the six bounding faces of a structured block.
///
/// Order: west, east, south, north, bottom, top (low/high pairs along x, y, z).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    /// x = x_min
    West,
    /// x = x_max
    East,
    /// y = y_min
    South,
    /// y = y_max
    North,
    /// z = z_min
    Bottom,
    /// z = z_max
    Top,
}

impl Face {
    /// All faces in storage order.
    pub const ALL: [Face; 6] = [
        Face::West,
        Face::East,
        Face::South,
        Face::North,
        Face::Bottom,
        Face::Top,
    ];

    /// Axis normal to this face.
    pub const fn axis(self) -> Axis3 {
        match self {
            Face::West | Face::East => Axis3::X,
            Face::South | Face::North => Axis3::Y,
            Face::Bottom | Face::Top => Axis3::Z,
        }
    }

    /// Whether the face sits at the low end of its axis.
    pub const fn is_low(self) -> bool {
        matches!(self, Face::West | Face::South | Face::Bottom)
    }

    /// Face on the opposite side of the block.
    pub const fn opposite(self) -> Face {
        match self {
            Face::West => Face::East,
            Face::East => Face::West,
            Face::South => Face::North,
            Face::North => Face::South,
            Face::Bottom => Face::Top,
            Face::Top => Face::Bottom,
        }
    }

    /// Single-letter label (W, E, S, N, B, T).
    pub const fn label(self) -> &'static str {
        match self {
            Face::West => "W",
            Face::East => "E",
            Face::South => "S",
            Face::North => "N",
            Face::Bottom => "B",
            Face::Top => "T",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One value per bounding face.
///
/// # Example
///
/// ```
/// use tvd_transport::types::{Face, Faces};
///
/// let kinds = Faces::uniform("wall").with(Face::East, "outlet");
/// assert_eq!(kinds[Face::West], "wall");
/// assert_eq!(kinds[Face::East], "outlet");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faces<T> {
    /// West face (x = x_min)
    pub west: T,
    /// East face (x = x_max)
    pub east: T,
    /// South face (y = y_min)
    pub south: T,
    /// North face (y = y_max)
    pub north: T,
    /// Bottom face (z = z_min)
    pub bottom: T,
    /// Top face (z = z_max)
    pub top: T,
}

impl<T> Faces<T> {
    /// Create from explicit values in storage order.
    pub fn new(west: T, east: T, south: T, north: T, bottom: T, top: T) -> Self {
        Self {
            west,
            east,
            south,
            north,
            bottom,
            top,
        }
    }

    /// Same value on every face.
    pub fn uniform(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            west: value.clone(),
            east: value.clone(),
            south: value.clone(),
            north: value.clone(),
            bottom: value.clone(),
            top: value,
        }
    }

    /// Build each entry from its face.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Face) -> T,
    {
        Self {
            west: f(Face::West),
            east: f(Face::East),
            south: f(Face::South),
            north: f(Face::North),
            bottom: f(Face::Bottom),
            top: f(Face::Top),
        }
    }

    /// Replace the value on one face.
    pub fn with(mut self, face: Face, value: T) -> Self {
        self[face] = value;
        self
    }

    /// Map a function over all faces.
    pub fn map<U, F>(self, mut f: F) -> Faces<U>
    where
        F: FnMut(T) -> U,
    {
        Faces {
            west: f(self.west),
            east: f(self.east),
            south: f(self.south),
            north: f(self.north),
            bottom: f(self.bottom),
            top: f(self.top),
        }
    }

    /// Convert to array in storage order.
    pub fn to_array(self) -> [T; 6] {
        [
            self.west,
            self.east,
            self.south,
            self.north,
            self.bottom,
            self.top,
        ]
    }

    /// Iterate over `(face, value)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::ALL.into_iter().map(move |face| (face, &self[face]))
    }
}

impl<T> Index<Face> for Faces<T> {
    type Output = T;

    fn index(&self, face: Face) -> &T {
        match face {
            Face::West => &self.west,
            Face::East => &self.east,
            Face::South => &self.south,
            Face::North => &self.north,
            Face::Bottom => &self.bottom,
            Face::Top => &self.top,
        }
    }
}

impl<T> IndexMut<Face> for Faces<T> {
    fn index_mut(&mut self, face: Face) -> &mut T {
        match face {
            Face::West => &mut self.west,
            Face::East => &mut self.east,
            Face::South => &mut self.south,
            Face::North => &mut self.north,
            Face::Bottom => &mut self.bottom,
            Face::Top => &mut self.top,
        }
    }
}

impl<T: Default> Default for Faces<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T: fmt::Display> fmt::Display for Faces<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "W:{} E:{} S:{} N:{} B:{} T:{}",
            self.west, self.east, self.south, self.north, self.bottom, self.top
        )
    }
}

impl<T> From<[T; 6]> for Faces<T> {
    fn from([west, east, south, north, bottom, top]: [T; 6]) -> Self {
        Self::new(west, east, south, north, bottom, top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let faces = Faces::new(1, 2, 3, 4, 5, 6);
        assert_eq!(faces.west, 1);
        assert_eq!(faces.east, 2);
        assert_eq!(faces.south, 3);
        assert_eq!(faces.north, 4);
        assert_eq!(faces.bottom, 5);
        assert_eq!(faces.top, 6);
    }

    #[test]
    fn test_index_matches_fields() {
        let faces = Faces::new(1, 2, 3, 4, 5, 6);
        let by_index: Vec<_> = Face::ALL.iter().map(|&f| faces[f]).collect();
        assert_eq!(by_index, faces.to_array().to_vec());
    }

    #[test]
    fn test_map_and_with() {
        let faces = Faces::uniform(1).with(Face::Top, 10).map(|x| x * 2);
        assert_eq!(faces.west, 2);
        assert_eq!(faces.top, 20);
    }

    #[test]
    fn test_face_axes_and_opposites() {
        for face in Face::ALL {
            assert_eq!(face.opposite().opposite(), face);
            assert_eq!(face.opposite().axis(), face.axis());
            assert_ne!(face.is_low(), face.opposite().is_low());
        }
        assert_eq!(Face::South.axis(), Axis3::Y);
    }

    #[test]
    fn test_iter_order() {
        let faces: Faces<i32> = [1, 2, 3, 4, 5, 6].into();
        let labels: Vec<_> = faces.iter().map(|(f, _)| f.label()).collect();
        assert_eq!(labels, vec!["W", "E", "S", "N", "B", "T"]);
    }
}
