//! Grid axes and variable placements on the staggered grid.

use std::fmt;
use std::str::FromStr;

use super::faces::Face;
use crate::flux::AdvectionError;

/// Cell counts `(nx, ny, nz)` of a structured block.
pub type Cells = (usize, usize, usize);

/// Coordinate axis of the structured grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis3 {
    X,
    Y,
    Z,
}

impl Axis3 {
    /// All axes in storage order.
    pub const ALL: [Axis3; 3] = [Axis3::X, Axis3::Y, Axis3::Z];

    /// Array dimension index (x = 0, y = 1, z = 2).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis3::X => 0,
            Axis3::Y => 1,
            Axis3::Z => 2,
        }
    }

    /// The matching `ndarray` axis.
    #[inline]
    pub const fn nd(self) -> ndarray::Axis {
        ndarray::Axis(self.index())
    }

    /// Face at the low end of this axis (W, S or B).
    pub const fn low_face(self) -> Face {
        match self {
            Axis3::X => Face::West,
            Axis3::Y => Face::South,
            Axis3::Z => Face::Bottom,
        }
    }

    /// Face at the high end of this axis (E, N or T).
    pub const fn high_face(self) -> Face {
        match self {
            Axis3::X => Face::East,
            Axis3::Y => Face::North,
            Axis3::Z => Face::Top,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Axis3::X => "x",
            Axis3::Y => "y",
            Axis3::Z => "z",
        }
    }
}

impl fmt::Display for Axis3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a variable lives on the staggered grid.
///
/// Cell-centered variables sit at `Center`; the other three placements are
/// staggered onto the interior faces normal to one axis, so they have one
/// entry fewer along that axis than the cell count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Position {
    #[default]
    Center,
    X,
    Y,
    Z,
}

/// How an axis relates to the placement of a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisRole {
    /// Variable is cell-centered.
    Center,
    /// Variable is staggered along this very axis.
    Own,
    /// Variable is staggered along the contained axis, which differs from this one.
    Transverse(Axis3),
}

impl Position {
    /// Face placement normal to `axis`.
    pub const fn face(axis: Axis3) -> Self {
        match axis {
            Axis3::X => Position::X,
            Axis3::Y => Position::Y,
            Axis3::Z => Position::Z,
        }
    }

    /// Axis along which the variable is staggered, if any.
    pub const fn staggered_axis(self) -> Option<Axis3> {
        match self {
            Position::Center => None,
            Position::X => Some(Axis3::X),
            Position::Y => Some(Axis3::Y),
            Position::Z => Some(Axis3::Z),
        }
    }

    /// Role of `axis` for a variable at this position.
    pub fn role(self, axis: Axis3) -> AxisRole {
        match self.staggered_axis() {
            None => AxisRole::Center,
            Some(s) if s == axis => AxisRole::Own,
            Some(s) => AxisRole::Transverse(s),
        }
    }

    /// Array shape of a variable at this position on a block of `cells`.
    pub fn shape(self, cells: Cells) -> Cells {
        let (nx, ny, nz) = cells;
        match self {
            Position::Center => (nx, ny, nz),
            Position::X => (nx.saturating_sub(1), ny, nz),
            Position::Y => (nx, ny.saturating_sub(1), nz),
            Position::Z => (nx, ny, nz.saturating_sub(1)),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Position::Center => "C",
            Position::X => "X",
            Position::Y => "Y",
            Position::Z => "Z",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Position {
    type Err = AdvectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "center" => Ok(Position::Center),
            "x" => Ok(Position::X),
            "y" => Ok(Position::Y),
            "z" => Ok(Position::Z),
            _ => Err(AdvectionError::UnsupportedPosition(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes() {
        let cells = (4, 5, 6);
        assert_eq!(Position::Center.shape(cells), (4, 5, 6));
        assert_eq!(Position::X.shape(cells), (3, 5, 6));
        assert_eq!(Position::Y.shape(cells), (4, 4, 6));
        assert_eq!(Position::Z.shape(cells), (4, 5, 5));
    }

    #[test]
    fn test_roles() {
        assert_eq!(Position::Center.role(Axis3::Y), AxisRole::Center);
        assert_eq!(Position::Y.role(Axis3::Y), AxisRole::Own);
        assert_eq!(
            Position::Y.role(Axis3::Z),
            AxisRole::Transverse(Axis3::Y)
        );
    }

    #[test]
    fn test_parse_position() {
        assert_eq!("C".parse::<Position>().unwrap(), Position::Center);
        assert_eq!("z".parse::<Position>().unwrap(), Position::Z);
        assert!(matches!(
            "node".parse::<Position>(),
            Err(AdvectionError::UnsupportedPosition(_))
        ));
    }

    #[test]
    fn test_axis_faces() {
        for axis in Axis3::ALL {
            assert_eq!(axis.low_face().axis(), axis);
            assert_eq!(axis.high_face(), axis.low_face().opposite());
            assert_eq!(Position::face(axis).staggered_axis(), Some(axis));
        }
    }
}
