//! Per-axis difference, averaging and concatenation over 3D arrays.
//!
//! All operators work on whole arrays: `dif` and `avg` shrink the chosen
//! axis by one, `cat` glues arrays along it. Face-based quantities are built
//! from cell-based ones by combining these.

use ndarray::{Array3, ArrayBase, ArrayView3, Data, Ix3, ShapeError, Slice, concatenate};

use crate::types::{Axis3, Position};

/// Unit-step slice `[start, end)` with numpy-style negative indices.
#[inline]
pub fn span(start: isize, end: Option<isize>) -> Slice {
    Slice::new(start, end, 1)
}

/// Consecutive differences `x[i+1] - x[i]` along `axis`.
pub fn dif<S>(x: &ArrayBase<S, Ix3>, axis: Axis3) -> Array3<f64>
where
    S: Data<Elem = f64>,
{
    let ax = axis.nd();
    &x.slice_axis(ax, span(1, None)) - &x.slice_axis(ax, span(0, Some(-1)))
}

/// Averages of neighbours `0.5 * (x[i] + x[i+1])` along `axis`.
pub fn avg<S>(x: &ArrayBase<S, Ix3>, axis: Axis3) -> Array3<f64>
where
    S: Data<Elem = f64>,
{
    let ax = axis.nd();
    (&x.slice_axis(ax, span(1, None)) + &x.slice_axis(ax, span(0, Some(-1)))) * 0.5
}

/// Average a cell-based array onto the locations of a variable at `pos`.
///
/// Cell-centered variables get a copy; staggered ones get the average along
/// their staggered axis.
pub fn avg_pos<S>(pos: Position, x: &ArrayBase<S, Ix3>) -> Array3<f64>
where
    S: Data<Elem = f64>,
{
    match pos.staggered_axis() {
        None => x.to_owned(),
        Some(axis) => avg(x, axis),
    }
}

/// Concatenate arrays along `axis`.
pub fn cat(axis: Axis3, parts: &[ArrayView3<'_, f64>]) -> Result<Array3<f64>, ShapeError> {
    concatenate(axis.nd(), parts)
}

/// One-thick slab at `index` along `axis` (negative counts from the end).
pub fn slab<S>(x: &ArrayBase<S, Ix3>, axis: Axis3, index: isize) -> ArrayView3<'_, f64>
where
    S: Data<Elem = f64>,
{
    let end = if index == -1 { None } else { Some(index + 1) };
    x.slice_axis(axis.nd(), span(index, end))
}

/// First slab along `axis`.
pub fn first<S>(x: &ArrayBase<S, Ix3>, axis: Axis3) -> ArrayView3<'_, f64>
where
    S: Data<Elem = f64>,
{
    slab(x, axis, 0)
}

/// Last slab along `axis`.
pub fn last<S>(x: &ArrayBase<S, Ix3>, axis: Axis3) -> ArrayView3<'_, f64>
where
    S: Data<Elem = f64>,
{
    slab(x, axis, -1)
}

/// Overwrite one slab of `x` with another of the same array.
pub fn copy_slab(x: &mut Array3<f64>, axis: Axis3, from: isize, to: isize) {
    let src = slab(&*x, axis, from).to_owned();
    let end = if to == -1 { None } else { Some(to + 1) };
    x.slice_axis_mut(axis.nd(), span(to, end)).assign(&src);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    const TOL: f64 = 1e-14;

    fn ramp() -> Array3<f64> {
        Array3::from_shape_fn((4, 3, 2), |(i, j, k)| {
            (i * i) as f64 + 10.0 * j as f64 + 100.0 * k as f64
        })
    }

    #[test]
    fn test_dif_shrinks_axis() {
        let x = ramp();
        let d = dif(&x, Axis3::X);
        assert_eq!(d.dim(), (3, 3, 2));
        assert!((d[[0, 0, 0]] - 1.0).abs() < TOL);
        assert!((d[[2, 1, 1]] - 5.0).abs() < TOL);

        let dz = dif(&x, Axis3::Z);
        assert_eq!(dz.dim(), (4, 3, 1));
        assert!(dz.iter().all(|&v| (v - 100.0).abs() < TOL));
    }

    #[test]
    fn test_avg_midpoints() {
        let x = ramp();
        let a = avg(&x, Axis3::Y);
        assert_eq!(a.dim(), (4, 2, 2));
        assert!((a[[1, 0, 0]] - 6.0).abs() < TOL);
    }

    #[test]
    fn test_avg_pos_center_is_copy() {
        let x = ramp();
        assert_eq!(avg_pos(Position::Center, &x), x);
        assert_eq!(avg_pos(Position::Z, &x).dim(), (4, 3, 1));
    }

    #[test]
    fn test_cat_and_slabs() {
        let x = ramp();
        let padded = cat(Axis3::X, &[first(&x, Axis3::X), x.view(), last(&x, Axis3::X)]).unwrap();
        assert_eq!(padded.dim(), (6, 3, 2));
        assert_eq!(padded[[0, 2, 1]], x[[0, 2, 1]]);
        assert_eq!(padded[[5, 2, 1]], x[[3, 2, 1]]);
        assert_eq!(slab(&x, Axis3::X, -2)[[0, 0, 0]], x[[2, 0, 0]]);
    }

    #[test]
    fn test_cat_shape_mismatch() {
        let a = Array3::<f64>::zeros((2, 2, 2));
        let b = Array3::<f64>::zeros((2, 3, 2));
        assert!(cat(Axis3::X, &[a.view(), b.view()]).is_err());
    }

    #[test]
    fn test_copy_slab() {
        let mut x = ramp();
        copy_slab(&mut x, Axis3::X, -2, 0);
        assert_eq!(x[[0, 1, 1]], x[[2, 1, 1]]);
        copy_slab(&mut x, Axis3::X, 1, -1);
        assert_eq!(x[[3, 1, 0]], x[[1, 1, 0]]);
    }

    #[test]
    fn test_degenerate_axis() {
        // A single cell along y yields an empty interior face set.
        let x = Array3::<f64>::ones((3, 1, 2));
        let a = avg(&x, Axis3::Y);
        assert_eq!(a.dim(), (3, 0, 2));
        let padded = cat(Axis3::Y, &[first(&x, Axis3::Y), a.view(), last(&x, Axis3::Y)]).unwrap();
        assert_eq!(padded.dim(), (3, 2, 2));
    }
}
