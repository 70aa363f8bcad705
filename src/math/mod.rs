/// Integer voxel coordinate.
pub type Coord = nalgebra::Point3<i32>;

/// Integer offset between voxel coordinates.
pub type Offset = nalgebra::Vector3<i32>;

/// Unit offsets toward the six face neighbours of a voxel, in the order
/// -X, +X, -Y, +Y, -Z, +Z.
#[must_use]
pub fn face_neighbor_offsets() -> [Offset; 6] {
    [
        -Offset::x(),
        Offset::x(),
        -Offset::y(),
        Offset::y(),
        -Offset::z(),
        Offset::z(),
    ]
}

/// Neighbour of `coord` across `offset`, or `None` when any axis would leave
/// the `i32` range.
#[must_use]
pub fn checked_neighbor(coord: &Coord, offset: &Offset) -> Option<Coord> {
    Some(Coord::new(
        coord.x.checked_add(offset.x)?,
        coord.y.checked_add(offset.y)?,
        coord.z.checked_add(offset.z)?,
    ))
}

/// Converts a signed index into `0..len`, or `None` when it falls outside.
#[must_use]
pub fn checked_index(value: i32, len: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|&i| i < len)
}
