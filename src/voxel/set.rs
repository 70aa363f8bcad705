use std::collections::HashMap;

use super::{Voxel, VoxelId};
use crate::math::Coord;

/// A collection of voxels, unique by coordinate.
///
/// Iteration follows insertion order so that encodings are stable. `index`
/// maps each occupied coordinate to its position in `voxels`.
#[derive(Debug, Clone, Default)]
pub struct VoxelSet {
    voxels: Vec<Voxel>,
    index: HashMap<Coord, usize>,
}

impl VoxelSet {
    /// Creates a new, empty voxel set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from voxels, keeping the first voxel seen at each
    /// coordinate.
    pub fn from_voxels(voxels: impl IntoIterator<Item = Voxel>) -> Self {
        let mut set = Self::new();
        for voxel in voxels {
            set.insert(voxel);
        }
        set
    }

    /// Inserts a voxel. Returns `false` without modifying the set if the
    /// coordinate is already occupied.
    pub fn insert(&mut self, voxel: Voxel) -> bool {
        let coord = voxel.coord();
        if self.index.contains_key(&coord) {
            return false;
        }
        self.index.insert(coord, self.voxels.len());
        self.voxels.push(voxel);
        true
    }

    /// Removes the voxel with the given identity, if present. The remaining
    /// voxels keep their relative order.
    pub fn remove(&mut self, id: &VoxelId) -> Option<Voxel> {
        let position = self.index.remove(&id.coord())?;
        let removed = self.voxels.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// Returns `true` if a voxel occupies `coord`.
    #[must_use]
    pub fn contains(&self, coord: &Coord) -> bool {
        self.index.contains_key(coord)
    }

    /// Looks up the voxel with the given identity.
    #[must_use]
    pub fn get(&self, id: &VoxelId) -> Option<&Voxel> {
        self.index
            .get(&id.coord())
            .and_then(|&position| self.voxels.get(position))
    }

    /// Number of voxels in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Returns `true` if the set holds no voxels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Iterates voxels in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Voxel> {
        self.voxels.iter()
    }

    /// Coordinates of every voxel, in iteration order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.voxels.iter().map(Voxel::coord)
    }

    /// Keeps only the voxels for which `keep` returns `true`.
    pub fn retain(&mut self, keep: impl FnMut(&Voxel) -> bool) {
        self.voxels.retain(keep);
        self.reindex();
    }

    /// Removes every voxel.
    pub fn clear(&mut self) {
        self.voxels.clear();
        self.index.clear();
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (position, voxel) in self.voxels.iter().enumerate() {
            self.index.insert(voxel.coord(), position);
        }
    }
}

impl PartialEq for VoxelSet {
    /// Two sets are equal when they hold the same voxels, in any order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|v| other.get(&v.id()).is_some_and(|o| o == v))
    }
}

impl Eq for VoxelSet {}

impl FromIterator<Voxel> for VoxelSet {
    fn from_iter<I: IntoIterator<Item = Voxel>>(iter: I) -> Self {
        Self::from_voxels(iter)
    }
}

impl<'a> IntoIterator for &'a VoxelSet {
    type Item = &'a Voxel;
    type IntoIter = std::slice::Iter<'a, Voxel>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::voxel::Color;

    #[test]
    fn repeated_insert_is_a_no_op() {
        let mut set = VoxelSet::new();
        assert!(set.insert(Voxel::new(1, 2, 3)));
        for _ in 0..5 {
            assert!(!set.insert(Voxel::new(1, 2, 3)));
        }
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn collision_keeps_original_color() {
        let mut set = VoxelSet::new();
        set.insert(Voxel::new(0, 0, 0).with_color(Some(Color::new("#111111"))));
        set.insert(Voxel::new(0, 0, 0).with_color(Some(Color::new("#222222"))));
        let kept = set.get(&VoxelId::new(0, 0, 0)).unwrap();
        assert_eq!(kept.color, Some(Color::new("#111111")));
    }

    #[test]
    fn remove_by_id() {
        let mut set = VoxelSet::from_voxels([Voxel::new(0, 0, 0), Voxel::new(1, 0, 0)]);
        let removed = set.remove(&VoxelId::new(0, 0, 0)).unwrap();
        assert_eq!(removed.coord(), Coord::new(0, 0, 0));
        assert_eq!(set.len(), 1);
        assert!(!set.contains(&Coord::new(0, 0, 0)));
        assert!(set.remove(&VoxelId::new(0, 0, 0)).is_none());
        assert!(set.insert(Voxel::new(0, 0, 0)));
    }

    #[test]
    fn preserves_insertion_order() {
        let set = VoxelSet::from_voxels([
            Voxel::new(3, 0, 0),
            Voxel::new(1, 0, 0),
            Voxel::new(2, 0, 0),
        ]);
        let xs: Vec<_> = set.iter().map(|v| v.x).collect();
        assert_eq!(xs, vec![3, 1, 2]);
    }

    #[test]
    fn equality_ignores_order() {
        let a = VoxelSet::from_voxels([Voxel::new(0, 0, 0), Voxel::new(1, 0, 0)]);
        let b = VoxelSet::from_voxels([Voxel::new(1, 0, 0), Voxel::new(0, 0, 0)]);
        let c = VoxelSet::from_voxels([Voxel::new(1, 0, 0)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn retain_keeps_index_in_sync() {
        let mut set: VoxelSet = (0..4).map(|x| Voxel::new(x, 0, 0)).collect();
        set.retain(|v| v.x % 2 == 0);
        assert_eq!(set.len(), 2);
        assert!(!set.contains(&Coord::new(1, 0, 0)));
        assert!(set.insert(Voxel::new(1, 0, 0)));
    }

    #[test]
    fn clear_empties_everything() {
        let mut set = VoxelSet::from_voxels([Voxel::new(0, 0, 0)]);
        set.clear();
        assert!(set.is_empty());
        assert!(set.insert(Voxel::new(0, 0, 0)));
    }

    #[test]
    fn lookup_follows_removals() {
        let mut set: VoxelSet = (0..6)
            .map(|x| Voxel::new(x, 0, 0).with_color(Some(Color::new(x.to_string()))))
            .collect();
        set.remove(&VoxelId::new(1, 0, 0)).unwrap();
        set.remove(&VoxelId::new(4, 0, 0)).unwrap();
        set.remove(&VoxelId::new(0, 0, 0)).unwrap();

        let xs: Vec<_> = set.iter().map(|v| v.x).collect();
        assert_eq!(xs, vec![2, 3, 5]);
        for x in [2, 3, 5] {
            let voxel = set.get(&VoxelId::new(x, 0, 0)).unwrap();
            assert_eq!(voxel.x, x);
            assert_eq!(voxel.color, Some(Color::new(x.to_string())));
        }
        assert!(set.get(&VoxelId::new(4, 0, 0)).is_none());

        assert_eq!(set.remove(&VoxelId::new(5, 0, 0)).unwrap().x, 5);
        assert!(set.insert(Voxel::new(4, 0, 0)));
        assert_eq!(set.get(&VoxelId::new(4, 0, 0)).unwrap().x, 4);
        let xs: Vec<_> = set.iter().map(|v| v.x).collect();
        assert_eq!(xs, vec![2, 3, 4]);
    }

    #[test]
    fn lookup_follows_retain() {
        let mut set: VoxelSet = (0..5).map(|x| Voxel::new(x, 0, 0)).collect();
        set.retain(|v| v.x != 0 && v.x != 2);
        for x in [1, 3, 4] {
            assert_eq!(set.get(&VoxelId::new(x, 0, 0)).unwrap().x, x);
        }
        assert_eq!(set.remove(&VoxelId::new(3, 0, 0)).unwrap().x, 3);
        assert_eq!(set.get(&VoxelId::new(4, 0, 0)).unwrap().x, 4);
    }
}
