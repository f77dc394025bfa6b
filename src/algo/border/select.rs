//! Deciding which side of the loop is inside, and the resulting vertex set.

use log::debug;

use crate::error::{MeshError, Result};
use crate::mesh::{Surface, VertexId};

use super::classify::Classification;
use super::path::VertexLoop;

/// The vertices selected by a border, sorted by index without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MembershipSet {
    vertices: Vec<VertexId>,
    num_surface_vertices: usize,
}

impl MembershipSet {
    /// Create a set from arbitrary vertex ids on a surface of the given size.
    ///
    /// Ids at or beyond `num_surface_vertices` are dropped.
    pub fn new(mut vertices: Vec<VertexId>, num_surface_vertices: usize) -> Self {
        vertices.retain(|v| v.index() < num_surface_vertices);
        vertices.sort_unstable_by_key(|v| v.index());
        vertices.dedup();
        Self {
            vertices,
            num_surface_vertices,
        }
    }

    /// Number of member vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check if no vertex was selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex count of the surface the set was computed on.
    #[inline]
    pub fn num_surface_vertices(&self) -> usize {
        self.num_surface_vertices
    }

    /// Check whether a vertex is a member.
    pub fn contains(&self, v: VertexId) -> bool {
        self.vertices
            .binary_search_by_key(&v.index(), |m| m.index())
            .is_ok()
    }

    /// Iterate over members in index order.
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().copied()
    }

    /// Members in index order.
    #[inline]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Per-vertex membership flags for the whole surface.
    pub fn to_mask(&self) -> Vec<bool> {
        let mut mask = vec![false; self.num_surface_vertices];
        for v in &self.vertices {
            mask[v.index()] = true;
        }
        mask
    }

    /// Write `value` into `data` at every member index.
    ///
    /// Entries of non-members are left untouched, so the caller chooses the
    /// background.
    ///
    /// # Errors
    ///
    /// [`MeshError::VertexCountMismatch`] if `data` does not have one entry
    /// per surface vertex.
    pub fn paint<T: Copy>(&self, data: &mut [T], value: T) -> Result<()> {
        if data.len() != self.num_surface_vertices {
            return Err(MeshError::VertexCountMismatch {
                expected: self.num_surface_vertices,
                actual: data.len(),
            });
        }
        for v in &self.vertices {
            data[v.index()] = value;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a MembershipSet {
    type Item = &'a VertexId;
    type IntoIter = std::slice::Iter<'a, VertexId>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

/// Turn a flood classification into the set of vertices inside the loop.
///
/// The flood starts far from the loop, so the flooded side is normally the
/// outside. When the flood covers at least half the surface it is instead
/// taken as the inside, since the enclosed region is assumed to be the
/// smaller one. `inverse` swaps the sides afterwards.
///
/// Loop vertices and isolated vertices are never members.
pub fn select_members(
    surface: &Surface,
    vertex_loop: &VertexLoop,
    classification: &Classification,
    inverse: bool,
) -> MembershipSet {
    let n = surface.num_vertices();
    let flooded_is_inside = classification.flooded_count() < n / 2;
    if flooded_is_inside {
        debug!(
            "flood covered {} of {} vertices, taking the flooded side as inside",
            classification.flooded_count(),
            n
        );
    }

    let mut on_loop = vec![false; n];
    for v in vertex_loop.iter() {
        if let Some(flag) = on_loop.get_mut(v.index()) {
            *flag = true;
        }
    }

    let vertices = surface
        .vertex_ids()
        .filter(|&v| surface.has_neighbors(v) && !on_loop[v.index()])
        .filter(|&v| (classification.is_flooded(v) == flooded_is_inside) != inverse)
        .collect();

    MembershipSet {
        vertices,
        num_surface_vertices: n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::border::classify::classify_regions;
    use crate::algo::border::fixtures::{
        four_connected_grid, ids_of, ring_coords, self_touching_loop,
    };

    fn ids(raw: &[usize]) -> Vec<VertexId> {
        raw.iter().map(|&i| VertexId::new(i)).collect()
    }

    fn members(surface: &Surface, ring: Vec<VertexId>, inverse: bool) -> MembershipSet {
        let vertex_loop = VertexLoop::new(surface, ring).unwrap();
        let classification = classify_regions(surface, &vertex_loop).unwrap();
        select_members(surface, &vertex_loop, &classification, inverse)
    }

    #[test]
    fn test_ring_encloses_center() {
        let surface = four_connected_grid(5, 5);
        let ring = ids_of(5, &ring_coords(1, 1, 3, 3));

        let inside = members(&surface, ring.clone(), false);
        assert_eq!(inside.vertices(), &[VertexId::new(12)]);

        let outside = members(&surface, ring.clone(), true);
        assert_eq!(outside.len(), 16);
        assert!(!outside.contains(VertexId::new(12)));
        for v in &ring {
            assert!(!outside.contains(*v));
        }
    }

    #[test]
    fn test_cell_loop_encloses_nothing() {
        let surface = four_connected_grid(4, 4);
        let ring = ids(&[5, 6, 10, 9]);

        let inside = members(&surface, ring.clone(), false);
        assert!(inside.is_empty());

        let outside = members(&surface, ring, true);
        let expected = ids(&[0, 1, 2, 3, 4, 7, 8, 11, 12, 13, 14, 15]);
        assert_eq!(outside.vertices(), expected.as_slice());
    }

    #[test]
    fn test_inverse_partitions_surface() {
        let surface = four_connected_grid(7, 6);
        let ring = ids_of(7, &ring_coords(1, 1, 4, 3));

        let inside = members(&surface, ring.clone(), false);
        let outside = members(&surface, ring.clone(), true);

        assert_eq!(inside.len(), 2);
        assert_eq!(inside.len() + outside.len() + ring.len(), surface.num_vertices());
        for v in inside.iter() {
            assert!(!outside.contains(v));
        }
    }

    #[test]
    fn test_new_sorts_and_dedups() {
        let set = MembershipSet::new(ids(&[7, 2, 7, 4]), 10);
        assert_eq!(set.vertices(), ids(&[2, 4, 7]).as_slice());
        assert!(set.contains(VertexId::new(4)));
        assert!(!set.contains(VertexId::new(3)));
        assert_eq!(set.num_surface_vertices(), 10);
    }

    #[test]
    fn test_new_drops_ids_off_surface() {
        let set = MembershipSet::new(ids(&[7, 1, 5]), 5);
        assert_eq!(set.vertices(), ids(&[1]).as_slice());
        assert_eq!(set.to_mask(), vec![false, true, false, false, false]);

        let mut data = vec![0u8; 5];
        set.paint(&mut data, 3).unwrap();
        assert_eq!(data, vec![0, 3, 0, 0, 0]);
    }

    #[test]
    fn test_self_touching_loop_selection() {
        let (surface, ring) = self_touching_loop();

        let inside = members(&surface, ring.clone(), false);
        assert_eq!(inside.vertices(), &[VertexId::new(0)]);

        let outside = members(&surface, ring, true);
        assert_eq!(outside.vertices(), &[VertexId::new(1)]);
    }

    #[test]
    fn test_to_mask() {
        let set = MembershipSet::new(ids(&[0, 3]), 5);
        assert_eq!(set.to_mask(), vec![true, false, false, true, false]);
    }

    #[test]
    fn test_paint() {
        let set = MembershipSet::new(ids(&[1, 2]), 4);

        let mut labels = vec![0u32; 4];
        set.paint(&mut labels, 9).unwrap();
        assert_eq!(labels, vec![0, 9, 9, 0]);

        let mut short = vec![0.0f32; 3];
        assert_eq!(
            set.paint(&mut short, 1.0),
            Err(MeshError::VertexCountMismatch {
                expected: 4,
                actual: 3
            })
        );
    }
}
