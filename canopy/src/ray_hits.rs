use std::slice;

use crate::RayHit;

/// An unordered collection of ray hits, as produced by a traversal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RayHits {
    hits: Vec<RayHit>,
}

impl RayHits {
    pub fn push(&mut self, hit: RayHit) {
        self.hits.push(hit);
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RayHit> + '_ {
        self.hits.iter()
    }

    pub fn clear(&mut self) {
        self.hits.clear();
    }

    /// Returns the hit closest to the camera, as stamped by
    /// [`RayHit::set_distance_to()`].
    pub fn closest(&self) -> Option<&RayHit> {
        self.hits
            .iter()
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    /// Returns hits ordered from the closest one.
    pub fn into_sorted(mut self) -> Vec<RayHit> {
        self.hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        self.hits
    }

    /// Shifts triangle ids of hits starting at `from` by `offset`, turning
    /// object-local ids into scene-wide ones.
    pub(crate) fn offset_triangle_ids(&mut self, from: usize, offset: u32) {
        for hit in &mut self.hits[from..] {
            *hit.triangle_id.get_mut() += offset;
        }
    }
}

impl<'a> IntoIterator for &'a RayHits {
    type Item = &'a RayHit;
    type IntoIter = slice::Iter<'a, RayHit>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}

impl IntoIterator for RayHits {
    type Item = RayHit;
    type IntoIter = std::vec::IntoIter<RayHit>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TriangleId;

    fn hit(distance: f32, triangle_id: u32) -> RayHit {
        let mut hit = RayHit::new(1.0, 0.0, 0.0, distance)
            .with_triangle_id(TriangleId::new(triangle_id));

        hit.distance = distance;
        hit
    }

    #[test]
    fn closest() {
        let mut target = RayHits::default();

        assert!(target.is_empty());
        assert_eq!(None, target.closest());

        target.push(hit(3.0, 0));
        target.push(hit(1.0, 1));
        target.push(hit(2.0, 2));

        assert_eq!(3, target.len());
        assert_eq!(TriangleId::new(1), target.closest().unwrap().triangle_id);
    }

    #[test]
    fn into_sorted() {
        let mut target = RayHits::default();

        target.push(hit(3.0, 0));
        target.push(hit(f32::INFINITY, 1));
        target.push(hit(1.0, 2));

        let actual: Vec<_> = target
            .into_sorted()
            .into_iter()
            .map(|hit| hit.triangle_id.get())
            .collect();

        assert_eq!(vec![2, 0, 1], actual);
    }

    #[test]
    fn offset_triangle_ids() {
        let mut target = RayHits::default();

        target.push(hit(1.0, 0));
        target.push(hit(1.0, 1));
        target.push(hit(1.0, 2));
        target.offset_triangle_ids(1, 10);

        let actual: Vec<_> =
            target.iter().map(|hit| hit.triangle_id.get()).collect();

        assert_eq!(vec![0, 11, 12], actual);

        target.clear();

        assert!(target.is_empty());
    }
}
