use std::sync::Arc;

use glam::Vec3;

use crate::error::{self, Error};
use crate::{
    Bsh, Bvh, BuildConfig, Ray, RayHits, Result, Triangle, TriangleId,
};

/// How [`Geometry::hits()`] finds triangles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntersectionMethod {
    /// Tests every triangle
    Naive,

    /// Walks each object's bounding volume hierarchy
    #[default]
    Bvh,

    /// Walks each object's bounding sphere hierarchy; approximate, since
    /// spheres don't fully enclose their triangles
    Bsh,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(u32);

impl ObjectId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Scene geometry: a list of objects, each one with its own acceleration
/// structures.
///
/// Triangles are numbered scene-wide, in the order objects were added -
/// that's the numbering [`crate::RayHit::triangle_id`] uses for hits
/// returned from here.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    objects: Vec<Object>,
    config: BuildConfig,
    triangle_count: u32,
}

#[derive(Clone, Debug)]
struct Object {
    bvh: Bvh,
    bsh: Bsh,
    first_triangle_id: u32,
}

impl Geometry {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn add_object(&mut self, triangles: Vec<Triangle>) -> Result<ObjectId> {
        if triangles.is_empty() {
            return Err(error::fatal(Error::bad_value(
                "can't add an object without triangles",
            )));
        }

        let len = u32::try_from(triangles.len())
            .ok()
            .and_then(|len| self.triangle_count.checked_add(len))
            .ok_or_else(|| {
                error::fatal(Error::out_of_range(
                    "scene has too many triangles",
                ))
            })?;

        let triangles: Arc<[Triangle]> = triangles.into();

        let object = Object {
            bvh: Bvh::build_with_config(triangles.clone(), &self.config)?,
            bsh: Bsh::build_with_config(triangles, &self.config)?,
            first_triangle_id: self.triangle_count,
        };

        self.objects.push(object);
        self.triangle_count = len;

        Ok(ObjectId::new((self.objects.len() - 1) as u32))
    }

    /// Returns all hits of given ray, stamped with their distance to
    /// `camera_pos`.
    pub fn hits(
        &self,
        ray: &Ray,
        camera_pos: Vec3,
        method: IntersectionMethod,
    ) -> RayHits {
        let mut hits = RayHits::default();

        for object in &self.objects {
            let from = hits.len();

            match method {
                IntersectionMethod::Naive => {
                    naive_intersections(
                        object.bvh.triangles(),
                        ray,
                        camera_pos,
                        &mut hits,
                    );
                }

                IntersectionMethod::Bvh => {
                    object.bvh.intersections(ray, camera_pos, &mut hits);
                }

                IntersectionMethod::Bsh => {
                    object.bsh.intersections(ray, camera_pos, &mut hits);
                }
            }

            hits.offset_triangle_ids(from, object.first_triangle_id);
        }

        hits
    }

    /// Looks up a triangle by its scene-wide id.
    pub fn triangle(&self, id: TriangleId) -> Option<&Triangle> {
        let id = id.get();

        let object = self
            .objects
            .iter()
            .rev()
            .find(|object| object.first_triangle_id <= id)?;

        object
            .bvh
            .triangle(TriangleId::new(id - object.first_triangle_id))
    }

    pub fn bvh(&self, id: ObjectId) -> Option<&Bvh> {
        self.objects.get(id.get() as usize).map(|object| &object.bvh)
    }

    pub fn bsh(&self, id: ObjectId) -> Option<&Bsh> {
        self.objects.get(id.get() as usize).map(|object| &object.bsh)
    }

    pub fn clear(&mut self) {
        self.objects.clear();
        self.triangle_count = 0;
    }

    /// Returns the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangle_count as usize
    }
}

fn naive_intersections(
    triangles: &[Triangle],
    ray: &Ray,
    camera_pos: Vec3,
    hits: &mut RayHits,
) {
    for (id, triangle) in triangles.iter().enumerate() {
        if let Some(mut hit) = ray.intersect_triangle_default(triangle) {
            hit.set_distance_to(camera_pos, triangle);
            hits.push(hit.with_triangle_id(TriangleId::new(id as u32)));
        }
    }
}
