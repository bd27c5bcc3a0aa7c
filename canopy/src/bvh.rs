mod builder;
mod node;
mod nodes;
mod serializer;

use std::sync::Arc;

use fxhash::FxHashSet;
use glam::{Vec3, Vec4};

pub use self::node::*;
pub use self::nodes::*;
use crate::error::{self, Error};
use crate::utils::measure;
use crate::{
    BoundingBox, BoundingSphere, BuildConfig, Ray, RayHits, Result, Triangle,
    TriangleId, Volume,
};

/// Bounding volume hierarchy, i.e. a tree of axis-aligned boxes.
pub type Bvh = Hierarchy<BoundingBox>;

/// Bounding sphere hierarchy.
///
/// Spheres are fitted loosely (see [`BoundingSphere::from_aabb()`]), so
/// pruning through a BSH is approximate: a triangle sticking out of its
/// leaf's sphere can be missed.
pub type Bsh = Hierarchy<BoundingSphere>;

/// A binary tree of bounding volumes built over a list of triangles.
///
/// Triangles are identified by their position in the list the hierarchy was
/// built from, and that's what [`crate::RayHit::triangle_id`] refers to. The
/// list itself is shared, so a BVH and a BSH built over the same
/// `Arc<[Triangle]>` don't duplicate it.
#[derive(Clone, Debug)]
pub struct Hierarchy<V>
where
    V: Volume,
{
    triangles: Arc<[Triangle]>,
    indices: Vec<TriangleId>,
    nodes: BvhNodes<V>,
}

impl<V> Hierarchy<V>
where
    V: Volume,
{
    pub fn build(triangles: impl Into<Arc<[Triangle]>>) -> Result<Self> {
        Self::build_with_config(triangles, &Default::default())
    }

    pub fn build_with_config(
        triangles: impl Into<Arc<[Triangle]>>,
        config: &BuildConfig,
    ) -> Result<Self> {
        let triangles = triangles.into();

        if triangles.is_empty() {
            return Err(error::fatal(Error::bad_value(
                "can't build a hierarchy out of zero triangles",
            )));
        }

        log::debug!(
            "Building hierarchy; triangles={}, max_depth={}",
            triangles.len(),
            config.max_depth
        );

        let mut indices: Vec<_> = (0..triangles.len())
            .map(|id| TriangleId::new(id as u32))
            .collect();

        let mut nodes = BvhNodes::default();

        measure("build hierarchy", || {
            builder::run(&triangles, &mut indices, &mut nodes, config);
        });

        log::debug!("Hierarchy built; nodes={}", nodes.len());

        Ok(Self {
            triangles,
            indices,
            nodes,
        })
    }

    /// Collects all hits of given ray into `hits`.
    ///
    /// Hits come in traversal order (not sorted by distance) and each one is
    /// stamped with its distance to `camera_pos`.
    pub fn intersections(
        &self,
        ray: &Ray,
        camera_pos: Vec3,
        hits: &mut RayHits,
    ) {
        let mut stack = vec![BvhNodeId::root()];

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];

            if !node.bounds().is_hit_by(ray) {
                continue;
            }

            match *node {
                BvhNode::Internal {
                    left_id, right_id, ..
                } => {
                    stack.push(right_id);
                    stack.push(left_id);
                }

                BvhNode::Leaf { triangles_ref, .. } => {
                    for &triangle_id in &self.indices[triangles_ref.as_range()]
                    {
                        let triangle =
                            &self.triangles[triangle_id.get() as usize];

                        if let Some(mut hit) =
                            ray.intersect_triangle_default(triangle)
                        {
                            hit.set_distance_to(camera_pos, triangle);
                            hits.push(hit.with_triangle_id(triangle_id));
                        }
                    }
                }
            }
        }
    }

    pub fn root(&self) -> &BvhNode<V> {
        &self.nodes[BvhNodeId::root()]
    }

    pub fn nodes(&self) -> &BvhNodes<V> {
        &self.nodes
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn triangle(&self, id: TriangleId) -> Option<&Triangle> {
        self.triangles.get(id.get() as usize)
    }

    /// Returns ids of triangles stored in given leaf.
    pub fn leaf_triangles(&self, triangles_ref: TrianglesRef) -> &[TriangleId] {
        &self.indices[triangles_ref.as_range()]
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|(_, node)| node.is_leaf()).count()
    }

    /// Returns the number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> u32 {
        let mut depth = 0;
        let mut stack = vec![(BvhNodeId::root(), 0)];

        while let Some((id, node_depth)) = stack.pop() {
            depth = depth.max(node_depth);

            if let Some((left_id, right_id)) = self.nodes[id].children() {
                stack.push((left_id, node_depth + 1));
                stack.push((right_id, node_depth + 1));
            }
        }

        depth
    }

    /// Checks the structural invariants of this hierarchy: leaves are
    /// non-empty, every triangle is referenced by exactly one leaf and (for
    /// volumes that nest) children fit inside their parents.
    pub fn validate(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        let mut stack = vec![BvhNodeId::root()];

        while let Some(id) = stack.pop() {
            let node = self.nodes.get(id).ok_or_else(|| {
                error::fatal(Error::bad_value(format!(
                    "node {} is referenced, but doesn't exist",
                    id.get()
                )))
            })?;

            match *node {
                BvhNode::Internal {
                    bounds,
                    left_id,
                    right_id,
                } => {
                    for child_id in [left_id, right_id] {
                        let child = self.nodes.get(child_id).ok_or_else(|| {
                            error::fatal(Error::bad_value(format!(
                                "node {} points at missing child {}",
                                id.get(),
                                child_id.get()
                            )))
                        })?;

                        if V::NESTED && !bounds.contains(&child.bounds()) {
                            return Err(error::fatal(Error::bad_value(
                                format!(
                                    "node {} doesn't contain its child {}",
                                    id.get(),
                                    child_id.get()
                                ),
                            )));
                        }

                        stack.push(child_id);
                    }
                }

                BvhNode::Leaf { triangles_ref, .. } => {
                    if triangles_ref.is_empty() {
                        return Err(error::fatal(Error::bad_value(format!(
                            "leaf {} is empty",
                            id.get()
                        ))));
                    }

                    for &triangle_id in self.leaf_triangles(triangles_ref) {
                        if triangle_id.get() as usize >= self.triangles.len() {
                            return Err(error::fatal(Error::bad_value(
                                format!(
                                    "leaf {} refers to unknown triangle {}",
                                    id.get(),
                                    triangle_id.get()
                                ),
                            )));
                        }

                        if !seen.insert(triangle_id) {
                            return Err(error::fatal(Error::bad_value(
                                format!(
                                    "triangle {} is referenced more than once",
                                    triangle_id.get()
                                ),
                            )));
                        }
                    }
                }
            }
        }

        if seen.len() != self.triangles.len() {
            return Err(error::fatal(Error::bad_value(format!(
                "{} out of {} triangles aren't referenced by any leaf",
                self.triangles.len() - seen.len(),
                self.triangles.len()
            ))));
        }

        Ok(())
    }

    /// Flattens this hierarchy into a depth-first buffer, overwriting
    /// `buffer`.
    ///
    /// Internal nodes take [`Volume::INTERNAL_NODE_LEN`] items (both
    /// children's volumes, op-code and the right child's pointer), while
    /// leaves take one item per triangle: `x` is set when there are more
    /// triangles in that leaf, `y` keeps the triangle's id.
    pub fn serialize(&self, buffer: &mut Vec<Vec4>) {
        serializer::run(&self.nodes, &self.indices, buffer);
    }

    pub fn serialize_to_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::new();

        self.serialize(&mut buffer);

        bytemuck::cast_slice(&buffer).to_vec()
    }
}
