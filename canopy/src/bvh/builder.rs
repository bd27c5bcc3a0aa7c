use std::collections::VecDeque;

use super::{BvhNode, BvhNodeId, BvhNodes, TrianglesRef};
use crate::{
    BoundingBox, BuildConfig, Triangle, TriangleExt, TriangleId, Volume,
};

pub fn run<V>(
    triangles: &[Triangle],
    indices: &mut [TriangleId],
    nodes: &mut BvhNodes<V>,
    config: &BuildConfig,
) where
    V: Volume,
{
    let root_id = nodes.add(Default::default());

    let mut pending = VecDeque::from([Task {
        node_id: root_id,
        triangles_ref: TrianglesRef::new(0, indices.len() as u32),
        depth: 0,
    }]);

    while let Some(task) = pending.pop_front() {
        if let Some((left, right)) =
            process(triangles, indices, nodes, config, task)
        {
            pending.push_back(left);
            pending.push_back(right);
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Task {
    node_id: BvhNodeId,
    triangles_ref: TrianglesRef,
    depth: u32,
}

/// Fills in the node described by `task`, returning tasks for its children
/// if the node ended up being split.
fn process<V>(
    triangles: &[Triangle],
    indices: &mut [TriangleId],
    nodes: &mut BvhNodes<V>,
    config: &BuildConfig,
    task: Task,
) -> Option<(Task, Task)>
where
    V: Volume,
{
    let ids = &mut indices[task.triangles_ref.as_range()];

    let aabb = ids
        .iter()
        .map(|id| triangles[id.get() as usize].bounds())
        .fold(BoundingBox::default(), BoundingBox::merge);

    let bounds = V::from_aabb(&aabb);

    nodes[task.node_id] = BvhNode::Leaf {
        bounds,
        triangles_ref: task.triangles_ref,
    };

    if ids.len() <= 1 || task.depth >= config.max_depth {
        return None;
    }

    let pivot = if ids.len() == 2 {
        1
    } else {
        let plane_pos = bounds.center();
        let plane_normal = aabb.dominant_axis_plane_normal();

        let (left, right): (Vec<_>, Vec<_>) =
            ids.iter().copied().partition(|id| {
                triangles[id.get() as usize]
                    .is_p0_left_of_plane(plane_pos, plane_normal)
            });

        // Everything landed on one side, so splitting wouldn't make any
        // progress
        if left.is_empty() || right.is_empty() {
            return None;
        }

        ids[..left.len()].copy_from_slice(&left);
        ids[left.len()..].copy_from_slice(&right);

        left.len()
    };

    let left_id = nodes.add(Default::default());
    let right_id = nodes.add(Default::default());

    nodes[task.node_id] = BvhNode::Internal {
        bounds,
        left_id,
        right_id,
    };

    let (left_ref, right_ref) = task.triangles_ref.split_at(pivot as u32);

    Some((
        Task {
            node_id: left_id,
            triangles_ref: left_ref,
            depth: task.depth + 1,
        },
        Task {
            node_id: right_id,
            triangles_ref: right_ref,
            depth: task.depth + 1,
        },
    ))
}
