use glam::{vec4, Vec4};

use super::{BvhNode, BvhNodeId, BvhNodes};
use crate::{TriangleId, Volume};

const OP_INTERNAL: u32 = 0;
const OP_LEAF: u32 = 1;

pub fn run<V>(
    nodes: &BvhNodes<V>,
    indices: &[TriangleId],
    buffer: &mut Vec<Vec4>,
) where
    V: Volume,
{
    buffer.clear();

    let mut stack = vec![Step::Visit(BvhNodeId::root())];

    while let Some(step) = stack.pop() {
        match step {
            Step::Visit(id) => match nodes[id] {
                BvhNode::Internal {
                    left_id, right_id, ..
                } => {
                    let ptr = buffer.len();

                    buffer.resize(
                        ptr + V::INTERNAL_NODE_LEN,
                        Default::default(),
                    );

                    stack.push(Step::EnterRight {
                        ptr,
                        left_id,
                        right_id,
                    });

                    stack.push(Step::Visit(left_id));
                }

                BvhNode::Leaf { triangles_ref, .. } => {
                    serialize_leaf(&indices[triangles_ref.as_range()], buffer);
                }
            },

            Step::EnterRight {
                ptr,
                left_id,
                right_id,
            } => {
                // The whole left subtree has been written by now, so this is
                // where the right one starts
                let right_ptr = buffer.len() as u32;

                V::serialize_internal(
                    &nodes[left_id].bounds(),
                    &nodes[right_id].bounds(),
                    OP_INTERNAL,
                    right_ptr,
                    &mut buffer[ptr..ptr + V::INTERNAL_NODE_LEN],
                );

                stack.push(Step::Visit(right_id));
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Step {
    Visit(BvhNodeId),

    /// Fills in the header of the internal node at `ptr`, then visits its
    /// right child
    EnterRight {
        ptr: usize,
        left_id: BvhNodeId,
        right_id: BvhNodeId,
    },
}

fn serialize_leaf(ids: &[TriangleId], buffer: &mut Vec<Vec4>) {
    for (idx, triangle_id) in ids.iter().enumerate() {
        let got_more_entries = idx + 1 < ids.len();

        buffer.push(vec4(
            f32::from_bits(got_more_entries as u32),
            f32::from_bits(triangle_id.get()),
            Default::default(),
            f32::from_bits(OP_LEAF),
        ));
    }
}
