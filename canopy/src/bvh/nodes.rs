use std::ops;

use super::{BvhNode, BvhNodeId};
use crate::Volume;

/// Arena of hierarchy nodes; the root always lives at [`BvhNodeId::root()`].
#[derive(Clone, Debug)]
pub struct BvhNodes<V>
where
    V: Volume,
{
    nodes: Vec<BvhNode<V>>,
}

impl<V> BvhNodes<V>
where
    V: Volume,
{
    pub fn add(&mut self, node: BvhNode<V>) -> BvhNodeId {
        self.nodes.push(node);

        BvhNodeId::new((self.nodes.len() - 1) as u32)
    }

    pub fn get(&self, id: BvhNodeId) -> Option<&BvhNode<V>> {
        self.nodes.get(id.get() as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BvhNodeId, &BvhNode<V>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(id, node)| (BvhNodeId::new(id as u32), node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<V> Default for BvhNodes<V>
where
    V: Volume,
{
    fn default() -> Self {
        Self {
            nodes: Default::default(),
        }
    }
}

impl<V> ops::Index<BvhNodeId> for BvhNodes<V>
where
    V: Volume,
{
    type Output = BvhNode<V>;

    fn index(&self, index: BvhNodeId) -> &Self::Output {
        &self.nodes[index.get() as usize]
    }
}

impl<V> ops::IndexMut<BvhNodeId> for BvhNodes<V>
where
    V: Volume,
{
    fn index_mut(&mut self, index: BvhNodeId) -> &mut Self::Output {
        &mut self.nodes[index.get() as usize]
    }
}
