use std::ops::Range;

use crate::Volume;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BvhNode<V>
where
    V: Volume,
{
    Internal {
        bounds: V,
        left_id: BvhNodeId,
        right_id: BvhNodeId,
    },

    Leaf {
        bounds: V,
        triangles_ref: TrianglesRef,
    },
}

impl<V> BvhNode<V>
where
    V: Volume,
{
    pub fn bounds(&self) -> V {
        match self {
            BvhNode::Internal { bounds, .. } => *bounds,
            BvhNode::Leaf { bounds, .. } => *bounds,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, BvhNode::Leaf { .. })
    }

    pub fn children(&self) -> Option<(BvhNodeId, BvhNodeId)> {
        if let BvhNode::Internal {
            left_id, right_id, ..
        } = self
        {
            Some((*left_id, *right_id))
        } else {
            None
        }
    }
}

impl<V> Default for BvhNode<V>
where
    V: Volume,
{
    fn default() -> Self {
        BvhNode::Leaf {
            bounds: Default::default(),
            triangles_ref: Default::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BvhNodeId(u32);

impl BvhNodeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn root() -> Self {
        Self::new(0)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

/// A range of a hierarchy's reordered triangle indices, owned by one leaf.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrianglesRef {
    start: u32,
    end: u32,
}

impl TrianglesRef {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Splits this range into `start..start + len` and the rest.
    pub fn split_at(&self, len: u32) -> (Self, Self) {
        let pivot = self.start + len;

        (Self::new(self.start, pivot), Self::new(pivot, self.end))
    }

    pub fn as_range(&self) -> Range<usize> {
        (self.start as usize)..(self.end as usize)
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
