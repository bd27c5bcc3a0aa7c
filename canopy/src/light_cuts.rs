mod builder;
mod node;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use self::node::*;
use crate::error::{self, Error};
use crate::utils::measure;
use crate::{Light, LightCutsConfig, LightId, Result};

/// A binary tree clustering lights, used to shade a scene against a handful
/// of representatives instead of every light.
///
/// The tree owns a copy of the lights it was built from; representatives
/// are indices into that copy.
#[derive(Clone, Debug)]
pub struct LightCutsTree {
    lights: Vec<Light>,
    nodes: Vec<LightNode>,
    root_id: LightNodeId,
}

impl LightCutsTree {
    /// Builds the tree, seeding representative picks from
    /// [`LightCutsConfig::seed`] (or from entropy, if it's missing).
    pub fn build(lights: Vec<Light>, config: &LightCutsConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self::build_with_rng(lights, config, &mut rng)
    }

    pub fn build_with_rng(
        lights: Vec<Light>,
        config: &LightCutsConfig,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        let (nodes, root_id) = measure("build light tree", || {
            builder::run(&lights, config, rng)
        })?;

        Ok(Self {
            lights,
            nodes,
            root_id,
        })
    }

    /// Creates a standalone parent for two existing nodes of this tree,
    /// without attaching it anywhere.
    ///
    /// Fails with [`Error::NotInitialized`] if either of the nodes doesn't
    /// exist.
    pub fn create_parent(
        &self,
        left_id: LightNodeId,
        right_id: LightNodeId,
        rng: &mut impl Rng,
    ) -> Result<LightNode> {
        builder::merge(&self.nodes, left_id, right_id, rng)
    }

    pub fn root_id(&self) -> LightNodeId {
        self.root_id
    }

    pub fn root(&self) -> &LightNode {
        &self.nodes[self.root_id.get() as usize]
    }

    pub fn node(&self, id: LightNodeId) -> Option<&LightNode> {
        self.nodes.get(id.get() as usize)
    }

    /// Returns the number of nodes, leaves included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn light(&self, id: LightId) -> Option<&Light> {
        self.lights.get(id.get() as usize)
    }

    /// Returns leaves, one per light, in the order the lights were given.
    pub fn leaves(&self) -> impl Iterator<Item = (LightNodeId, &LightNode)> {
        self.nodes
            .iter()
            .enumerate()
            .take(self.lights.len())
            .map(|(id, node)| (LightNodeId::new(id as u32), node))
    }

    /// Returns the light representing given node.
    pub fn representative(&self, id: LightNodeId) -> Result<&Light> {
        let node = self.node(id).ok_or_else(|| {
            error::fatal(Error::not_initialized(format!(
                "light node {} doesn't exist",
                id.get()
            )))
        })?;

        self.light(node.representative).ok_or_else(|| {
            error::fatal(Error::out_of_range(format!(
                "light node {} is represented by unknown light {}",
                id.get(),
                node.representative.get()
            )))
        })
    }
}
