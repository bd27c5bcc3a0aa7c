use rand::Rng;

use super::{LightNode, LightNodeId};
use crate::error::{self, Error};
use crate::{
    BoundingBox, BoundingCone, Light, LightCutsConfig, LightId, Result,
};

/// Clusters given lights bottom-up, returning all nodes (leaves first, in
/// the order of `lights`) together with the root's id.
///
/// Each step evaluates every pair of pending clusters and commits the one
/// with the smallest size metric, which makes the whole process O(n³).
pub fn run(
    lights: &[Light],
    config: &LightCutsConfig,
    rng: &mut impl Rng,
) -> Result<(Vec<LightNode>, LightNodeId)> {
    if lights.is_empty() {
        return Err(error::fatal(Error::not_initialized(
            "can't build a light tree out of zero lights",
        )));
    }

    log::debug!("Building light tree; lights={}", lights.len());

    if lights.len() > config.soft_light_limit {
        log::warn!(
            "Building light tree out of {} lights; clustering is cubic, so \
             this might take a while",
            lights.len()
        );
    }

    let mut nodes: Vec<_> = lights
        .iter()
        .enumerate()
        .map(|(id, light)| LightNode::leaf(LightId::new(id as u32), light))
        .collect();

    let mut pending: Vec<_> = (0..nodes.len())
        .map(|id| LightNodeId::new(id as u32))
        .collect();

    while pending.len() > 1 {
        let mut best: Option<(usize, usize, LightNode, f32)> = None;

        for i in 0..pending.len() {
            for j in (i + 1)..pending.len() {
                let candidate = merge(&nodes, pending[i], pending[j], rng)?;
                let metric = candidate.size_metric(config);

                let is_better = best
                    .as_ref()
                    .map_or(true, |(_, _, _, best_metric)| {
                        metric < *best_metric
                    });

                if is_better {
                    best = Some((i, j, candidate, metric));
                }
            }
        }

        let Some((i, j, parent, _)) = best else {
            unreachable!();
        };

        let parent_id = LightNodeId::new(nodes.len() as u32);

        nodes.push(parent);

        // `j > i`, so removing `j` first keeps `i` valid
        pending.remove(j);
        pending.remove(i);
        pending.push(parent_id);
    }

    Ok((nodes, pending[0]))
}

/// Creates the parent of given two clusters, drawing its representative
/// from `rng`.
///
/// The representative comes from the left child with probability
/// proportional to the left child's share of the total intensity.
pub fn merge(
    nodes: &[LightNode],
    left_id: LightNodeId,
    right_id: LightNodeId,
    rng: &mut impl Rng,
) -> Result<LightNode> {
    let get = |id: LightNodeId| {
        nodes.get(id.get() as usize).ok_or_else(|| {
            error::fatal(Error::not_initialized(format!(
                "light node {} doesn't exist",
                id.get()
            )))
        })
    };

    let left = get(left_id)?;
    let right = get(right_id)?;

    let intensity = left.intensity + right.intensity;

    let left_probability = if intensity > 0.0 {
        left.intensity / intensity
    } else {
        0.5
    };

    let is_left_representative = rng.gen::<f32>() < left_probability;

    let representative = if is_left_representative {
        left
    } else {
        right
    };

    Ok(LightNode {
        intensity,
        color: left.color + right.color,
        bounds: BoundingBox::merge(left.bounds, right.bounds),
        cone: BoundingCone::merge(left.cone, right.cone),
        representative: representative.representative,
        kind: representative.kind,
        is_left_representative,
        children: Some((left_id, right_id)),
    })
}
