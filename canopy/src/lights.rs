use crate::error::{self, Error};
use crate::{Light, LightCutsConfig, LightCutsTree, LightId, LightKind, Result};

pub const MAX_POINT_LIGHTS: usize = 1024;
pub const MAX_DIRECTIONAL_LIGHTS: usize = 1024;
pub const MAX_ORIENTED_LIGHTS: usize = 1024;

/// A snapshot of the scene's lights.
///
/// Each kind of light has its own capacity; lights added beyond it are
/// dropped with a warning.
#[derive(Clone, Debug, Default)]
pub struct Lights {
    items: Vec<Light>,
}

impl Lights {
    pub fn add(&mut self, light: Light) -> Option<LightId> {
        let kind = light.kind();

        let capacity = match kind {
            LightKind::Point => MAX_POINT_LIGHTS,
            LightKind::Directional => MAX_DIRECTIONAL_LIGHTS,
            LightKind::Oriented => MAX_ORIENTED_LIGHTS,
        };

        if self.count(kind) >= capacity {
            return error::warning(Error::out_of_range(format!(
                "can't add more than {capacity} {kind:?} lights"
            )));
        }

        self.items.push(light);

        Some(LightId::new((self.items.len() - 1) as u32))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, id: LightId) -> Option<&Light> {
        self.items.get(id.get() as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LightId, &Light)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(id, light)| (LightId::new(id as u32), light))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn point_lights(&self) -> impl Iterator<Item = &Light> + '_ {
        self.of_kind(LightKind::Point)
    }

    pub fn directional_lights(&self) -> impl Iterator<Item = &Light> + '_ {
        self.of_kind(LightKind::Directional)
    }

    pub fn oriented_lights(&self) -> impl Iterator<Item = &Light> + '_ {
        self.of_kind(LightKind::Oriented)
    }

    /// Clusters all lights of this snapshot.
    ///
    /// Node representatives refer to the same [`LightId`]s as this snapshot.
    pub fn build_tree(
        &self,
        config: &LightCutsConfig,
    ) -> Result<LightCutsTree> {
        LightCutsTree::build(self.items.clone(), config)
    }

    fn of_kind(&self, kind: LightKind) -> impl Iterator<Item = &Light> + '_ {
        self.items.iter().filter(move |light| light.kind() == kind)
    }

    fn count(&self, kind: LightKind) -> usize {
        self.of_kind(kind).count()
    }
}
