use derivative::Derivative;

/// Settings for building bounding-volume hierarchies.
#[derive(Clone, Copy, Debug, PartialEq, Derivative)]
#[derivative(Default)]
pub struct BuildConfig {
    /// Nodes at this depth stop splitting and keep all of their triangles;
    /// the root is at depth zero.
    ///
    /// The center-plane split isn't balance-guaranteed, so skewed inputs can
    /// otherwise produce arbitrarily deep trees.
    #[derivative(Default(value = "64"))]
    pub max_depth: u32,
}

/// Settings for building the light-clustering tree.
#[derive(Clone, Copy, Debug, PartialEq, Derivative)]
#[derivative(Default)]
pub struct LightCutsConfig {
    /// Weight of the cone term in the size metric for clusters represented
    /// by point and directional lights.
    #[derivative(Default(value = "1.0"))]
    pub scaling: f32,

    /// Weight of the cone term in the size metric for clusters represented
    /// by oriented lights.
    #[derivative(Default(value = "2.0"))]
    pub oriented_scaling: f32,

    /// Seed for the representative-picking RNG; `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Building above this many lights logs a warning - clustering is cubic
    /// in the number of lights.
    #[derivative(Default(value = "512"))]
    pub soft_light_limit: usize,
}
