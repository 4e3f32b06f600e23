//! Declarative distribution configs.
//!
//! [`ClonerConfig`] is a tagged union keyed by distribution mode; each variant
//! carries only the fields relevant to its mode. A config's mode never changes
//! in place: switching modes goes through [`ClonerConfig::default_for`], which
//! constructs a fresh default for the new mode.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::spline::SplineType;

/// The six distribution modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClonerMode {
    Linear,
    Radial,
    Grid,
    Scatter,
    Spline,
    Object,
}

/// Placement axis for the linear mode.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LinearAxis {
    #[default]
    X,
    Y,
    Z,
    /// Explicit direction; zero-length or non-finite falls back to +X.
    Custom(Vec3),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearConfig {
    pub count: i32,
    pub axis: LinearAxis,
    pub spacing: f32,
    pub offset: Vec3,
    /// Per-step geometric scale multiplier: `scale_i = progression^i`.
    pub scale_progression: f32,
    /// Degrees added per step to every rotation axis.
    pub rotation_progression_deg: f32,
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self {
            count: 5,
            axis: LinearAxis::X,
            spacing: 2.0,
            offset: Vec3::ZERO,
            scale_progression: 1.0,
            rotation_progression_deg: 0.0,
        }
    }
}

/// Plane the radial circle lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RadialPlane {
    Xy,
    #[default]
    Xz,
    Yz,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpiralConfig {
    pub enabled: bool,
    /// Height gained along the plane normal per full revolution.
    pub height_per_revolution: f32,
    /// Radius gained per full revolution.
    pub radius_growth: f32,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RadialConfig {
    pub count: i32,
    pub radius: f32,
    pub plane: RadialPlane,
    pub start_angle_deg: f32,
    pub end_angle_deg: f32,
    /// Point each instance's local forward axis away from the center.
    pub align_to_radius: bool,
    pub spiral: SpiralConfig,
}

impl Default for RadialConfig {
    fn default() -> Self {
        Self {
            count: 8,
            radius: 4.0,
            plane: RadialPlane::Xz,
            start_angle_deg: 0.0,
            end_angle_deg: 360.0,
            align_to_radius: false,
            spiral: SpiralConfig::default(),
        }
    }
}

/// Volume mask applied to a generated grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GridShape {
    /// No filtering.
    #[default]
    Box,
    /// Ellipsoid inscribed in the grid's extents.
    Sphere,
    /// Y-axis cylinder inscribed in the grid's extents.
    Cylinder,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    pub count_x: i32,
    pub count_y: i32,
    pub count_z: i32,
    pub spacing: Vec3,
    /// Center the grid's bounding box at the origin.
    pub centered: bool,
    pub shape: GridShape,
    /// `[0, 1]` per-instance uniform scale perturbation, seeded.
    pub scale_variation: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            count_x: 3,
            count_y: 1,
            count_z: 3,
            spacing: Vec3::splat(2.0),
            centered: true,
            shape: GridShape::Box,
            scale_variation: 0.0,
        }
    }
}

/// Region scatter positions are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScatterVolume {
    Box { min: Vec3, max: Vec3 },
    Sphere { center: Vec3, radius: f32 },
}

impl Default for ScatterVolume {
    fn default() -> Self {
        ScatterVolume::Box {
            min: Vec3::new(-5.0, 0.0, -5.0),
            max: Vec3::new(5.0, 0.0, 5.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScatterConfig {
    pub count: i32,
    pub volume: ScatterVolume,
    pub min_scale: f32,
    pub max_scale: f32,
    /// One scale draw for all axes instead of three.
    pub uniform_scale: bool,
    /// Randomize each rotation axis in `[0, 2π)`.
    pub random_rotation: bool,
    /// Rejection-sample positions closer than `min_distance` to an accepted one.
    pub avoid_overlap: bool,
    pub min_distance: f32,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            count: 50,
            volume: ScatterVolume::default(),
            min_scale: 0.5,
            max_scale: 1.5,
            uniform_scale: true,
            random_rotation: false,
            avoid_overlap: false,
            min_distance: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplineConfig {
    pub control_points: Vec<Vec3>,
    pub spline_type: SplineType,
    /// Catmull-Rom tension in `[0, 1]`.
    pub tension: f32,
    pub count: i32,
    /// Space instances by arc length instead of raw parameter.
    pub distribute_evenly: bool,
    /// Orient each instance's local forward axis along the tangent.
    pub align_to_spline: bool,
}

impl Default for SplineConfig {
    fn default() -> Self {
        Self {
            control_points: vec![
                Vec3::new(-4.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 4.0),
                Vec3::new(4.0, 0.0, 0.0),
            ],
            spline_type: SplineType::CatmullRom,
            tension: 0.5,
            count: 10,
            distribute_evenly: true,
            align_to_spline: true,
        }
    }
}

/// Which elements of the source geometry receive instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObjectTarget {
    #[default]
    Vertices,
    Faces,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectConfig {
    pub target: ObjectTarget,
    /// Orient each instance's local forward axis along the surface normal.
    pub align_to_normal: bool,
    /// Uniform multiplier applied to every instance.
    pub scale: f32,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            target: ObjectTarget::Vertices,
            align_to_normal: true,
            scale: 1.0,
        }
    }
}

/// Distribution config, one variant per mode.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClonerConfig {
    Linear(LinearConfig),
    Radial(RadialConfig),
    Grid(GridConfig),
    Scatter(ScatterConfig),
    Spline(SplineConfig),
    Object(ObjectConfig),
}

impl Default for ClonerConfig {
    fn default() -> Self {
        ClonerConfig::Linear(LinearConfig::default())
    }
}

impl ClonerConfig {
    /// Fresh default config for `mode`; the path the UI takes when switching
    /// modes, instead of mutating fields in place.
    pub fn default_for(mode: ClonerMode) -> Self {
        match mode {
            ClonerMode::Linear => ClonerConfig::Linear(LinearConfig::default()),
            ClonerMode::Radial => ClonerConfig::Radial(RadialConfig::default()),
            ClonerMode::Grid => ClonerConfig::Grid(GridConfig::default()),
            ClonerMode::Scatter => ClonerConfig::Scatter(ScatterConfig::default()),
            ClonerMode::Spline => ClonerConfig::Spline(SplineConfig::default()),
            ClonerMode::Object => ClonerConfig::Object(ObjectConfig::default()),
        }
    }

    pub fn mode(&self) -> ClonerMode {
        match self {
            ClonerConfig::Linear(_) => ClonerMode::Linear,
            ClonerConfig::Radial(_) => ClonerMode::Radial,
            ClonerConfig::Grid(_) => ClonerMode::Grid,
            ClonerConfig::Scatter(_) => ClonerMode::Scatter,
            ClonerConfig::Spline(_) => ClonerMode::Spline,
            ClonerConfig::Object(_) => ClonerMode::Object,
        }
    }

    /// Advisory validation for UI callers. Evaluation itself degrades on bad
    /// input instead of erroring; this reports what it would degrade on.
    pub fn validate(&self) -> Result<()> {
        match self {
            ClonerConfig::Linear(c) => {
                require_finite("spacing", c.spacing)?;
                require_finite_vec("offset", c.offset)?;
                require_finite("scale_progression", c.scale_progression)?;
                require_finite("rotation_progression_deg", c.rotation_progression_deg)?;
                if let LinearAxis::Custom(dir) = c.axis {
                    require_finite_vec("custom direction", dir)?;
                }
            }
            ClonerConfig::Radial(c) => {
                require_finite("radius", c.radius)?;
                require_finite("start_angle_deg", c.start_angle_deg)?;
                require_finite("end_angle_deg", c.end_angle_deg)?;
                require_finite("height_per_revolution", c.spiral.height_per_revolution)?;
                require_finite("radius_growth", c.spiral.radius_growth)?;
            }
            ClonerConfig::Grid(c) => {
                require_finite_vec("spacing", c.spacing)?;
                require_finite("scale_variation", c.scale_variation)?;
            }
            ClonerConfig::Scatter(c) => {
                match c.volume {
                    ScatterVolume::Box { min, max } => {
                        require_finite_vec("box min", min)?;
                        require_finite_vec("box max", max)?;
                    }
                    ScatterVolume::Sphere { center, radius } => {
                        require_finite_vec("sphere center", center)?;
                        require_finite("sphere radius", radius)?;
                    }
                }
                require_finite("min_scale", c.min_scale)?;
                require_finite("max_scale", c.max_scale)?;
                require_finite("min_distance", c.min_distance)?;
            }
            ClonerConfig::Spline(c) => {
                require_finite("tension", c.tension)?;
                for (i, p) in c.control_points.iter().enumerate() {
                    if !p.is_finite() {
                        return Err(Error::InvalidConfig(format!(
                            "control point {i} is not finite"
                        )));
                    }
                }
            }
            ClonerConfig::Object(c) => {
                require_finite("scale", c.scale)?;
            }
        }
        Ok(())
    }
}

fn require_finite(name: &str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!("{name} is not finite")))
    }
}

fn require_finite_vec(name: &str, value: Vec3) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!("{name} is not finite")))
    }
}
