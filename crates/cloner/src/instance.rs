//! Per-instance transform values produced by the engine.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGB color attached to an instance by the effector pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Linear blend toward `other` by `t` in `[0, 1]`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

/// An instance transform as produced by a distribution resolver, before any
/// effector has run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BaseInstance {
    /// Stable index of this instance within its cloner.
    pub index: u32,
    pub position: Vec3,
    /// Euler angles in radians, XYZ order.
    pub rotation: Vec3,
    pub scale: Vec3,
    pub visible: bool,
}

impl BaseInstance {
    /// A default instance at `position` with identity rotation and unit scale.
    pub fn at(index: u32, position: Vec3) -> Self {
        Self {
            index,
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            visible: true,
        }
    }
}

/// An instance transform after the effector pipeline; consumed by the
/// rendering collaborator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClonerInstance {
    pub index: u32,
    pub position: Vec3,
    /// Euler angles in radians, XYZ order.
    pub rotation: Vec3,
    pub scale: Vec3,
    pub visible: bool,
    /// Set only when a color-affecting effector has run.
    pub color: Option<Color>,
}

impl From<BaseInstance> for ClonerInstance {
    fn from(base: BaseInstance) -> Self {
        Self {
            index: base.index,
            position: base.position,
            rotation: base.rotation,
            scale: base.scale,
            visible: base.visible,
            color: None,
        }
    }
}
