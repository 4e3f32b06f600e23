//! Stepped (every-Nth-instance) grouping.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::effector::Affects;
use crate::instance::{ClonerInstance, Color};

/// Groups instances into consecutive buckets of `step_size` and varies each
/// bucket deterministically: additive deltas scaled by the bucket index, an
/// odd-bucket visibility toggle, and a color palette cycled per bucket.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepEffector {
    pub id: String,
    pub enabled: bool,
    pub strength: f32,
    pub affects: Affects,
    /// Instances per bucket; values below 1 are treated as 1.
    pub step_size: i32,
    /// Shift of the first bucket boundary, in instances.
    pub offset: i32,
    /// Position delta added once per bucket index.
    pub position_step: Vec3,
    /// Rotation delta per bucket index, in degrees.
    pub rotation_step_deg: Vec3,
    /// Scale delta per bucket index.
    pub scale_step: Vec3,
    /// Hide every odd bucket.
    pub alternate_visibility: bool,
    /// Palette cycled by bucket index; empty leaves color untouched.
    pub colors: Vec<Color>,
}

impl StepEffector {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            enabled: true,
            strength: 1.0,
            affects: Affects::default(),
            step_size: 2,
            offset: 0,
            position_step: Vec3::ZERO,
            rotation_step_deg: Vec3::ZERO,
            scale_step: Vec3::ZERO,
            alternate_visibility: false,
            colors: Vec::new(),
        }
    }

    fn bucket(&self, index: u32) -> i64 {
        let step = i64::from(self.step_size.max(1));
        let shifted = i64::from(index) + i64::from(self.offset);
        shifted.div_euclid(step)
    }
}

pub(crate) fn apply(effector: &StepEffector, instances: &mut [ClonerInstance]) {
    let affects = effector.affects;
    let strength = effector.strength;

    for instance in instances.iter_mut() {
        let bucket = effector.bucket(instance.index);
        let factor = bucket as f32 * strength;

        if affects.position && effector.position_step.is_finite() {
            instance.position += effector.position_step * factor;
        }
        if affects.rotation && effector.rotation_step_deg.is_finite() {
            instance.rotation += Vec3::new(
                effector.rotation_step_deg.x.to_radians(),
                effector.rotation_step_deg.y.to_radians(),
                effector.rotation_step_deg.z.to_radians(),
            ) * factor;
        }
        if affects.scale && effector.scale_step.is_finite() {
            instance.scale += effector.scale_step * factor;
        }
        if affects.visibility && effector.alternate_visibility && bucket.rem_euclid(2) == 1 {
            instance.visible = false;
        }
        if affects.color && !effector.colors.is_empty() {
            let palette_index = bucket.rem_euclid(effector.colors.len() as i64) as usize;
            instance.color = Some(effector.colors[palette_index]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::BaseInstance;

    fn line(count: u32) -> Vec<ClonerInstance> {
        (0..count)
            .map(|i| BaseInstance::at(i, Vec3::new(i as f32, 0.0, 0.0)).into())
            .collect()
    }

    #[test]
    fn buckets_are_consecutive_runs() {
        let mut eff = StepEffector::new("s");
        eff.step_size = 3;
        assert_eq!(eff.bucket(0), 0);
        assert_eq!(eff.bucket(2), 0);
        assert_eq!(eff.bucket(3), 1);
        assert_eq!(eff.bucket(8), 2);
    }

    #[test]
    fn offset_shifts_the_first_boundary() {
        let mut eff = StepEffector::new("s");
        eff.step_size = 3;
        eff.offset = 2;
        assert_eq!(eff.bucket(0), 0);
        assert_eq!(eff.bucket(1), 1);
        assert_eq!(eff.bucket(3), 1);
    }

    #[test]
    fn negative_offset_uses_euclidean_division() {
        let mut eff = StepEffector::new("s");
        eff.step_size = 2;
        eff.offset = -1;
        assert_eq!(eff.bucket(0), -1);
        assert_eq!(eff.bucket(1), 0);
    }

    #[test]
    fn position_step_accumulates_per_bucket() {
        let mut eff = StepEffector::new("s");
        eff.step_size = 2;
        eff.position_step = Vec3::new(0.0, 1.0, 0.0);

        let mut out = line(6);
        apply(&eff, &mut out);
        assert_eq!(out[0].position.y, 0.0);
        assert_eq!(out[1].position.y, 0.0);
        assert_eq!(out[2].position.y, 1.0);
        assert_eq!(out[5].position.y, 2.0);
    }

    #[test]
    fn alternate_visibility_hides_odd_buckets() {
        let mut eff = StepEffector::new("s");
        eff.step_size = 2;
        eff.alternate_visibility = true;
        eff.affects = Affects {
            visibility: true,
            ..Affects::none()
        };

        let mut out = line(8);
        apply(&eff, &mut out);
        let visible: Vec<bool> = out.iter().map(|i| i.visible).collect();
        assert_eq!(
            visible,
            vec![true, true, false, false, true, true, false, false]
        );
    }

    #[test]
    fn palette_cycles_by_bucket() {
        let mut eff = StepEffector::new("s");
        eff.step_size = 1;
        eff.affects = Affects {
            color: true,
            ..Affects::none()
        };
        eff.colors = vec![Color::new(1.0, 0.0, 0.0), Color::new(0.0, 0.0, 1.0)];

        let mut out = line(4);
        apply(&eff, &mut out);
        assert_eq!(out[0].color, Some(Color::new(1.0, 0.0, 0.0)));
        assert_eq!(out[1].color, Some(Color::new(0.0, 0.0, 1.0)));
        assert_eq!(out[2].color, Some(Color::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn zero_step_size_is_clamped_to_one() {
        let mut eff = StepEffector::new("s");
        eff.step_size = 0;
        assert_eq!(eff.bucket(5), 5);
    }
}
