use crate::constants::*;
use crate::error::SceneError;

/// Build-time parameters for a scene. `Default` holds the tuned constants.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub cube_size: f32,
    pub hue_min: f32,
    pub hue_span: f32,
    pub size_min: f32,
    pub size_span: f32,
    pub shape_spin_max: f32,
    pub float_speed_min: f32,
    pub float_speed_span: f32,
    pub float_range_min: f32,
    pub float_range_span: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            cube_size: PARTICLE_CUBE_SIZE,
            hue_min: PARTICLE_HUE_MIN,
            hue_span: PARTICLE_HUE_SPAN,
            size_min: PARTICLE_SIZE_MIN,
            size_span: PARTICLE_SIZE_SPAN,
            shape_spin_max: SHAPE_SPIN_MAX,
            float_speed_min: SHAPE_FLOAT_SPEED_MIN,
            float_speed_span: SHAPE_FLOAT_SPEED_SPAN,
            float_range_min: SHAPE_FLOAT_RANGE_MIN,
            float_range_span: SHAPE_FLOAT_RANGE_SPAN,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), SceneError> {
        let non_negative = [
            ("cube_size", self.cube_size),
            ("hue_span", self.hue_span),
            ("size_min", self.size_min),
            ("size_span", self.size_span),
            ("shape_spin_max", self.shape_spin_max),
            ("float_speed_min", self.float_speed_min),
            ("float_speed_span", self.float_speed_span),
            ("float_range_min", self.float_range_min),
            ("float_range_span", self.float_range_span),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SceneError::InvalidConfig { field, value });
            }
        }
        if !self.hue_min.is_finite() {
            return Err(SceneError::InvalidConfig {
                field: "hue_min",
                value: self.hue_min,
            });
        }
        if self.particle_count == 0 {
            return Err(SceneError::InvalidConfig {
                field: "particle_count",
                value: 0.0,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = SceneConfig::default();
        assert_eq!(cfg.particle_count, 2000);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_negative_and_nan_values() {
        let cfg = SceneConfig {
            size_span: -1.0,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(SceneError::InvalidConfig {
                field: "size_span",
                value: -1.0
            })
        );
        let cfg = SceneConfig {
            hue_min: f32::NAN,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = SceneConfig {
            particle_count: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
