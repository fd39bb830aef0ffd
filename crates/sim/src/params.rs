//! Simulation parameters.
//!
//! All values have defaults matching the reference visualization: a coarse
//! 900-unit grid, 1000 particles, max speed 2, and a subtle per-frame fade
//! for the trailing effect. Validation happens once, at construction;
//! steady-state frames never fail.

use flow_field_core::error::FlowError;
use flow_field_core::params::{param_f64, param_u8, param_usize};
use serde_json::{json, Value};

/// Default particle population.
const DEFAULT_PARTICLE_COUNT: usize = 1000;
/// Default grid cell side length in canvas units.
const DEFAULT_CELL_SIZE: f64 = 900.0;
/// Default noise coordinate scale.
const DEFAULT_NOISE_SCALE: f64 = 1.0;
/// Default per-frame time offset increment.
const DEFAULT_Z_STEP: f64 = 0.01;
/// Default maximum particle speed in canvas units per frame.
const DEFAULT_MAX_SPEED: f64 = 2.0;
/// Default particle draw diameter in canvas units.
const DEFAULT_PARTICLE_DIAMETER: f64 = 2.0;
/// Default particle color alpha.
const DEFAULT_PARTICLE_ALPHA: u8 = 100;
/// Default full-frame fade overlay alpha.
const DEFAULT_FADE_ALPHA: u8 = 10;

/// Tunable parameters for a [`FlowSim`](crate::FlowSim).
#[derive(Debug, Clone, Copy)]
pub struct SimParams {
    /// Number of particles, fixed at construction.
    pub particle_count: usize,
    /// Grid cell side length; larger values give a coarser field.
    pub cell_size: f64,
    /// Scale applied to the x/y noise sampling coordinates.
    pub noise_scale: f64,
    /// Per-frame increment of the time offset driving field evolution.
    pub z_step: f64,
    /// Maximum particle speed; velocity is clamped to this every frame.
    pub max_speed: f64,
    /// Diameter of each drawn particle.
    pub particle_diameter: f64,
    /// Alpha channel of every particle color.
    pub particle_alpha: u8,
    /// Alpha of the per-frame fade overlay (0 disables trails fading).
    pub fade_alpha: u8,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            cell_size: DEFAULT_CELL_SIZE,
            noise_scale: DEFAULT_NOISE_SCALE,
            z_step: DEFAULT_Z_STEP,
            max_speed: DEFAULT_MAX_SPEED,
            particle_diameter: DEFAULT_PARTICLE_DIAMETER,
            particle_alpha: DEFAULT_PARTICLE_ALPHA,
            fade_alpha: DEFAULT_FADE_ALPHA,
        }
    }
}

impl SimParams {
    /// Extracts parameters from a JSON object, falling back to defaults
    /// for missing or mistyped keys. The result still needs
    /// [`validate`](Self::validate).
    pub fn from_json(params: &Value) -> Self {
        Self {
            particle_count: param_usize(params, "particle_count", DEFAULT_PARTICLE_COUNT),
            cell_size: param_f64(params, "cell_size", DEFAULT_CELL_SIZE),
            noise_scale: param_f64(params, "noise_scale", DEFAULT_NOISE_SCALE),
            z_step: param_f64(params, "z_step", DEFAULT_Z_STEP),
            max_speed: param_f64(params, "max_speed", DEFAULT_MAX_SPEED),
            particle_diameter: param_f64(params, "particle_diameter", DEFAULT_PARTICLE_DIAMETER),
            particle_alpha: param_u8(params, "particle_alpha", DEFAULT_PARTICLE_ALPHA),
            fade_alpha: param_u8(params, "fade_alpha", DEFAULT_FADE_ALPHA),
        }
    }

    /// Fail-fast validation of construction parameters.
    pub fn validate(&self) -> Result<(), FlowError> {
        fn positive(name: &'static str, value: f64) -> Result<(), FlowError> {
            if !value.is_finite() || value <= 0.0 {
                return Err(FlowError::InvalidParam {
                    name,
                    reason: format!("must be positive and finite, got {value}"),
                });
            }
            Ok(())
        }

        if self.particle_count == 0 {
            return Err(FlowError::InvalidParam {
                name: "particle_count",
                reason: "must be at least 1".into(),
            });
        }
        positive("cell_size", self.cell_size)?;
        positive("noise_scale", self.noise_scale)?;
        positive("max_speed", self.max_speed)?;
        positive("particle_diameter", self.particle_diameter)?;
        if !self.z_step.is_finite() {
            return Err(FlowError::InvalidParam {
                name: "z_step",
                reason: format!("must be finite, got {}", self.z_step),
            });
        }
        Ok(())
    }

    /// Current parameter values as a JSON object.
    pub fn to_json(&self) -> Value {
        json!({
            "particle_count": self.particle_count,
            "cell_size": self.cell_size,
            "noise_scale": self.noise_scale,
            "z_step": self.z_step,
            "max_speed": self.max_speed,
            "particle_diameter": self.particle_diameter,
            "particle_alpha": self.particle_alpha,
            "fade_alpha": self.fade_alpha,
        })
    }

    /// Schema describing every parameter: type, default, range, description.
    pub fn schema() -> Value {
        json!({
            "particle_count": {
                "type": "integer",
                "default": DEFAULT_PARTICLE_COUNT,
                "min": 1,
                "description": "Number of particles, fixed at construction"
            },
            "cell_size": {
                "type": "number",
                "default": DEFAULT_CELL_SIZE,
                "min": 1.0,
                "description": "Grid cell side length in canvas units"
            },
            "noise_scale": {
                "type": "number",
                "default": DEFAULT_NOISE_SCALE,
                "min": 0.0001,
                "description": "Scale applied to noise sampling coordinates"
            },
            "z_step": {
                "type": "number",
                "default": DEFAULT_Z_STEP,
                "description": "Per-frame increment of the field time offset"
            },
            "max_speed": {
                "type": "number",
                "default": DEFAULT_MAX_SPEED,
                "min": 0.0001,
                "description": "Maximum particle speed per frame"
            },
            "particle_diameter": {
                "type": "number",
                "default": DEFAULT_PARTICLE_DIAMETER,
                "min": 0.0001,
                "description": "Diameter of each drawn particle"
            },
            "particle_alpha": {
                "type": "integer",
                "default": DEFAULT_PARTICLE_ALPHA,
                "min": 0,
                "max": 255,
                "description": "Alpha channel of every particle color"
            },
            "fade_alpha": {
                "type": "integer",
                "default": DEFAULT_FADE_ALPHA,
                "min": 0,
                "max": 255,
                "description": "Alpha of the per-frame fade overlay"
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_values() {
        let p = SimParams::default();
        assert_eq!(p.particle_count, 1000);
        assert!((p.cell_size - 900.0).abs() < f64::EPSILON);
        assert!((p.noise_scale - 1.0).abs() < f64::EPSILON);
        assert!((p.z_step - 0.01).abs() < f64::EPSILON);
        assert!((p.max_speed - 2.0).abs() < f64::EPSILON);
        assert!((p.particle_diameter - 2.0).abs() < f64::EPSILON);
        assert_eq!(p.particle_alpha, 100);
        assert_eq!(p.fade_alpha, 10);
    }

    #[test]
    fn defaults_validate() {
        assert!(SimParams::default().validate().is_ok());
    }

    #[test]
    fn from_json_empty_object_gives_defaults() {
        let p = SimParams::from_json(&json!({}));
        assert_eq!(p.particle_count, 1000);
        assert!((p.cell_size - 900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn from_json_extracts_custom_values() {
        let p = SimParams::from_json(&json!({
            "particle_count": 50,
            "cell_size": 20.0,
            "max_speed": 4.0,
            "fade_alpha": 0,
        }));
        assert_eq!(p.particle_count, 50);
        assert!((p.cell_size - 20.0).abs() < f64::EPSILON);
        assert!((p.max_speed - 4.0).abs() < f64::EPSILON);
        assert_eq!(p.fade_alpha, 0);
        // Untouched keys keep defaults
        assert!((p.z_step - 0.01).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_rejects_zero_particle_count() {
        let p = SimParams {
            particle_count: 0,
            ..SimParams::default()
        };
        assert!(matches!(
            p.validate(),
            Err(FlowError::InvalidParam { name: "particle_count", .. })
        ));
    }

    #[test]
    fn validate_rejects_non_positive_cell_size() {
        for cell_size in [0.0, -900.0, f64::NAN, f64::INFINITY] {
            let p = SimParams {
                cell_size,
                ..SimParams::default()
            };
            assert!(p.validate().is_err(), "cell_size {cell_size} passed");
        }
    }

    #[test]
    fn validate_rejects_non_positive_max_speed() {
        let p = SimParams {
            max_speed: 0.0,
            ..SimParams::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_z_step() {
        let p = SimParams {
            z_step: f64::NAN,
            ..SimParams::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn zero_z_step_is_allowed() {
        // A frozen field is valid: the grid simply never evolves
        let p = SimParams {
            z_step: 0.0,
            ..SimParams::default()
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn to_json_round_trips_through_from_json() {
        let original = SimParams {
            particle_count: 7,
            cell_size: 123.0,
            noise_scale: 0.5,
            z_step: 0.02,
            max_speed: 3.0,
            particle_diameter: 1.5,
            particle_alpha: 99,
            fade_alpha: 20,
        };
        let restored = SimParams::from_json(&original.to_json());
        assert_eq!(restored.particle_count, original.particle_count);
        assert!((restored.cell_size - original.cell_size).abs() < f64::EPSILON);
        assert!((restored.noise_scale - original.noise_scale).abs() < f64::EPSILON);
        assert!((restored.z_step - original.z_step).abs() < f64::EPSILON);
        assert!((restored.max_speed - original.max_speed).abs() < f64::EPSILON);
        assert_eq!(restored.particle_alpha, original.particle_alpha);
        assert_eq!(restored.fade_alpha, original.fade_alpha);
    }

    #[test]
    fn schema_covers_every_parameter() {
        let schema = SimParams::schema();
        for key in [
            "particle_count",
            "cell_size",
            "noise_scale",
            "z_step",
            "max_speed",
            "particle_diameter",
            "particle_alpha",
            "fade_alpha",
        ] {
            assert!(schema.get(key).is_some(), "schema missing {key}");
            assert!(schema[key].get("type").is_some(), "{key} missing type");
            assert!(schema[key].get("default").is_some(), "{key} missing default");
            assert!(
                schema[key].get("description").is_some(),
                "{key} missing description"
            );
        }
    }
}
