/// Live-tunable parameters and their debug-panel bindings.

use orrery_engine::*;
use crate::camera_rig::CameraMode;

pub const EARTH_ROTATION_RATE: &str = "earthRotationRate";
pub const TRANSLATIONS_PER_SECOND: &str = "translationsPerSecond";
pub const VIEW: &str = "view";
pub const CAMERA_HEIGHT: &str = "cameraHeight";
pub const AMBIENT_LIGHT: &str = "ambientLight";

pub const EARTH_ROTATION_RANGE: RangeSpec = RangeSpec::new(0.5, 30.0, 0.1);
pub const TRANSLATIONS_RANGE: RangeSpec = RangeSpec::new(0.01, 1.0, 0.01);
pub const CAMERA_HEIGHT_RANGE: RangeSpec = RangeSpec::new(10.0, 300.0, 2.0);

/// Values the frame loop reads fresh every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Tunables {
    /// Earth spin, radians per second.
    pub earth_rotation_rate: f64,
    /// Earth revolutions per second.
    pub translations_per_second: f64,
    pub view: CameraMode,
    /// Height of the locked views above the orbital plane.
    pub camera_height: f64,
    pub ambient_light: bool,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            earth_rotation_rate: 0.5,
            translations_per_second: 0.01,
            view: CameraMode::Free,
            camera_height: 128.0,
            ambient_light: false,
        }
    }
}

impl Tunables {
    pub fn controls(&self) -> Vec<ControlSpec> {
        vec![
            ControlSpec::range(EARTH_ROTATION_RATE, "Earth rotation rate", EARTH_ROTATION_RANGE, self.earth_rotation_rate),
            ControlSpec::range(TRANSLATIONS_PER_SECOND, "Translations per second", TRANSLATIONS_RANGE, self.translations_per_second),
            ControlSpec::choice(VIEW, "View", &CameraMode::names(), self.view.name()),
            ControlSpec::range(CAMERA_HEIGHT, "Camera height", CAMERA_HEIGHT_RANGE, self.camera_height),
            ControlSpec::toggle(AMBIENT_LIGHT, "Ambient light", self.ambient_light),
        ]
    }

    /// Apply one edit. Numbers are clamped and snapped to the slider step.
    /// On error nothing changes.
    pub fn apply(&mut self, key: &str, value: ControlValue) -> Result<(), EngineError> {
        match key {
            EARTH_ROTATION_RATE => {
                self.earth_rotation_rate = EARTH_ROTATION_RANGE.constrain(value.as_number(key)?);
            }
            TRANSLATIONS_PER_SECOND => {
                self.translations_per_second = TRANSLATIONS_RANGE.constrain(value.as_number(key)?);
            }
            CAMERA_HEIGHT => {
                self.camera_height = CAMERA_HEIGHT_RANGE.constrain(value.as_number(key)?);
            }
            VIEW => {
                let option = value.as_choice(key)?;
                self.view = CameraMode::from_name(option).ok_or_else(|| EngineError::InvalidOption {
                    key: key.to_string(),
                    option: option.to_string(),
                })?;
            }
            AMBIENT_LIGHT => {
                self.ambient_light = value.as_toggle(key)?;
            }
            _ => return Err(EngineError::UnknownControl(key.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_panel_bounds() {
        let t = Tunables::default();
        assert_eq!(EARTH_ROTATION_RANGE.constrain(t.earth_rotation_rate), t.earth_rotation_rate);
        assert_eq!(TRANSLATIONS_RANGE.constrain(t.translations_per_second), t.translations_per_second);
        assert_eq!(CAMERA_HEIGHT_RANGE.constrain(t.camera_height), t.camera_height);
        assert_eq!(t.view, CameraMode::Free);
    }

    #[test]
    fn numbers_are_clamped_and_snapped() {
        let mut t = Tunables::default();
        t.apply(CAMERA_HEIGHT, ControlValue::Number(1000.0)).unwrap();
        assert_eq!(t.camera_height, 300.0);
        t.apply(CAMERA_HEIGHT, ControlValue::Number(51.0)).unwrap();
        assert!(t.camera_height == 50.0 || t.camera_height == 52.0);
        t.apply(EARTH_ROTATION_RATE, ControlValue::Number(-4.0)).unwrap();
        assert_eq!(t.earth_rotation_rate, 0.5);
        t.apply(TRANSLATIONS_PER_SECOND, ControlValue::Number(0.257)).unwrap();
        assert!((t.translations_per_second - 0.26).abs() < 1e-9);
    }

    #[test]
    fn view_accepts_only_listed_options() {
        let mut t = Tunables::default();
        t.apply(VIEW, ControlValue::Choice("Earth".into())).unwrap();
        assert_eq!(t.view, CameraMode::Earth);

        let err = t.apply(VIEW, ControlValue::Choice("Moon".into())).unwrap_err();
        assert!(matches!(err, EngineError::InvalidOption { ref option, .. } if option == "Moon"));
        assert_eq!(t.view, CameraMode::Earth);
    }

    #[test]
    fn wrong_kinds_and_keys_leave_state_alone() {
        let mut t = Tunables::default();
        let before = t.clone();
        assert!(matches!(
            t.apply(CAMERA_HEIGHT, ControlValue::Toggle(true)),
            Err(EngineError::WrongValueKind { .. })
        ));
        assert!(matches!(
            t.apply("zoom", ControlValue::Number(2.0)),
            Err(EngineError::UnknownControl(_))
        ));
        assert_eq!(t, before);
    }

    #[test]
    fn descriptors_carry_current_values() {
        let mut t = Tunables::default();
        t.apply(AMBIENT_LIGHT, ControlValue::Toggle(true)).unwrap();
        let controls = t.controls();
        let keys: Vec<&str> = controls.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, [EARTH_ROTATION_RATE, TRANSLATIONS_PER_SECOND, VIEW, CAMERA_HEIGHT, AMBIENT_LIGHT]);
        assert_eq!(controls[4].kind, ControlKind::Toggle { value: true });

        let json = controls_to_json(&controls).unwrap();
        assert!(json.contains(r#""options":["You","Sun","Earth"]"#));
        assert!(json.contains(r#""min":10.0"#));
    }
}
