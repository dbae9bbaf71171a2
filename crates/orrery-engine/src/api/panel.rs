//! Debug-panel control descriptors.
//!
//! A game describes its live-editable parameters as a list of `ControlSpec`s.
//! The host serializes them to JSON, builds its panel widgets from them, and
//! feeds edits back through `Game::set_control`.

use serde::Serialize;
use crate::api::error::EngineError;

/// Bounds and step of a numeric slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl RangeSpec {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp into `[min, max]` and snap to the nearest step counted from `min`,
    /// the same way the panel slider quantizes what the user drags.
    pub fn constrain(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }
}

/// Widget kind plus its current value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ControlKind {
    Range {
        #[serde(flatten)]
        range: RangeSpec,
        value: f64,
    },
    Choice {
        options: Vec<String>,
        value: String,
    },
    Toggle {
        value: bool,
    },
}

/// One entry in the debug panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlSpec {
    /// Property name the host uses when sending edits back.
    pub key: String,
    /// Human-readable label.
    pub label: String,
    #[serde(flatten)]
    pub kind: ControlKind,
}

impl ControlSpec {
    pub fn range(key: &str, label: &str, range: RangeSpec, value: f64) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: ControlKind::Range { range, value },
        }
    }

    pub fn choice(key: &str, label: &str, options: &[&str], value: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: ControlKind::Choice {
                options: options.iter().map(|o| o.to_string()).collect(),
                value: value.to_string(),
            },
        }
    }

    pub fn toggle(key: &str, label: &str, value: bool) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: ControlKind::Toggle { value },
        }
    }
}

/// A value sent by the host panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlValue {
    Number(f64),
    Choice(String),
    Toggle(bool),
}

impl ControlValue {
    pub fn as_number(&self, key: &str) -> Result<f64, EngineError> {
        match self {
            ControlValue::Number(v) => Ok(*v),
            _ => Err(EngineError::WrongValueKind { key: key.to_string(), expected: "number" }),
        }
    }

    pub fn as_choice(&self, key: &str) -> Result<&str, EngineError> {
        match self {
            ControlValue::Choice(v) => Ok(v),
            _ => Err(EngineError::WrongValueKind { key: key.to_string(), expected: "choice" }),
        }
    }

    pub fn as_toggle(&self, key: &str) -> Result<bool, EngineError> {
        match self {
            ControlValue::Toggle(v) => Ok(*v),
            _ => Err(EngineError::WrongValueKind { key: key.to_string(), expected: "toggle" }),
        }
    }
}

/// Serialize a control list to the JSON the host panel consumes.
pub fn controls_to_json(controls: &[ControlSpec]) -> Result<String, EngineError> {
    Ok(serde_json::to_string(controls)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_clamps_to_bounds() {
        let range = RangeSpec::new(10.0, 300.0, 2.0);
        assert_eq!(range.constrain(-5.0), 10.0);
        assert_eq!(range.constrain(1000.0), 300.0);
    }

    #[test]
    fn constrain_snaps_to_step() {
        let range = RangeSpec::new(10.0, 300.0, 2.0);
        assert_eq!(range.constrain(51.0), 52.0);
        assert_eq!(range.constrain(50.9), 50.0);

        let fine = RangeSpec::new(0.01, 1.0, 0.01);
        assert!((fine.constrain(0.504) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn constrain_nan_falls_back_to_min() {
        let range = RangeSpec::new(0.5, 30.0, 0.1);
        assert_eq!(range.constrain(f64::NAN), 0.5);
    }

    #[test]
    fn value_kind_mismatch_is_an_error() {
        let value = ControlValue::Toggle(true);
        assert!(value.as_number("cameraHeight").is_err());
        assert_eq!(ControlValue::Number(4.0).as_number("cameraHeight").unwrap(), 4.0);
        assert_eq!(ControlValue::Choice("Sun".into()).as_choice("view").unwrap(), "Sun");
    }

    #[test]
    fn serializes_flat_json() {
        let controls = vec![
            ControlSpec::range("cameraHeight", "Camera height", RangeSpec::new(10.0, 300.0, 2.0), 128.0),
            ControlSpec::choice("view", "View", &["You", "Sun"], "You"),
            ControlSpec::toggle("ambientLight", "Ambient light", false),
        ];
        let json = controls_to_json(&controls).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[0]["type"], "range");
        assert_eq!(parsed[0]["min"], 10.0);
        assert_eq!(parsed[0]["value"], 128.0);
        assert_eq!(parsed[1]["type"], "choice");
        assert_eq!(parsed[1]["options"][1], "Sun");
        assert_eq!(parsed[2]["type"], "toggle");
        assert_eq!(parsed[2]["value"], false);
    }
}
