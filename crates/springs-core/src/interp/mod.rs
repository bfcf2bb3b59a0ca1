//! Interpolation engine: declarative range configuration, extrapolation
//! policies, and the tagged dispatch over the three call shapes
//! (custom function / range config / parallel arrays).
//!
//! Ranges are validated and pre-parsed when they are built; evaluation is
//! a bounded ordered-segment search plus one linear blend per tick.

pub mod functions;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::StringTemplate;
use crate::error::SpringError;
use crate::value::{Value, ValueKind};
use self::functions::{bezier_ease_t, lerp_f32};

/// Behavior for inputs outside the configured breakpoint range.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Extrapolate {
    /// Continue the linear slope of the nearest segment.
    #[default]
    Extend,
    /// Pin to the nearest output.
    Clamp,
    /// Pass the raw input through unchanged (numeric outputs only).
    Identity,
}

/// A scalar output as written in declarative configs (plain JSON forms,
/// not the tagged `Value` representation).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum OutputValue {
    Number(f32),
    Text(String),
}

impl From<OutputValue> for Value {
    fn from(v: OutputValue) -> Self {
        match v {
            OutputValue::Number(n) => Value::Number(n),
            OutputValue::Text(s) => Value::Text(s),
        }
    }
}

/// Serializable declarative interpolation config:
/// `{ "range": [0, 1], "output": ["yellow", "red"], "extrapolate": "clamp" }`.
///
/// `extrapolate` sets both edges; `extrapolateLeft`/`extrapolateRight`
/// override per edge. `easing` is an optional cubic-bezier (x1, y1, x2, y2)
/// applied to the fractional position within each segment.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RangeConfig {
    pub range: Vec<f32>,
    pub output: Vec<OutputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extrapolate: Option<Extrapolate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extrapolate_left: Option<Extrapolate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extrapolate_right: Option<Extrapolate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<[f32; 4]>,
}

impl RangeConfig {
    /// Validate into an immutable [`InterpolationRange`].
    pub fn into_range(self) -> Result<InterpolationRange, SpringError> {
        let both = self.extrapolate.unwrap_or_default();
        let left = self.extrapolate_left.unwrap_or(both);
        let right = self.extrapolate_right.unwrap_or(both);
        let outputs: Vec<Value> = self.output.into_iter().map(Value::from).collect();
        let mut range =
            InterpolationRange::new(self.range, outputs)?.with_extrapolate(left, right)?;
        if let Some(ctrl) = self.easing {
            range = range.with_easing(ctrl);
        }
        Ok(range)
    }
}

#[derive(Clone, Debug)]
enum RangeOutputs {
    Numbers(Vec<f32>),
    Strings(Vec<StringTemplate>),
}

/// Validated, immutable range mapping. All configuration errors surface
/// here, at construction; `eval` cannot fail.
#[derive(Clone, Debug)]
pub struct InterpolationRange {
    breakpoints: Vec<f32>,
    outputs: RangeOutputs,
    extrapolate_left: Extrapolate,
    extrapolate_right: Extrapolate,
    easing: Option<[f32; 4]>,
}

impl InterpolationRange {
    /// Build a range with `Extend` on both edges and no easing.
    pub fn new(breakpoints: Vec<f32>, outputs: Vec<Value>) -> Result<Self, SpringError> {
        if breakpoints.len() != outputs.len() {
            return Err(SpringError::LengthMismatch {
                breakpoints: breakpoints.len(),
                outputs: outputs.len(),
            });
        }
        if breakpoints.len() < 2 {
            return Err(SpringError::RangeTooShort(breakpoints.len()));
        }
        for i in 1..breakpoints.len() {
            if breakpoints[i] <= breakpoints[i - 1] {
                return Err(SpringError::NonIncreasingBreakpoints { index: i });
            }
        }
        let expected = outputs[0].kind();
        for (i, out) in outputs.iter().enumerate() {
            if out.kind() != expected {
                return Err(SpringError::MixedOutputKinds {
                    expected,
                    got: out.kind(),
                    index: i,
                });
            }
        }
        let outputs = match expected {
            ValueKind::Number => RangeOutputs::Numbers(
                outputs.iter().map(Value::as_number).collect(),
            ),
            ValueKind::Text => {
                let templates: Vec<StringTemplate> = outputs
                    .iter()
                    .map(|v| match v {
                        Value::Text(s) => StringTemplate::parse(s),
                        _ => unreachable!("homogeneous outputs checked above"),
                    })
                    .collect();
                StringTemplate::ensure_compatible(&templates)?;
                RangeOutputs::Strings(templates)
            }
            ValueKind::List => return Err(SpringError::UnsupportedOutputKind(expected)),
        };
        Ok(Self {
            breakpoints,
            outputs,
            extrapolate_left: Extrapolate::Extend,
            extrapolate_right: Extrapolate::Extend,
            easing: None,
        })
    }

    /// Set the edge policies. `Identity` is only legal for numeric outputs.
    pub fn with_extrapolate(
        mut self,
        left: Extrapolate,
        right: Extrapolate,
    ) -> Result<Self, SpringError> {
        let identity = left == Extrapolate::Identity || right == Extrapolate::Identity;
        if identity && !matches!(self.outputs, RangeOutputs::Numbers(_)) {
            return Err(SpringError::IdentityNeedsNumbers);
        }
        self.extrapolate_left = left;
        self.extrapolate_right = right;
        Ok(self)
    }

    /// Apply a cubic-bezier timing curve (x1, y1, x2, y2) to the in-range
    /// fractional position of each segment. Extrapolated inputs stay linear.
    pub fn with_easing(mut self, ctrl: [f32; 4]) -> Self {
        self.easing = Some(ctrl);
        self
    }

    /// The shape of values this range produces.
    pub fn output_kind(&self) -> ValueKind {
        match self.outputs {
            RangeOutputs::Numbers(_) => ValueKind::Number,
            RangeOutputs::Strings(_) => ValueKind::Text,
        }
    }

    /// Map a numeric input through the range. Ordered scan for the segment
    /// containing `input` (breakpoint counts are small), then a linear
    /// blend of the fractional position into the output segment.
    pub fn eval(&self, input: f32) -> Value {
        let bp = &self.breakpoints;
        let n = bp.len();
        let mut i = 0;
        while i < n - 2 && bp[i + 1] <= input {
            i += 1;
        }
        let denom = (bp[i + 1] - bp[i]).max(f32::EPSILON);
        let mut t = (input - bp[i]) / denom;
        if input < bp[0] {
            match self.extrapolate_left {
                Extrapolate::Identity => return Value::Number(input),
                Extrapolate::Clamp => t = 0.0,
                Extrapolate::Extend => {}
            }
        } else if input > bp[n - 1] {
            match self.extrapolate_right {
                Extrapolate::Identity => return Value::Number(input),
                Extrapolate::Clamp => t = 1.0,
                Extrapolate::Extend => {}
            }
        }
        if let Some([x1, y1, x2, y2]) = self.easing {
            if (0.0..=1.0).contains(&t) {
                t = bezier_ease_t(t, x1, y1, x2, y2);
            }
        }
        match &self.outputs {
            RangeOutputs::Numbers(o) => Value::Number(lerp_f32(o[i], o[i + 1], t)),
            RangeOutputs::Strings(o) => Value::Text(o[i].blend(&o[i + 1], t)),
        }
    }
}

/// Tagged dispatch over the three interpolation call shapes.
pub enum InterpolateSpec {
    /// Pure mapping from the current upstream value.
    Function(Box<dyn Fn(&Value) -> Value>),
    /// Pure mapping from the spread elements of a list upstream.
    /// Using this on a scalar upstream is a construction-time shape error.
    Elements(Box<dyn Fn(&[Value]) -> Value>),
    /// Declarative range mapping over a numeric upstream.
    Range(InterpolationRange),
}

impl fmt::Debug for InterpolateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolateSpec::Function(_) => f.write_str("InterpolateSpec::Function(..)"),
            InterpolateSpec::Elements(_) => f.write_str("InterpolateSpec::Elements(..)"),
            InterpolateSpec::Range(r) => f.debug_tuple("InterpolateSpec::Range").field(r).finish(),
        }
    }
}

impl InterpolateSpec {
    pub fn func(f: impl Fn(&Value) -> Value + 'static) -> Self {
        InterpolateSpec::Function(Box::new(f))
    }

    pub fn elements(f: impl Fn(&[Value]) -> Value + 'static) -> Self {
        InterpolateSpec::Elements(Box::new(f))
    }

    /// Parallel-arrays sugar: breakpoints and outputs, `Extend` both edges.
    pub fn arrays(breakpoints: Vec<f32>, outputs: Vec<Value>) -> Result<Self, SpringError> {
        Ok(InterpolateSpec::Range(InterpolationRange::new(
            breakpoints,
            outputs,
        )?))
    }

    /// Apply one derivation step to an upstream value.
    pub(crate) fn apply(&self, input: &Value) -> Value {
        match self {
            InterpolateSpec::Function(f) => f(input),
            InterpolateSpec::Elements(f) => match input {
                Value::List(items) => f(items),
                other => {
                    // Construction only attaches element steps to list
                    // upstreams; a scalar here means an upstream step broke
                    // its declared shape.
                    debug_assert!(false, "element step applied to {:?}", other.kind());
                    f(std::slice::from_ref(other))
                }
            },
            InterpolateSpec::Range(r) => r.eval(input.as_number()),
        }
    }
}
