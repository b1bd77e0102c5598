// Copyright 2026 the Topopath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A transformation that includes both scale and translation.

use std::ops::{Mul, MulAssign};

use crate::{DecodeError, Point};

/// A per-axis scale followed by a translation.
///
/// This is the dataset-wide transform of a quantized topology. If the scale
/// is `(sx, sy)` and the translation is `(tx, ty)`, then this transformation
/// represents this augmented matrix:
///
/// ```text
/// | sx 0  tx |
/// | 0  sy ty |
/// | 0  0  1  |
/// ```
///
/// `TranslateScale * Point` is defined but not the other way around, and
/// `a * b` applies `b` first.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTransform", into = "RawTransform")
)]
pub struct TranslateScale {
    scale: [f64; 2],
    translate: [f64; 2],
}

impl TranslateScale {
    /// The identity transform.
    pub const IDENTITY: TranslateScale = TranslateScale::new([1.0, 1.0], [0.0, 0.0]);

    /// Create a new transformation from scale and translation.
    #[inline]
    pub const fn new(scale: [f64; 2], translate: [f64; 2]) -> TranslateScale {
        TranslateScale { scale, translate }
    }

    /// Create a new transformation with scale only.
    #[inline]
    pub const fn scale(sx: f64, sy: f64) -> TranslateScale {
        TranslateScale::new([sx, sy], [0.0, 0.0])
    }

    /// Create a new transformation with translation only.
    #[inline]
    pub const fn translate(tx: f64, ty: f64) -> TranslateScale {
        TranslateScale::new([1.0, 1.0], [tx, ty])
    }

    /// Build a transformation from the loosely typed lists of a TopoJSON
    /// document.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MalformedTransform`] unless both slices hold
    /// exactly two components.
    pub fn from_slices(scale: &[f64], translate: &[f64]) -> Result<TranslateScale, DecodeError> {
        let scale: [f64; 2] = scale
            .try_into()
            .map_err(|_| DecodeError::MalformedTransform("scale must have two components"))?;
        let translate: [f64; 2] = translate
            .try_into()
            .map_err(|_| DecodeError::MalformedTransform("translate must have two components"))?;
        Ok(TranslateScale::new(scale, translate))
    }

    /// The per-axis scale factors.
    #[inline]
    pub fn scale_factors(self) -> [f64; 2] {
        self.scale
    }

    /// The translation.
    #[inline]
    pub fn translation(self) -> [f64; 2] {
        self.translate
    }

    /// Map a quantized position to an absolute point.
    #[inline]
    pub fn apply(self, x: i64, y: i64) -> Point {
        self * Point::new(x as f64, y as f64)
    }

    /// Is this translate/scale finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.scale.iter().chain(&self.translate).all(|c| c.is_finite())
    }
}

impl Default for TranslateScale {
    #[inline]
    fn default() -> TranslateScale {
        TranslateScale::IDENTITY
    }
}

impl Mul<Point> for TranslateScale {
    type Output = Point;

    #[inline]
    fn mul(self, other: Point) -> Point {
        Point::new(
            other.x * self.scale[0] + self.translate[0],
            other.y * self.scale[1] + self.translate[1],
        )
    }
}

impl Mul for TranslateScale {
    type Output = TranslateScale;

    #[inline]
    fn mul(self, other: TranslateScale) -> TranslateScale {
        TranslateScale {
            scale: [
                self.scale[0] * other.scale[0],
                self.scale[1] * other.scale[1],
            ],
            translate: [
                self.translate[0] + self.scale[0] * other.translate[0],
                self.translate[1] + self.scale[1] * other.translate[1],
            ],
        }
    }
}

impl MulAssign for TranslateScale {
    #[inline]
    fn mul_assign(&mut self, other: TranslateScale) {
        *self = self.mul(other);
    }
}

/// The wire shape of a transform, before the arity of its lists is checked.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawTransform {
    scale: Option<Vec<f64>>,
    translate: Option<Vec<f64>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTransform> for TranslateScale {
    type Error = DecodeError;

    fn try_from(raw: RawTransform) -> Result<TranslateScale, DecodeError> {
        let scale = raw
            .scale
            .ok_or(DecodeError::MalformedTransform("missing scale"))?;
        let translate = raw
            .translate
            .ok_or(DecodeError::MalformedTransform("missing translate"))?;
        TranslateScale::from_slices(&scale, &translate)
    }
}

#[cfg(feature = "serde")]
impl From<TranslateScale> for RawTransform {
    fn from(ts: TranslateScale) -> RawTransform {
        RawTransform {
            scale: Some(ts.scale.to_vec()),
            translate: Some(ts.translate.to_vec()),
        }
    }
}
