//! Vocabulary for node supports: restraint kinds, spring directions and the
//! entries stored by the registry.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use uom::si::angle::{degree, radian};
use uom::si::f64::Angle;

use crate::errors::RestraintError;

/// Degrees of freedom per node used when no dimension is supplied.
pub const DEFAULT_DIMENSION: usize = 2;

/// Map a one-based node number and an axis onto a global degree-of-freedom index.
///
/// The first degree of freedom of `node` sits at `dimension * node - dimension`.
///
/// # Errors
///
/// Returns [`RestraintError::InvalidNode`] for node zero or when the index does
/// not fit in a `usize`.
///
/// # Examples
/// ```
/// use restrainx::dof_index;
///
/// assert_eq!(dof_index(3, 2, 0), Ok(4));
/// assert_eq!(dof_index(3, 2, 1), Ok(5));
/// assert!(dof_index(0, 2, 0).is_err());
/// ```
pub fn dof_index(node: usize, dimension: usize, axis: usize) -> Result<usize, RestraintError> {
    let invalid = RestraintError::InvalidNode { node, dimension };
    if node == 0 {
        return Err(invalid);
    }
    dimension
        .checked_mul(node)
        .and_then(|base| base.checked_sub(dimension))
        .and_then(|first| first.checked_add(axis))
        .ok_or(invalid)
}

/// Map `node` and `axis` onto a degree of freedom owned by that node.
///
/// Unlike [`dof_index`], the axis must be smaller than `dimension`, so the
/// result never spills onto the next node.
///
/// # Errors
///
/// Returns [`RestraintError::AxisOutOfRange`] when `axis >= dimension` and
/// [`RestraintError::InvalidNode`] when the node cannot be mapped.
///
/// # Examples
/// ```
/// use restrainx::{node_dof, RestraintError};
///
/// assert_eq!(node_dof(2, 2, 1), Ok(3));
/// assert_eq!(
///     node_dof(2, 1, 1),
///     Err(RestraintError::AxisOutOfRange { node: 2, axis: 1, dimension: 1 })
/// );
/// ```
pub fn node_dof(node: usize, dimension: usize, axis: usize) -> Result<usize, RestraintError> {
    if axis >= dimension {
        return Err(RestraintError::AxisOutOfRange {
            node,
            axis,
            dimension,
        });
    }
    dof_index(node, dimension, axis)
}

/// Type of rigid support applied to a node.
///
/// Only translations are modelled, so a pin and a fixed support restrain the
/// same degrees of freedom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RestraintKind {
    /// Both translations restrained.
    #[serde(rename = "fixed")]
    Fixed,
    /// Both translations restrained.
    #[serde(rename = "pin")]
    Pin,
    /// Second-axis translation restrained, free along the first axis.
    #[serde(rename = "roller")]
    Roller,
    /// Same as [`RestraintKind::Roller`].
    #[serde(rename = "rollerX")]
    RollerX,
    /// First-axis translation restrained, free along the second axis.
    #[serde(rename = "rollerY")]
    RollerY,
}

impl RestraintKind {
    /// Axes restrained by this support, in the order they are recorded.
    #[must_use]
    pub const fn restrained_axes(self) -> &'static [usize] {
        match self {
            Self::Fixed | Self::Pin => &[0, 1],
            Self::Roller | Self::RollerX => &[1],
            Self::RollerY => &[0],
        }
    }

    /// Name accepted by [`str::parse`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Pin => "pin",
            Self::Roller => "roller",
            Self::RollerX => "rollerX",
            Self::RollerY => "rollerY",
        }
    }
}

impl FromStr for RestraintKind {
    type Err = RestraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(Self::Fixed),
            "pin" => Ok(Self::Pin),
            "roller" => Ok(Self::Roller),
            "rollerX" => Ok(Self::RollerX),
            "rollerY" => Ok(Self::RollerY),
            other => Err(RestraintError::UnknownRestraintKind(other.to_string())),
        }
    }
}

impl fmt::Display for RestraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis and sense along which a spring support acts.
///
/// Each direction corresponds to the angle, in degrees, at which the spring is
/// drawn from the node: `x` is 180, `-x` is 0, `y` is 270 and `-y` is 90.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpringDirection {
    /// Positive first axis.
    #[default]
    #[serde(rename = "x")]
    X,
    /// Negative first axis.
    #[serde(rename = "-x")]
    NegX,
    /// Positive second axis.
    #[serde(rename = "y")]
    Y,
    /// Negative second axis.
    #[serde(rename = "-y")]
    NegY,
}

impl SpringDirection {
    /// Angle encoding of the direction in degrees.
    #[must_use]
    pub const fn angle_degrees(self) -> f64 {
        match self {
            Self::X => 180.0,
            Self::NegX => 0.0,
            Self::Y => 270.0,
            Self::NegY => 90.0,
        }
    }

    /// Zero-based axis the spring acts along.
    #[must_use]
    pub const fn axis(self) -> usize {
        match self {
            Self::X | Self::NegX => 0,
            Self::Y | Self::NegY => 1,
        }
    }

    /// Name accepted by [`str::parse`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::NegX => "-x",
            Self::Y => "y",
            Self::NegY => "-y",
        }
    }
}

impl FromStr for SpringDirection {
    type Err = RestraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Self::X),
            "-x" => Ok(Self::NegX),
            "y" => Ok(Self::Y),
            "-y" => Ok(Self::NegY),
            other => Err(RestraintError::InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for SpringDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prescribed displacement of a node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// One-based node number.
    pub node: usize,
    /// Prescribed displacement along the first axis.
    pub dx: f64,
    /// Prescribed displacement along the second axis.
    pub dy: f64,
}

impl Settlement {
    /// Create a [`Settlement`] record.
    #[must_use]
    pub const fn new(node: usize, dx: f64, dy: f64) -> Self {
        Self { node, dx, dy }
    }

    /// The record as a `(node, dx, dy)` tuple.
    #[must_use]
    pub const fn as_tuple(&self) -> (usize, f64, f64) {
        (self.node, self.dx, self.dy)
    }

    /// Prescribed displacement as an algebraic vector.
    #[must_use]
    pub fn displacement(&self) -> Vector2<f64> {
        Vector2::new(self.dx, self.dy)
    }
}

/// Elastic support attached to a node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    /// One-based node number.
    pub node: usize,
    /// Spring stiffness coefficient.
    pub stiffness: f64,
    /// Direction the spring acts in.
    pub direction: SpringDirection,
}

impl Spring {
    /// Create a [`Spring`] record.
    #[must_use]
    pub const fn new(node: usize, stiffness: f64, direction: SpringDirection) -> Self {
        Self {
            node,
            stiffness,
            direction,
        }
    }

    /// The record as a `(node, k, angle)` tuple with the angle in degrees.
    ///
    /// # Examples
    /// ```
    /// use restrainx::{Spring, SpringDirection};
    ///
    /// let spring = Spring::new(5, 1000.0, SpringDirection::X);
    /// assert_eq!(spring.as_tuple(), (5, 1000.0, 180.0));
    /// ```
    #[must_use]
    pub const fn as_tuple(&self) -> (usize, f64, f64) {
        (self.node, self.stiffness, self.direction.angle_degrees())
    }

    /// Direction angle in degrees.
    #[must_use]
    pub const fn angle_degrees(&self) -> f64 {
        self.direction.angle_degrees()
    }

    /// Direction angle as a typed quantity.
    #[must_use]
    pub fn angle(&self) -> Angle {
        Angle::new::<degree>(self.angle_degrees())
    }

    /// Zero-based axis the spring acts along.
    #[must_use]
    pub const fn axis(&self) -> usize {
        self.direction.axis()
    }

    /// Global degree of freedom the spring stiffness is added to.
    ///
    /// # Errors
    ///
    /// Returns [`RestraintError::AxisOutOfRange`] when the spring axis is not
    /// carried by nodes of `dimension`, and [`RestraintError::InvalidNode`] when
    /// the node cannot be mapped.
    pub fn dof(&self, dimension: usize) -> Result<usize, RestraintError> {
        node_dof(self.node, dimension, self.axis())
    }

    /// Diagonal stiffness contribution `(kx, ky)` of the spring.
    ///
    /// The stiffness is resolved along the direction angle; the sense of the
    /// direction does not change the contribution.
    #[must_use]
    pub fn stiffness_components(&self) -> Vector2<f64> {
        let theta = self.angle().get::<radian>();
        self.stiffness * Vector2::new(theta.cos().abs(), theta.sin().abs())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn dof_index_follows_node_numbering() {
        assert_eq!(dof_index(1, 2, 0), Ok(0));
        assert_eq!(dof_index(1, 2, 1), Ok(1));
        assert_eq!(dof_index(4, 3, 2), Ok(11));
    }

    #[test]
    fn dof_index_rejects_unmappable_nodes() {
        assert_eq!(
            dof_index(0, 2, 0),
            Err(RestraintError::InvalidNode {
                node: 0,
                dimension: 2
            })
        );
        assert_eq!(
            dof_index(usize::MAX, 2, 0),
            Err(RestraintError::InvalidNode {
                node: usize::MAX,
                dimension: 2
            })
        );
    }

    #[test]
    fn node_dof_stays_within_the_node() {
        assert_eq!(node_dof(3, 3, 2), Ok(8));
        assert_eq!(
            node_dof(1, 0, 0),
            Err(RestraintError::AxisOutOfRange {
                node: 1,
                axis: 0,
                dimension: 0
            })
        );

        let spring = Spring::new(1, 10.0, SpringDirection::Y);
        assert_eq!(
            spring.dof(1),
            Err(RestraintError::AxisOutOfRange {
                node: 1,
                axis: 1,
                dimension: 1
            })
        );
        assert_eq!(Spring::new(1, 10.0, SpringDirection::X).dof(1), Ok(0));
    }

    #[test]
    fn restraint_kinds_parse_from_their_names() {
        for kind in [
            RestraintKind::Fixed,
            RestraintKind::Pin,
            RestraintKind::Roller,
            RestraintKind::RollerX,
            RestraintKind::RollerY,
        ] {
            assert_eq!(kind.as_str().parse::<RestraintKind>(), Ok(kind));
        }
        assert_eq!(
            "Fixed".parse::<RestraintKind>(),
            Err(RestraintError::UnknownRestraintKind("Fixed".to_string()))
        );
    }

    #[test]
    fn pin_and_fixed_restrain_the_same_axes() {
        assert_eq!(
            RestraintKind::Pin.restrained_axes(),
            RestraintKind::Fixed.restrained_axes()
        );
        assert_eq!(
            RestraintKind::Roller.restrained_axes(),
            RestraintKind::RollerX.restrained_axes()
        );
        assert_eq!(RestraintKind::RollerY.restrained_axes(), &[0]);
    }

    #[test]
    fn spring_directions_map_to_angles() {
        assert_eq!(SpringDirection::default(), SpringDirection::X);
        assert_eq!("x".parse::<SpringDirection>().map(|d| d.angle_degrees()), Ok(180.0));
        assert_eq!("-x".parse::<SpringDirection>().map(|d| d.angle_degrees()), Ok(0.0));
        assert_eq!("y".parse::<SpringDirection>().map(|d| d.angle_degrees()), Ok(270.0));
        assert_eq!("-y".parse::<SpringDirection>().map(|d| d.angle_degrees()), Ok(90.0));
        assert_eq!(
            "z".parse::<SpringDirection>(),
            Err(RestraintError::InvalidDirection("z".to_string()))
        );
    }

    #[test]
    fn spring_stiffness_resolves_onto_its_axis() {
        let horizontal = Spring::new(2, 500.0, SpringDirection::NegX);
        let components = horizontal.stiffness_components();
        assert_relative_eq!(components.x, 500.0, epsilon = 1.0e-9);
        assert_relative_eq!(components.y, 0.0, epsilon = 1.0e-9);

        let vertical = Spring::new(2, 500.0, SpringDirection::Y);
        let components = vertical.stiffness_components();
        assert_relative_eq!(components.x, 0.0, epsilon = 1.0e-9);
        assert_relative_eq!(components.y, 500.0, epsilon = 1.0e-9);
        assert_eq!(vertical.dof(2), Ok(3));
    }

    #[test]
    fn spring_angle_converts_units() {
        let spring = Spring::new(1, 10.0, SpringDirection::NegY);
        assert_relative_eq!(
            spring.angle().get::<radian>(),
            std::f64::consts::FRAC_PI_2,
            epsilon = 1.0e-12
        );
    }

    #[test]
    fn settlement_exposes_tuple_and_vector() {
        let settlement = Settlement::new(3, 0.01, -0.02);
        assert_eq!(settlement.as_tuple(), (3, 0.01, -0.02));
        assert_eq!(settlement.displacement(), Vector2::new(0.01, -0.02));
    }
}
