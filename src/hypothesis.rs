use crate::error::{LayoutError, Result};
use strum_macros::{Display, EnumCount, EnumIter, EnumString, FromRepr};

/// Modelling hypothesis of a mechanical problem. It fixes the spatial
/// dimension used to size tensorial quantities.
///
/// The discriminants are the integer codes used when a hypothesis is passed
/// around as a raw value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCount, FromRepr,
)]
#[repr(u8)]
pub enum Hypothesis {
    AxisymmetricalGeneralisedPlaneStrain = 0,
    AxisymmetricalGeneralisedPlaneStress = 1,
    Axisymmetrical = 2,
    PlaneStress = 3,
    PlaneStrain = 4,
    GeneralisedPlaneStrain = 5,
    Tridimensional = 6,
}

impl Hypothesis {
    /// Looks a hypothesis up by its canonical name, e.g. `"PlaneStrain"`.
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse::<Self>()
            .map_err(|_| LayoutError::UnsupportedHypothesis {
                value: name.to_string(),
            })
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn space_dimension(self) -> usize {
        match self {
            Hypothesis::AxisymmetricalGeneralisedPlaneStrain
            | Hypothesis::AxisymmetricalGeneralisedPlaneStress => 1,
            Hypothesis::Axisymmetrical
            | Hypothesis::PlaneStress
            | Hypothesis::PlaneStrain
            | Hypothesis::GeneralisedPlaneStrain => 2,
            Hypothesis::Tridimensional => 3,
        }
    }

    /// Number of components of a symmetric second order tensor. The out of
    /// plane component is kept for the 1D and 2D hypotheses.
    pub const fn stensor_size(self) -> usize {
        match self {
            Hypothesis::AxisymmetricalGeneralisedPlaneStrain
            | Hypothesis::AxisymmetricalGeneralisedPlaneStress => 3,
            Hypothesis::Axisymmetrical
            | Hypothesis::PlaneStress
            | Hypothesis::PlaneStrain
            | Hypothesis::GeneralisedPlaneStrain => 4,
            Hypothesis::Tridimensional => 6,
        }
    }

    /// Number of components of a non symmetric second order tensor.
    pub const fn tensor_size(self) -> usize {
        match self {
            Hypothesis::AxisymmetricalGeneralisedPlaneStrain
            | Hypothesis::AxisymmetricalGeneralisedPlaneStress => 3,
            Hypothesis::Axisymmetrical
            | Hypothesis::PlaneStress
            | Hypothesis::PlaneStrain
            | Hypothesis::GeneralisedPlaneStrain => 5,
            Hypothesis::Tridimensional => 9,
        }
    }
}

impl TryFrom<i32> for Hypothesis {
    type Error = LayoutError;

    fn try_from(code: i32) -> Result<Self> {
        u8::try_from(code)
            .ok()
            .and_then(Hypothesis::from_repr)
            .ok_or_else(|| LayoutError::UnsupportedHypothesis {
                value: code.to_string(),
            })
    }
}
