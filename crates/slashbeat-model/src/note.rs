use glam::Vec3;
use serde::{Deserialize, Serialize};

pub const LANE_COUNT: usize = 4;
pub const LAYER_COUNT: usize = 3;

/// Horizontal lane, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Lane {
    OuterLeft = 0,
    InnerLeft = 1,
    InnerRight = 2,
    OuterRight = 3,
}

impl Lane {
    pub fn all() -> &'static [Lane] {
        &[
            Lane::OuterLeft,
            Lane::InnerLeft,
            Lane::InnerRight,
            Lane::OuterRight,
        ]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}

impl TryFrom<u8> for Lane {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value as usize).ok_or_else(|| format!("lane out of range: {value}"))
    }
}

impl From<Lane> for u8 {
    fn from(lane: Lane) -> Self {
        lane as u8
    }
}

/// Vertical layer, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Layer {
    Low = 0,
    Mid = 1,
    High = 2,
}

impl Layer {
    pub fn all() -> &'static [Layer] {
        &[Layer::Low, Layer::Mid, Layer::High]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}

impl TryFrom<u8> for Layer {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value as usize).ok_or_else(|| format!("layer out of range: {value}"))
    }
}

impl From<Layer> for u8 {
    fn from(layer: Layer) -> Self {
        layer as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn other(self) -> Self {
        match self {
            Hand::Left => Hand::Right,
            Hand::Right => Hand::Left,
        }
    }
}

/// Required swing direction for a good cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CutDirection {
    Up,
    Down,
    Left,
    Right,
    Any,
}

impl CutDirection {
    /// Unit vector of the swing in world space. `Any` has no direction.
    pub fn vector(self) -> Vec3 {
        match self {
            CutDirection::Up => Vec3::Y,
            CutDirection::Down => Vec3::NEG_Y,
            CutDirection::Left => Vec3::NEG_X,
            CutDirection::Right => Vec3::X,
            CutDirection::Any => Vec3::ZERO,
        }
    }
}

/// A scheduled note. `time` is when it reaches the player plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: u32,
    pub time: f64,
    pub lane: Lane,
    pub layer: Layer,
    pub hand: Hand,
    pub cut_direction: CutDirection,
}

impl Note {
    pub fn new(
        id: u32,
        time: f64,
        lane: Lane,
        layer: Layer,
        hand: Hand,
        cut_direction: CutDirection,
    ) -> Self {
        Self {
            id,
            time,
            lane,
            layer,
            hand,
            cut_direction,
        }
    }
}
