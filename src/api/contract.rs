//! Wire types.

use serde::{Deserialize, Serialize};

use crate::core::Grid;
use crate::trio::Trio;

/// Body of a trio request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateTrioRequest {
    pub grid: Grid,
}

/// Exactly three shapes, as 0/1 matrices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateTrioResponse {
    pub trio: Trio,
}

/// Body of a placement check.
///
/// Grid and shape stay raw here: an empty grid or shape is answered with
/// "cannot place" rather than rejected as malformed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckPlacementRequest {
    pub grid: Vec<Vec<u8>>,
    pub shape: Vec<Vec<u8>>,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

/// Placement verdict. `lines_cleared` is present only when legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckPlacementResponse {
    pub can_place: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines_cleared: Option<usize>,
}

impl CheckPlacementResponse {
    #[must_use]
    pub const fn rejected() -> Self {
        Self {
            can_place: false,
            lines_cleared: None,
        }
    }

    #[must_use]
    pub const fn accepted(lines_cleared: usize) -> Self {
        Self {
            can_place: true,
            lines_cleared: Some(lines_cleared),
        }
    }
}

/// `{"success": ..., <body fields> | "error": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(flatten)]
    pub body: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(body: T) -> Self {
        Self {
            success: true,
            body: Some(body),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            body: None,
            error: Some(message.into()),
        }
    }
}
