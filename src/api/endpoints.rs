//! Endpoint handlers.

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use super::contract::{
    CheckPlacementRequest, CheckPlacementResponse, Envelope, GenerateTrioRequest,
    GenerateTrioResponse,
};
use crate::core::{EngineConfig, GameRng, Grid, GridError, Shape};
use crate::rules::apply_and_clear;
use crate::trio::generate_trio_with;

/// Why a request could not be answered.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    Grid(#[from] GridError),
}

/// Reply used if an envelope itself fails to serialize.
const FALLBACK_REPLY: &str = r#"{"success":false,"error":"internal error"}"#;

/// Handlers bound to one engine configuration.
#[derive(Clone, Debug, Default)]
pub struct Endpoints {
    config: EngineConfig,
}

impl Endpoints {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Three shapes weighted for the request's grid.
    pub fn generate_trio(
        &self,
        request: &GenerateTrioRequest,
        rng: &mut GameRng,
    ) -> Result<GenerateTrioResponse, ApiError> {
        self.check_size(&request.grid)?;
        let trio = generate_trio_with(&request.grid, &self.config.difficulty, rng);
        Ok(GenerateTrioResponse { trio })
    }

    /// Whether the shape fits, and how many lines committing it would clear.
    ///
    /// The caller's grid is only read; clearing is simulated on a copy.
    pub fn check_placement(
        &self,
        request: &CheckPlacementRequest,
    ) -> Result<CheckPlacementResponse, ApiError> {
        let grid = match Grid::from_rows(&request.grid) {
            Ok(grid) => grid,
            Err(err) if err.is_empty_input() => return Ok(CheckPlacementResponse::rejected()),
            Err(err) => return Err(err.into()),
        };
        self.check_size(&grid)?;

        let shape = match Shape::from_rows(&request.shape) {
            Ok(shape) => shape,
            Err(err) if err.is_empty_input() => return Ok(CheckPlacementResponse::rejected()),
            Err(err) => return Err(err.into()),
        };

        Ok(apply_and_clear(&grid, &shape, request.x, request.y)
            .map_or(CheckPlacementResponse::rejected(), |cleared| {
                CheckPlacementResponse::accepted(cleared.count())
            }))
    }

    /// JSON in, enveloped JSON out.
    pub fn generate_trio_json(&self, body: &str, rng: &mut GameRng) -> String {
        let result = serde_json::from_str::<GenerateTrioRequest>(body)
            .map_err(ApiError::from)
            .and_then(|request| self.generate_trio(&request, rng));
        render("generate_trio", result)
    }

    /// JSON in, enveloped JSON out.
    pub fn check_placement_json(&self, body: &str) -> String {
        let result = serde_json::from_str::<CheckPlacementRequest>(body)
            .map_err(ApiError::from)
            .and_then(|request| self.check_placement(&request));
        render("check_placement", result)
    }

    fn check_size(&self, grid: &Grid) -> Result<(), GridError> {
        if grid.size() != self.config.grid_size {
            return Err(GridError::SizeMismatch {
                expected: self.config.grid_size,
                found: grid.size(),
            });
        }
        Ok(())
    }
}

fn render<T: Serialize>(endpoint: &str, result: Result<T, ApiError>) -> String {
    let envelope = match result {
        Ok(body) => Envelope::ok(body),
        Err(err) => {
            warn!(endpoint, error = %err, "rejected request");
            Envelope::err(err.to_string())
        }
    };
    serde_json::to_string(&envelope).unwrap_or_else(|_| FALLBACK_REPLY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_grid() -> Vec<Vec<u8>> {
        vec![vec![0u8; 8]; 8]
    }

    #[test]
    fn test_check_placement_legal() {
        let mut grid = empty_grid();
        grid[3] = vec![1, 1, 1, 1, 1, 1, 1, 0];
        let request = CheckPlacementRequest {
            grid,
            shape: vec![vec![1]],
            x: 7,
            y: 3,
        };
        let response = Endpoints::default().check_placement(&request).unwrap();
        assert_eq!(response, CheckPlacementResponse::accepted(1));
    }

    #[test]
    fn test_check_placement_illegal() {
        let request = CheckPlacementRequest {
            grid: empty_grid(),
            shape: vec![vec![1, 1, 1]],
            x: 6,
            y: 0,
        };
        let response = Endpoints::default().check_placement(&request).unwrap();
        assert_eq!(response, CheckPlacementResponse::rejected());
    }

    #[test]
    fn test_empty_inputs_cannot_place() {
        let endpoints = Endpoints::default();
        let no_shape = CheckPlacementRequest {
            grid: empty_grid(),
            shape: vec![],
            x: 0,
            y: 0,
        };
        assert_eq!(
            endpoints.check_placement(&no_shape).unwrap(),
            CheckPlacementResponse::rejected()
        );

        let no_grid = CheckPlacementRequest {
            grid: vec![],
            shape: vec![vec![1]],
            x: 0,
            y: 0,
        };
        assert_eq!(
            endpoints.check_placement(&no_grid).unwrap(),
            CheckPlacementResponse::rejected()
        );
    }

    #[test]
    fn test_malformed_inputs_are_errors() {
        let endpoints = Endpoints::default();
        let ragged = CheckPlacementRequest {
            grid: empty_grid(),
            shape: vec![vec![1, 1], vec![1]],
            x: 0,
            y: 0,
        };
        assert!(matches!(
            endpoints.check_placement(&ragged),
            Err(ApiError::Grid(GridError::RaggedRow { .. }))
        ));

        let small = CheckPlacementRequest {
            grid: vec![vec![0u8; 4]; 4],
            shape: vec![vec![1]],
            x: 0,
            y: 0,
        };
        assert!(matches!(
            endpoints.check_placement(&small),
            Err(ApiError::Grid(GridError::SizeMismatch { expected: 8, found: 4 }))
        ));
    }

    #[test]
    fn test_generate_trio() {
        let request = GenerateTrioRequest {
            grid: Grid::standard(),
        };
        let response = Endpoints::default()
            .generate_trio(&request, &mut GameRng::new(3))
            .unwrap();
        assert!(response.trio.iter().all(|s| s.catalog_index().is_some()));
    }

    #[test]
    fn test_json_errors_are_enveloped() {
        let reply = Endpoints::default().check_placement_json("{not json");
        let value: serde_json::Value = serde_json::from_str(&reply).unwrap();
        assert_eq!(value["success"], false);
        assert!(value["error"].as_str().unwrap().starts_with("invalid request body"));
    }
}
