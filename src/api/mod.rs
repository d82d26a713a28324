//! Request/response bodies for the trio and placement-check endpoints.
//!
//! The HTTP server lives in the calling service. This module fixes the JSON
//! it exchanges with the web client and runs the rules behind it. Every
//! reply is wrapped in an envelope: `{"success": true, ...}` on success,
//! `{"success": false, "error": "..."}` otherwise.
//!
//! ```
//! use block_blast::api::Endpoints;
//! use block_blast::core::EngineConfig;
//!
//! let endpoints = Endpoints::new(EngineConfig::default());
//! let grid = vec![vec![0u8; 8]; 8];
//! let body = serde_json::json!({ "grid": grid, "shape": [[1, 1]], "x": 6, "y": 0 });
//!
//! let reply = endpoints.check_placement_json(&body.to_string());
//! assert_eq!(reply, r#"{"success":true,"can_place":true,"lines_cleared":0}"#);
//! ```

mod contract;
mod endpoints;

pub use contract::{
    CheckPlacementRequest, CheckPlacementResponse, Envelope, GenerateTrioRequest,
    GenerateTrioResponse,
};
pub use endpoints::{ApiError, Endpoints};
