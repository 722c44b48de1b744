// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - The HTTP boundary between clients and the services
// - Handlers only translate: DTO in, service call, DTO or error out
// - No business rules live here

pub mod dto;
pub mod error_handling;
pub mod routes;
pub mod state;

pub use dto::*;
pub use error_handling::{ApiError, ApiResult, ErrorResponse, ErrorType};
pub use routes::router;
pub use state::AppState;
