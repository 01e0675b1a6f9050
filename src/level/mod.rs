//! Level system: descriptors, generation, validation, and providers.
//!
//! ## Key Types
//!
//! - `LevelDescriptor`: A validated level (grid matrix, asset keys, time limit)
//! - `LevelGenerator`: Turns a level number into a descriptor
//! - `LevelResponse`: The wire shape a level service returns
//! - `LevelProvider`: Injection seam for level sources
//! - `MockLevelProvider`: In-memory provider standing in for a server
//!
//! Everything external goes through validation (`check_matrix`) before the
//! session layer ever sees it.

pub mod descriptor;
pub mod generator;
pub mod provider;
pub mod response;
pub mod validator;

pub use descriptor::LevelDescriptor;
pub use generator::LevelGenerator;
pub use provider::{GeneratorProvider, LevelProvider, MockLevelProvider};
pub use response::{LevelResponse, MatrixPayload};
pub use validator::{check_matrix, validate_matrix};
