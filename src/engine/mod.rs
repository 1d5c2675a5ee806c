pub mod config;
pub mod error;
pub mod format;
pub mod reduce;
pub mod state;
pub mod surface;
pub mod token;

pub use config::Config;
pub use error::AbacusError;
pub use state::{Engine, EngineState};
pub use surface::{DisplayModel, DisplaySurface, Operation};
pub use token::{Operator, Token};
