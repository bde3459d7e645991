pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalStorage, MemoryStorage, NpxReactNativeInitializer};
pub use app::{AnswerResolver, AnyGenerator};
pub use config::ReproConfig;
pub use core::scaffold::{ScaffoldOutcome, Scaffolder};
pub use domain::model::ProjectAnswers;
pub use utils::error::{ReproError, Result};
