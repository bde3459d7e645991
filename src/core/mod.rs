pub mod operations;
pub mod regions;
pub mod scaffold;
pub mod template;

pub use crate::domain::model::{GeneratedProject, ProjectAnswers};
pub use crate::domain::ports::{OperationSource, ProjectGenerator, ProjectInitializer, Storage};
pub use crate::utils::error::Result;
