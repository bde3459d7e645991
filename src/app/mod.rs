// Application layer: generators per SDK/environment and answer resolution.

pub mod generators;
pub mod resolve;

pub use generators::AnyGenerator;
pub use resolve::AnswerResolver;
