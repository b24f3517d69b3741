/// Use cases module containing application business logic orchestration
mod analyze_modules;

pub use analyze_modules::{AnalyzeModulesUseCase, ANALYZER_VERSION};
