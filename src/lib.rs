// Catsense - acoustic and motion analysis of cat vocal behavior

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod features;
pub mod report;
pub mod tools;

pub use analysis::{AnalysisResult, Analyzer};
pub use config::AnalysisConfig;
pub use error::{CatSenseError, Result};
pub use features::{FeatureRecord, MotionTrace, RawFeatures};
