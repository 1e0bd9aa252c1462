#![warn(missing_docs)]

//! Randomized scale → rotate → translate pipeline for scene batches.
//!
//! Every object in a batch receives the same parameter set, drawn once from
//! a caller-supplied random source. The result pairs the transformed objects
//! with a summary of exactly what was applied.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use scenery_pipeline::{random_objects, GeneratorSettings, Pipeline};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let batch = random_objects(&mut rng, &GeneratorSettings::default()).unwrap();
//!
//! let doc = Pipeline::default().run(&batch.objects, &mut rng).unwrap();
//! assert_eq!(doc.objects.len(), batch.objects.len());
//! assert_eq!(doc.transformations.rotation_angles.x, 0);
//! ```

pub mod config;
pub mod error;
pub mod generate;
pub mod ops;
pub mod params;
pub mod pipeline;

pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use generate::{random_object, random_objects, GeneratorSettings};
pub use ops::{rotate, scale, translate, Axis};
pub use params::{ParameterRanges, TransformParams};
pub use pipeline::{transform_object, Pipeline};
