//! Library layer for PolarMetrics: the address → district → representatives →
//! bills pipeline.
//!
//! Stages are plain functions over canonical records ([`resolver`],
//! [`matcher`], [`correlator`], [`report`]). [`LocalityService`] runs them
//! against injected upstream [`sources`], degrading any stage whose upstream
//! fails instead of aborting the report.

pub mod config;
pub mod correlator;
pub mod error;
pub mod legislators;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod outcome;
pub mod report;
pub mod resolver;
pub mod service;
pub mod sources;
pub mod validation;

pub use polarmetrics_api;
pub use polarmetrics_api::types;
pub use polarmetrics_api::{CivicClient, CongressClient};

pub use config::Config;
pub use error::LocalityError;
pub use legislators::{LegislatorsDataset, LegislatorsError};
pub use model::{Bill, DistrictInfo, LegislatorRecord, Sponsor, Term, Vote};
pub use outcome::Outcome;
pub use report::{render, LocalPoliticalReport};
pub use service::{LocalityService, PipelineSettings};
pub use sources::{CivicLookup, LegislationFeed, LegislatorRoster, NoCivicLookup};
