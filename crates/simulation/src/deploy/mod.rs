//! Script deployment over a grid region.
//!
//! [`deploy`] is the core pass: one finished processor per cell in row-major
//! order, each configured with the matching script from a numbered source.
//! The surrounding files adapt it to the ECS: [`WorldSite`] maps the site
//! capability onto the live world, and the queue/executor/log triple gives
//! the front end an asynchronous request surface.

pub mod engine;
pub mod executor;
pub mod plugin;
pub mod queue;
pub mod region;
pub mod site;

pub use engine::{
    deploy, DeployError, DeployReport, DeploySite, ScriptLibrary, ScriptSource, SourceError,
    DEPLOY_KIND,
};
pub use executor::process_deploy_requests;
pub use plugin::DeployPlugin;
pub use queue::{DeployLog, DeployQueue, DeployRequest};
pub use region::Region;
pub use site::WorldSite;
