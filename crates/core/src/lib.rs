pub mod config;
pub mod domain;
pub mod roster;

pub use config::{AppConfig, BackendConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};
pub use domain::rep::{Deal, RepId, SalesRep};
pub use roster::criteria::ViewCriteria;
pub use roster::view::{derive, distinct_skills, RosterView};
