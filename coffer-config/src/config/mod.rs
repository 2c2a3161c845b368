//! CDN configuration file parsers.
mod build;
mod cdn;

pub use self::{
    build::{BuildConfig, extract_build_number},
    cdn::CdnConfig,
};
