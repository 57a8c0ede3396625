#![doc(hidden)]

//! This is an implementation detail of the ghstats tool. Do not take a dependency on this crate
//! as it may change in incompatible ways without warning.

// Core library for ghstats
//
// Snapshots a repository's issues and pull requests, keeps the snapshot current with
// incremental updates, and turns it into daily and monthly time series for charting.
//
// # Module Organization
//
// - [`model`]: Records, snapshots, and their invariants
// - [`codec`]: The snapshot file format
// - [`reconcile`]: Merging fetched records into a snapshot
// - [`aggregate`]: Time-series views
// - [`github`]: Fetching from the GitHub API
// - [`config`]: Configuration file handling
// - [`commands`]: Command-line interface and orchestration

pub type Result<T, E = anyhow::Error> = core::result::Result<T, E>;

macro_rules! declare_modules {
    ($($mod:ident),+ $(,)?) => {
        $(
            #[cfg(debug_assertions)]
            pub mod $mod;
            #[cfg(not(debug_assertions))]
            mod $mod;
        )+
    };
}

declare_modules!(aggregate, codec, commands, config, github, model, reconcile);

pub use crate::commands::{Host, run};
