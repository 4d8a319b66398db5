// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Base URL used when none is configured.
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8000/api/v1";

/// Breed list used when none is configured.
pub const DEFAULT_BREEDS: &str = "data/breeds.json";

/// Doghouse - terminal client for the Doghouse shelter service
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the backend API
    #[arg(short, long, env = "DOGHOUSE_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Path to the JSON file listing the accepted breeds
    #[arg(short, long, env = "DOGHOUSE_BREEDS", default_value = DEFAULT_BREEDS)]
    pub breeds: PathBuf,

    /// Seconds to wait for each backend request
    #[arg(long, env = "DOGHOUSE_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl Args {
    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
