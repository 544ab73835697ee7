// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Application settings.
//!
//! Layered, later sources winning: built-in defaults, an optional TOML file
//! (`finance_tracker.toml` in the working directory unless another path is
//! given), then `FINANCE_TRACKER_*` environment variables.
//!
//! ```toml
//! ledger_path = "finance_data.csv"
//! currency = "£"
//! log_level = "warn"
//! ```

use crate::store::LedgerConfig;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "finance_tracker";
const ENV_PREFIX: &str = "FINANCE_TRACKER";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// CSV file holding the ledger.
    pub ledger_path: PathBuf,
    /// Symbol prefixed to amounts in summaries.
    pub currency: String,
    /// Default tracing filter level when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ledger_path: PathBuf::from("finance_data.csv"),
            currency: "£".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from defaults, the config file and the environment.
    ///
    /// With `path` unset, a missing default file is fine; an explicit path
    /// must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Config::builder()
            .set_default("ledger_path", defaults.ledger_path.to_string_lossy().into_owned())?
            .set_default("currency", defaults.currency)?
            .set_default("log_level", defaults.log_level)?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    pub fn ledger_config(&self) -> LedgerConfig {
        LedgerConfig::new(&self.ledger_path)
    }
}
