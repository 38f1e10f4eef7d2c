use std::ffi::OsString;
use std::path::PathBuf;

/// Lower bound of the "Min Capacity" control.
pub const MIN_CAPACITY: u32 = 220;
/// Upper bound of the "Min Capacity" control.
pub const MAX_CAPACITY: u32 = 107_601;
/// Lower bound of the "Built After" control.
pub const MIN_YEAR: i32 = 1895;
/// Upper bound of the "Built After" control.
pub const MAX_YEAR: i32 = 2014;

pub const DATA_ENV: &str = "STADIUM_DATA";
pub const LOGO_ENV: &str = "STADIUM_LOGO";

const DEFAULT_DATA_PATH: &str = "data/stadiums.csv";
const DEFAULT_LOGO_PATH: &str = "assets/ncaa-football-logo.jpg";

/// Where the dashboard reads its inputs from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub logo_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            logo_path: PathBuf::from(DEFAULT_LOGO_PATH),
        }
    }
}

impl DashboardConfig {
    /// Resolve from the process arguments and environment.
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::args_os().nth(1),
            std::env::var_os(DATA_ENV),
            std::env::var_os(LOGO_ENV),
        )
    }

    /// The first CLI argument wins over `STADIUM_DATA`, which wins over the default.
    pub fn resolve(
        arg: Option<OsString>,
        data_env: Option<OsString>,
        logo_env: Option<OsString>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            data_path: arg
                .or(data_env)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            logo_path: logo_env
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.logo_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_defaults() {
        let config = DashboardConfig::resolve(None, None, None);
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn argument_overrides_environment() {
        let config = DashboardConfig::resolve(
            Some("cli.csv".into()),
            Some("env.csv".into()),
            Some("logo.png".into()),
        );
        assert_eq!(config.data_path, PathBuf::from("cli.csv"));
        assert_eq!(config.logo_path, PathBuf::from("logo.png"));
    }

    #[test]
    fn empty_environment_value_is_ignored() {
        let config = DashboardConfig::resolve(None, Some("".into()), None);
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
    }
}
