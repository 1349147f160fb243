//!
//! The run source.
//!

///
/// Where the run has been launched from, recorded for the dashboards.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A manually dispatched CI job.
    Adhoc,
    /// A scheduled or pull request CI job.
    Ci,
    /// A developer machine.
    #[default]
    Local,
}

impl std::str::FromStr for Source {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "ADHOC" => Ok(Self::Adhoc),
            "CI" => Ok(Self::Ci),
            "LOCAL" => Ok(Self::Local),
            string => anyhow::bail!(
                "Unknown source `{string}`. Supported sources: {}",
                [Self::Adhoc, Self::Ci, Self::Local]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Adhoc => write!(f, "ADHOC"),
            Self::Ci => write!(f, "CI"),
            Self::Local => write!(f, "LOCAL"),
        }
    }
}
