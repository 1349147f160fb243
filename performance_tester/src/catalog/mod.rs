//!
//! The test catalog.
//!

pub mod error;

use std::path::PathBuf;
use std::str::FromStr;

use benchmark_analyzer::Flow;
use benchmark_analyzer::RunGroupConfig;

use self::error::CatalogError;

///
/// The list of benchmark tests, in the order they are run.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// The tests.
    tests: Vec<RunGroupConfig>,
}

impl Catalog {
    /// The catalog shipped with the tester.
    pub const EMBEDDED: &'static str = include_str!("../../configs/tests.yaml");

    ///
    /// Loads the catalog shipped with the tester.
    ///
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_str(Self::EMBEDDED)
    }

    ///
    /// A shortcut constructor validating the tests.
    ///
    pub fn new(tests: Vec<RunGroupConfig>) -> Result<Self, CatalogError> {
        Self::validate(tests.as_slice())?;
        Ok(Self { tests })
    }

    ///
    /// All the tests.
    ///
    pub fn tests(&self) -> &[RunGroupConfig] {
        self.tests.as_slice()
    }

    ///
    /// The tests included in the flow, with their catalog indexes.
    ///
    pub fn select(&self, flow: Flow) -> impl Iterator<Item = (usize, &RunGroupConfig)> {
        self.tests
            .iter()
            .enumerate()
            .filter(move |(_, test)| test.is_included_in(flow))
    }

    ///
    /// Checks the invariants the type system does not express.
    ///
    fn validate(tests: &[RunGroupConfig]) -> Result<(), CatalogError> {
        for (index, test) in tests.iter().enumerate() {
            if test.key.module_working_set_size == 0 {
                return Err(CatalogError::WorkingSetSize {
                    index,
                    key: test.key.clone(),
                });
            }
            if let Some(expected_tps) = test.expected_tps {
                if !(expected_tps.is_finite() && expected_tps > 0.0) {
                    return Err(CatalogError::ExpectedTps {
                        index,
                        key: test.key.clone(),
                        expected_tps,
                    });
                }
            }
            if let Some((previous, other)) =
                tests[..index].iter().enumerate().find(|(_, other)| {
                    other.key == test.key && other.included_in.intersects(test.included_in)
                })
            {
                return Err(CatalogError::Conflict {
                    index,
                    previous,
                    key: test.key.clone(),
                    flows: other.included_in & test.included_in,
                });
            }
        }
        Ok(())
    }
}

impl FromStr for Catalog {
    type Err = CatalogError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let tests: Vec<RunGroupConfig> = serde_yaml::from_str(text)?;
        Self::new(tests)
    }
}

impl TryFrom<PathBuf> for Catalog {
    type Error = CatalogError;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path.as_path())
            .map_err(|error| CatalogError::Reading { error, path })?;
        Self::from_str(text.as_str())
    }
}
