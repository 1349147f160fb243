//!
//! The benchmark flow.
//!

pub mod set;

///
/// The benchmark flow, that is the execution context selecting a subset of tests.
///
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Flow {
    /// Tests that are run on pull requests.
    LandBlocking,
    /// Tests that are run continuously on the main branch.
    Continuous,
    /// Tests that are run manually in a smaller representative mode, e.g. to measure the machine.
    Representative,
    /// Tests used for the mainnet hardware evaluation.
    Mainnet,
    /// Tests used for the mainnet hardware evaluation on a large database.
    MainnetLargeDb,
    /// Tests of the aggregators v2 performance.
    AggV2,
    /// Tests of the resource groups performance.
    ResourceGroups,
}

impl Flow {
    /// All the flows in declaration order.
    pub const ALL: [Self; 7] = [
        Self::LandBlocking,
        Self::Continuous,
        Self::Representative,
        Self::Mainnet,
        Self::MainnetLargeDb,
        Self::AggV2,
        Self::ResourceGroups,
    ];

    /// The default number of accounts created by the warmup.
    pub const DEFAULT_NUM_INIT_ACCOUNTS: u64 = 2_000_000;

    /// The default number of accounts created by the warmup on a large database.
    pub const DEFAULT_NUM_INIT_ACCOUNTS_LARGE_DB: u64 = 100_000_000;

    ///
    /// The flow bit in a [`set::FlowSet`].
    ///
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    ///
    /// Whether the flow is one of the mainnet hardware evaluation flows.
    ///
    pub fn is_mainnet(self) -> bool {
        matches!(self, Self::Mainnet | Self::MainnetLargeDb)
    }

    ///
    /// Whether throughput improvements are ignored.
    ///
    /// Only regressions matter when evaluating the mainnet hardware.
    ///
    pub fn suppresses_improvement_notice(self) -> bool {
        self.is_mainnet()
    }

    ///
    /// Whether a failure of the prerequisite benchmark aborts the run immediately.
    ///
    pub fn is_strict(self) -> bool {
        matches!(self, Self::LandBlocking)
    }

    ///
    /// The number of accounts the warmup creates unless overridden.
    ///
    pub fn default_num_init_accounts(self) -> u64 {
        match self {
            Self::MainnetLargeDb => Self::DEFAULT_NUM_INIT_ACCOUNTS_LARGE_DB,
            _ => Self::DEFAULT_NUM_INIT_ACCOUNTS,
        }
    }
}

impl std::str::FromStr for Flow {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "LAND_BLOCKING" => Ok(Self::LandBlocking),
            "CONTINUOUS" => Ok(Self::Continuous),
            "REPRESENTATIVE" => Ok(Self::Representative),
            "MAINNET" => Ok(Self::Mainnet),
            "MAINNET_LARGE_DB" => Ok(Self::MainnetLargeDb),
            "AGG_V2" => Ok(Self::AggV2),
            "RESOURCE_GROUPS" => Ok(Self::ResourceGroups),
            string => anyhow::bail!(
                "Unknown flow `{string}`. Supported flows: {}",
                Self::ALL
                    .into_iter()
                    .map(|flow| flow.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LandBlocking => write!(f, "LAND_BLOCKING"),
            Self::Continuous => write!(f, "CONTINUOUS"),
            Self::Representative => write!(f, "REPRESENTATIVE"),
            Self::Mainnet => write!(f, "MAINNET"),
            Self::MainnetLargeDb => write!(f, "MAINNET_LARGE_DB"),
            Self::AggV2 => write!(f, "AGG_V2"),
            Self::ResourceGroups => write!(f, "RESOURCE_GROUPS"),
        }
    }
}
