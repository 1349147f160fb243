//!
//! The benchmark executor type.
//!

///
/// The benchmark executor type.
///
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum ExecutorType {
    /// The Move VM executor.
    #[default]
    #[serde(rename = "VM")]
    VM,
    /// The native executor without the VM.
    #[serde(rename = "native")]
    Native,
    /// The sharded executor.
    #[serde(rename = "sharded")]
    Sharded,
}

impl std::str::FromStr for ExecutorType {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "VM" => Ok(Self::VM),
            "native" => Ok(Self::Native),
            "sharded" => Ok(Self::Sharded),
            string => anyhow::bail!(
                "Unknown executor type `{string}`. Supported executor types: {}",
                [Self::VM, Self::Native, Self::Sharded]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for ExecutorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VM => write!(f, "VM"),
            Self::Native => write!(f, "native"),
            Self::Sharded => write!(f, "sharded"),
        }
    }
}
