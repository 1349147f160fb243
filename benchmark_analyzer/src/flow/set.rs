//!
//! The set of benchmark flows.
//!

use super::Flow;

///
/// The set of flows a test is included in.
///
/// Serialized as a list of flow names. An empty set disables the test in every flow.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "Vec<Flow>", into = "Vec<Flow>")]
pub struct FlowSet(u8);

impl FlowSet {
    /// The tests that are run on pull requests and continuously on the main branch.
    pub const LAND_BLOCKING_AND_CONTINUOUS: Self =
        Self::of(&[Flow::LandBlocking, Flow::Continuous]);

    ///
    /// The empty set.
    ///
    pub const fn empty() -> Self {
        Self(0)
    }

    ///
    /// Creates a set of the specified flows.
    ///
    pub const fn of(flows: &[Flow]) -> Self {
        let mut bits = 0;
        let mut index = 0;
        while index < flows.len() {
            bits |= flows[index].bit();
            index += 1;
        }
        Self(bits)
    }

    ///
    /// Whether the flow is a member of the set.
    ///
    pub const fn contains(self, flow: Flow) -> bool {
        self.0 & flow.bit() != 0
    }

    ///
    /// Whether the set has no members.
    ///
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    ///
    /// Whether the two sets have a member in common.
    ///
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    ///
    /// Iterates over the members in declaration order.
    ///
    pub fn iter(self) -> impl Iterator<Item = Flow> {
        Flow::ALL.into_iter().filter(move |flow| self.contains(*flow))
    }
}

impl From<Flow> for FlowSet {
    fn from(flow: Flow) -> Self {
        Self(flow.bit())
    }
}

impl From<Vec<Flow>> for FlowSet {
    fn from(flows: Vec<Flow>) -> Self {
        Self::of(flows.as_slice())
    }
}

impl From<FlowSet> for Vec<Flow> {
    fn from(set: FlowSet) -> Self {
        set.iter().collect()
    }
}

impl std::ops::BitOr for FlowSet {
    type Output = Self;

    fn bitor(self, other: Self) -> Self::Output {
        Self(self.0 | other.0)
    }
}

impl std::ops::BitOr<Flow> for FlowSet {
    type Output = Self;

    fn bitor(self, flow: Flow) -> Self::Output {
        Self(self.0 | flow.bit())
    }
}

impl std::ops::BitOr for Flow {
    type Output = FlowSet;

    fn bitor(self, other: Self) -> Self::Output {
        FlowSet(self.bit() | other.bit())
    }
}

impl std::ops::BitAnd for FlowSet {
    type Output = Self;

    fn bitand(self, other: Self) -> Self::Output {
        Self(self.0 & other.0)
    }
}

impl std::fmt::Display for FlowSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        let names = self
            .iter()
            .map(|flow| flow.to_string())
            .collect::<Vec<String>>();
        write!(f, "{}", names.join(" | "))
    }
}
