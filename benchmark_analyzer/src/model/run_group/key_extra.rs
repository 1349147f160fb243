//!
//! The run group key extra parameters.
//!

///
/// The workload parameters that do not take part in the configuration identity.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RunGroupKeyExtra {
    /// The space-separated transaction types to use instead of the key's one.
    /// An empty string disables the workload arguments completely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_type_override: Option<String>,
    /// The space-separated transaction weights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_weights_override: Option<String>,
    /// The traffic shape flags of the sharded executor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharding_traffic_flags: Option<String>,
}

impl RunGroupKeyExtra {
    /// The transaction weight used if not overridden.
    pub const DEFAULT_TRANSACTION_WEIGHTS: &'static str = "1";

    ///
    /// Returns the transaction types and weights, or `None` if the workload arguments are disabled.
    ///
    pub fn workload<'a>(
        &'a self,
        transaction_type: &'a str,
    ) -> Option<(Vec<&'a str>, Vec<&'a str>)> {
        let transaction_types = match self.transaction_type_override.as_deref() {
            Some("") => return None,
            Some(transaction_types) => transaction_types,
            None => transaction_type,
        };
        let transaction_weights = self
            .transaction_weights_override
            .as_deref()
            .unwrap_or(Self::DEFAULT_TRANSACTION_WEIGHTS);
        Some((
            transaction_types.split_whitespace().collect(),
            transaction_weights.split_whitespace().collect(),
        ))
    }

    ///
    /// Returns the sharding traffic flags split into arguments.
    ///
    pub fn sharding_traffic_flags(&self) -> Vec<&str> {
        self.sharding_traffic_flags
            .as_deref()
            .map(|flags| flags.split_whitespace().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::RunGroupKeyExtra;

    #[test]
    fn workload_default() {
        let extra = RunGroupKeyExtra::default();
        assert_eq!(
            extra.workload("no-op"),
            Some((vec!["no-op"], vec!["1"]))
        );
    }

    #[test]
    fn workload_override() {
        let extra = RunGroupKeyExtra {
            transaction_type_override: Some("publish-package apt-fa-transfer".to_owned()),
            transaction_weights_override: Some("1 500".to_owned()),
            sharding_traffic_flags: None,
        };
        assert_eq!(
            extra.workload("mix_publish_transfer"),
            Some((
                vec!["publish-package", "apt-fa-transfer"],
                vec!["1", "500"]
            ))
        );
    }

    #[test]
    fn workload_disabled() {
        let extra = RunGroupKeyExtra {
            transaction_type_override: Some(String::new()),
            transaction_weights_override: None,
            sharding_traffic_flags: Some("--hotspot-probability 0.8".to_owned()),
        };
        assert_eq!(extra.workload("coin_transfer_hotspot"), None);
        assert_eq!(
            extra.sharding_traffic_flags(),
            vec!["--hotspot-probability", "0.8"]
        );
    }
}
