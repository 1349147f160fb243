//!
//! The run group key.
//!

use crate::model::executor_type::ExecutorType;

///
/// The identity of a benchmark configuration.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct RunGroupKey {
    /// The transaction type generated by the workload.
    pub transaction_type: String,
    /// The number of modules the workload is spread over.
    #[serde(default = "RunGroupKey::default_module_working_set_size")]
    pub module_working_set_size: usize,
    /// The executor type.
    #[serde(default)]
    pub executor_type: ExecutorType,
}

impl RunGroupKey {
    /// The key of the warmup database creation.
    pub const WARMUP_TRANSACTION_TYPE: &'static str = "warmup";

    ///
    /// A shortcut constructor with the default working set and executor.
    ///
    pub fn new(transaction_type: impl Into<String>) -> Self {
        Self {
            transaction_type: transaction_type.into(),
            module_working_set_size: Self::default_module_working_set_size(),
            executor_type: ExecutorType::default(),
        }
    }

    ///
    /// Sets the module working set size.
    ///
    pub fn with_module_working_set_size(mut self, module_working_set_size: usize) -> Self {
        self.module_working_set_size = module_working_set_size;
        self
    }

    ///
    /// Sets the executor type.
    ///
    pub fn with_executor_type(mut self, executor_type: ExecutorType) -> Self {
        self.executor_type = executor_type;
        self
    }

    ///
    /// The key of the warmup database creation.
    ///
    pub fn warmup() -> Self {
        Self::new(Self::WARMUP_TRANSACTION_TYPE)
    }

    ///
    /// The synthesized key of a pipeline stage of this configuration.
    ///
    pub fn stage(&self, index: usize) -> Self {
        Self {
            transaction_type: format!("{} [stage {index}]", self.transaction_type),
            module_working_set_size: self.module_working_set_size,
            executor_type: self.executor_type,
        }
    }

    ///
    /// The default module working set size.
    ///
    fn default_module_working_set_size() -> usize {
        1
    }
}

impl std::fmt::Display for RunGroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[module_working_set_size={}, executor_type={}]",
            self.transaction_type, self.module_working_set_size, self.executor_type
        )
    }
}
