//! The request handed to the registry once every answer is in.

use std::collections::BTreeMap;

use crate::registry::{ParameterValue, Parameters};

/// Signature plus collected arguments and options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationRequest {
    pub signature: String,
    pub arguments: BTreeMap<String, String>,
    pub options: Parameters,
}

impl InvocationRequest {
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            ..Default::default()
        }
    }

    /// Merge arguments and options into one mapping.
    ///
    /// Options are applied after arguments, so an option overrides an
    /// argument with the same name.
    pub fn parameters(&self) -> Parameters {
        let mut parameters: Parameters = self
            .arguments
            .iter()
            .map(|(name, value)| (name.clone(), ParameterValue::Value(value.clone())))
            .collect();
        parameters.extend(self.options.clone());
        parameters
    }
}
