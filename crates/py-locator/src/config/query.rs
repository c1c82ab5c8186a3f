use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::locate::QueryOptions;

impl QueryOptions {
    pub(crate) fn apply_patch(
        &mut self,
        patch: QueryOptionsPatch,
    ) {
        if let Some(v) = patch.calls {
            self.calls = v;
        }
        if let Some(v) = patch.names {
            self.names = v;
        }
        if let Some(v) = patch.members {
            self.members = v;
        }
        if let Some(v) = patch.member_name {
            self.member_name = v;
        }
        if let Some(v) = patch.literals {
            self.literals = v;
        }
        if let Some(v) = patch.parameter_names {
            self.parameter_names = v;
        }
        if let Some(v) = patch.class_definition {
            self.class_definition = v;
        }
        if let Some(v) = patch.function_definition {
            self.function_definition = v;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct QueryOptionsPatch {
    pub(crate) calls: Option<bool>,
    pub(crate) names: Option<bool>,
    pub(crate) members: Option<bool>,
    #[serde(alias = "member_name")]
    pub(crate) member_name: Option<bool>,
    pub(crate) literals: Option<bool>,
    #[serde(alias = "parameter_names")]
    pub(crate) parameter_names: Option<bool>,
    #[serde(alias = "class_definition")]
    pub(crate) class_definition: Option<bool>,
    #[serde(alias = "function_definition")]
    pub(crate) function_definition: Option<bool>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
