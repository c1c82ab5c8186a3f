use serde::{Deserialize, Serialize};

/// Which node kinds a location query is interested in.
///
/// A plain value: every locator keeps its own copy, so changing an options
/// value never affects a locator that was built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryOptions {
    /// Call expressions `f(x)`.
    pub calls: bool,
    /// Bare name references.
    pub names: bool,
    /// Attribute accesses `a.b`, once the query reaches the attribute name.
    pub members: bool,
    /// Narrow a matched attribute access to just its attribute name.
    pub member_name: bool,
    /// Numbers, strings and the `None`/`True`/`False` constants.
    pub literals: bool,
    /// Parameter names in a `def` header (not annotations or defaults).
    pub parameter_names: bool,
    /// `class` headers.
    pub class_definition: bool,
    /// `def` headers.
    pub function_definition: bool,
}

impl QueryOptions {
    /// Targets for hover: expressions and parameter names, with attribute
    /// accesses narrowed to the attribute itself.
    pub const HOVER: Self = Self {
        calls: true,
        names: true,
        members: true,
        member_name: true,
        literals: true,
        parameter_names: true,
        class_definition: false,
        function_definition: false,
    };

    /// Targets for expression evaluation: whole attribute chains, plus
    /// class and function headers.
    pub const EVALUATE: Self = Self {
        calls: true,
        names: true,
        members: true,
        member_name: false,
        literals: true,
        parameter_names: false,
        class_definition: true,
        function_definition: true,
    };
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self::HOVER
    }
}
