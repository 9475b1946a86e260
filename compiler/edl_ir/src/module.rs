//! The module root produced by a successful parse.

use rustc_hash::FxHashMap;

use crate::{DeveloperType, Function};

/// A fully validated EDL module.
///
/// `developer_types_order` lists each type exactly once in first-seen source
/// order; the anonymous enum sits at the position of its first block. The
/// function maps are keyed by [`Function::signature`] and the lists preserve
/// declaration order, which is also ABI-name order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Edl {
    /// Module name: the source file stem.
    pub name: String,
    pub developer_types: FxHashMap<String, DeveloperType>,
    pub developer_types_order: Vec<DeveloperType>,
    pub trusted_map: FxHashMap<String, Function>,
    pub trusted_list: Vec<Function>,
    pub untrusted_map: FxHashMap<String, Function>,
    pub untrusted_list: Vec<Function>,
}

impl Edl {
    /// Look up a developer type by name.
    pub fn developer_type(&self, name: &str) -> Option<&DeveloperType> {
        self.developer_types.get(name)
    }

    /// The anonymous enum, when any anonymous `enum` block was declared.
    pub fn anonymous_enum(&self) -> Option<&DeveloperType> {
        self.developer_types.get(crate::ANONYMOUS_ENUM_NAME)
    }
}
