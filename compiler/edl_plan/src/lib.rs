//! Emission planner for validated EDL modules.
//!
//! Walks an [`Edl`] and produces a [`ModulePlan`]: the six output files
//! with their named sections, a [`FunctionPlan`] per function with the
//! marshaling strategy of every parameter, and the serialized-record
//! schema plans. The plan is pure data — rendering it to bytes is the text
//! back-end's job.
//!
//! Planning is a pure function of the module: same IR in, bitwise-equal
//! plan out. Entry order follows `developer_types_order` for types and the
//! trusted-then-untrusted lists for functions.

mod file_plan;
mod function_plan;
mod schema;

pub use file_plan::{FileKind, FilePlan, Section};
pub use function_plan::{
    Binding, FunctionBank, FunctionPlan, MarshalKind, ParamPlan, PointerSizing,
};
pub use schema::{RecordField, RecordKind, RecordPlan};

use edl_ir::Edl;
use tracing::debug;

/// Everything the text renderer needs to emit one module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModulePlan {
    pub module_name: String,
    /// The six output files, each with its ordered section list.
    pub files: Vec<FilePlan>,
    /// Per-function marshaling plans, trusted bank first, in parse order.
    pub functions: Vec<FunctionPlan>,
    /// Schema records: developer types in declaration order, then the
    /// args/rets pair of every function.
    pub records: Vec<RecordPlan>,
    /// Always empty today: the planner only accepts validated modules, so
    /// it has nothing to report. Kept so the renderer contract is stable.
    pub diagnostics: Vec<String>,
}

/// Plan the emission for one validated module.
pub fn plan_module(edl: &Edl) -> ModulePlan {
    let functions: Vec<FunctionPlan> = edl
        .trusted_list
        .iter()
        .map(|function| function_plan::plan_function(edl, function, FunctionBank::Trusted))
        .chain(
            edl.untrusted_list
                .iter()
                .map(|function| function_plan::plan_function(edl, function, FunctionBank::Untrusted)),
        )
        .collect();

    debug!(
        module = %edl.name,
        functions = functions.len(),
        types = edl.developer_types_order.len(),
        "planned module emission"
    );

    ModulePlan {
        module_name: edl.name.clone(),
        files: file_plan::plan_files(edl),
        records: schema::plan_records(edl),
        functions,
        diagnostics: Vec::new(),
    }
}
