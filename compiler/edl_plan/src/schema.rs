//! Serialized-record (flatbuffer) schema plans.
//!
//! One record per developer type, plus an `{abi}_args`/`{abi}_rets` pair per
//! function. Fields mirror the declaration lists; types are recorded with
//! their EDL spelling, which the renderer maps to schema syntax.

use edl_ir::{Declaration, DeveloperType, Edl, EdlTypeKind, Function};

/// Flavor of a schema record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RecordKind {
    /// A value enumeration (developer enums and the anonymous enum).
    Enum,
    /// A field table (structs and the per-function args/rets records).
    Table,
}

/// One field of a table record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordField {
    pub name: String,
    /// The EDL-level type spelling (`uint8_t*`, `vector<uint32_t>`, ...).
    pub type_name: String,
}

/// One record in the schema file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordPlan {
    pub name: String,
    pub kind: RecordKind,
    /// Table fields; empty for enum records.
    pub fields: Vec<RecordField>,
    /// Enum member names; empty for table records.
    pub members: Vec<String>,
}

fn field(declaration: &Declaration) -> RecordField {
    RecordField {
        name: declaration.name.clone(),
        type_name: declaration.type_info.to_string(),
    }
}

fn developer_type_record(developer_type: &DeveloperType) -> RecordPlan {
    match developer_type.kind {
        EdlTypeKind::Struct => RecordPlan {
            name: developer_type.name.clone(),
            kind: RecordKind::Table,
            fields: developer_type.fields.iter().map(field).collect(),
            members: Vec::new(),
        },
        _ => RecordPlan {
            name: developer_type.name.clone(),
            kind: RecordKind::Enum,
            fields: Vec::new(),
            members: developer_type
                .items
                .iter()
                .map(|member| member.name.clone())
                .collect(),
        },
    }
}

fn function_records(function: &Function) -> [RecordPlan; 2] {
    // The argument record mirrors the whole parameter list: `out` buffers
    // still need their extents on the far side to allocate.
    let args = RecordPlan {
        name: format!("{}_args", function.abi_name),
        kind: RecordKind::Table,
        fields: function.parameters.iter().map(field).collect(),
        members: Vec::new(),
    };

    let mut rets_fields: Vec<RecordField> = function
        .parameters
        .iter()
        .filter(|parameter| {
            parameter
                .attributes
                .as_ref()
                .is_some_and(|attributes| attributes.out_present)
        })
        .map(field)
        .collect();
    if !function.return_info.is_kind(EdlTypeKind::Void) {
        rets_fields.push(field(&function.return_info));
    }

    let rets = RecordPlan {
        name: format!("{}_rets", function.abi_name),
        kind: RecordKind::Table,
        fields: rets_fields,
        members: Vec::new(),
    };

    [args, rets]
}

/// All records for a module, developer types first (declaration order),
/// then one args/rets pair per function, trusted bank first.
pub(crate) fn plan_records(edl: &Edl) -> Vec<RecordPlan> {
    let mut records: Vec<RecordPlan> = edl
        .developer_types_order
        .iter()
        .map(developer_type_record)
        .collect();

    for function in edl.trusted_list.iter().chain(edl.untrusted_list.iter()) {
        records.extend(function_records(function));
    }

    records
}
