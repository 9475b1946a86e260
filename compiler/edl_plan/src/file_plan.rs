//! The six per-module output files and their named sections.
//!
//! A [`FilePlan`] is structural: it says which sections a file contains and
//! which named entries each section lists, in emission order. The text
//! renderer decides what the sections look like as bytes.

use edl_ir::Edl;

/// The logical outputs derived from one module.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FileKind {
    /// Host-side stubs for calling into the enclave.
    TrustedHostHeader,
    /// Enclave-side entry points plus developer-implementation declarations.
    TrustedEnclaveHeader,
    /// Host-side callback dispatch plus developer-implementation declarations.
    UntrustedHostHeader,
    /// Enclave-side stubs for calling back out to the host.
    UntrustedEnclaveHeader,
    /// Shared ABI definitions: direction tags, record aliases, export table.
    AbiDefinitionsHeader,
    /// Serialized-record schema covering every developer type and function.
    FlatbufferSchema,
}

/// One named section inside a file, with the entries it emits in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub entries: Vec<String>,
}

impl Section {
    fn new(name: &str, entries: Vec<String>) -> Self {
        Section {
            name: name.to_string(),
            entries,
        }
    }
}

/// One output file: its kind, its rendered name, and its sections in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePlan {
    pub kind: FileKind,
    pub file_name: String,
    pub sections: Vec<Section>,
}

pub(crate) fn plan_files(edl: &Edl) -> Vec<FilePlan> {
    let trusted_names: Vec<String> = edl.trusted_list.iter().map(|f| f.name.clone()).collect();
    let trusted_abi: Vec<String> = edl.trusted_list.iter().map(|f| f.abi_name.clone()).collect();
    let untrusted_names: Vec<String> = edl.untrusted_list.iter().map(|f| f.name.clone()).collect();
    let untrusted_abi: Vec<String> = edl
        .untrusted_list
        .iter()
        .map(|f| f.abi_name.clone())
        .collect();

    let record_aliases: Vec<String> = edl
        .trusted_list
        .iter()
        .chain(edl.untrusted_list.iter())
        .flat_map(|f| [format!("{}_args", f.abi_name), format!("{}_rets", f.abi_name)])
        .collect();

    let type_records: Vec<String> = edl
        .developer_types_order
        .iter()
        .map(|t| t.name.clone())
        .collect();

    vec![
        FilePlan {
            kind: FileKind::TrustedHostHeader,
            file_name: format!("{}_trusted_host.h", edl.name),
            sections: vec![Section::new("trusted_stub_functions", trusted_names.clone())],
        },
        FilePlan {
            kind: FileKind::TrustedEnclaveHeader,
            file_name: format!("{}_trusted_enclave.h", edl.name),
            sections: vec![
                Section::new("abi_entry_functions", trusted_abi.clone()),
                Section::new("trusted_function_declarations", trusted_names),
            ],
        },
        FilePlan {
            kind: FileKind::UntrustedHostHeader,
            file_name: format!("{}_untrusted_host.h", edl.name),
            sections: vec![
                Section::new("untrusted_callback_address_table", untrusted_abi.clone()),
                Section::new("untrusted_function_declarations", untrusted_names.clone()),
                Section::new("abi_dispatch_functions", untrusted_abi),
            ],
        },
        FilePlan {
            kind: FileKind::UntrustedEnclaveHeader,
            file_name: format!("{}_untrusted_enclave.h", edl.name),
            sections: vec![Section::new("untrusted_stub_functions", untrusted_names)],
        },
        FilePlan {
            kind: FileKind::AbiDefinitionsHeader,
            file_name: format!("{}_abi_definitions.h", edl.name),
            sections: vec![
                Section::new(
                    "data_direction_tags",
                    vec!["HostToEnclave".to_string(), "EnclaveToHost".to_string()],
                ),
                Section::new("record_type_aliases", record_aliases.clone()),
                // Only trusted functions are exported symbols of the enclave
                // binary; untrusted callbacks dispatch through the address
                // table instead.
                Section::new("exported_symbols", trusted_abi),
            ],
        },
        FilePlan {
            kind: FileKind::FlatbufferSchema,
            file_name: format!("{}.fbs", edl.name),
            sections: vec![
                Section::new("developer_type_records", type_records),
                Section::new("function_records", record_aliases),
            ],
        },
    ]
}
