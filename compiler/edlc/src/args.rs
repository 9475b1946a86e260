//! Command-line surface of the driver.
//!
//! Flags are matched by hand from `std::env::args`; `--edl` and
//! `--output-directory` are required, everything else has a default.

use std::path::PathBuf;

/// Whether generated stubs report failures by throwing or by status code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorHandlingKind {
    Exception,
    ErrorCode,
}

/// Which side of the trust boundary is being generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VirtualTrustLayerKind {
    Vtl0,
    Vtl1,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub edl: PathBuf,
    pub output_directory: PathBuf,
    pub error_handling: ErrorHandlingKind,
    pub virtual_trust_layer: VirtualTrustLayerKind,
    /// Namespace for generated code; defaults to the module name.
    pub namespace: Option<String>,
    /// Host-side façade class name.
    pub vtl0_class_name: String,
    pub flatbuffer_compiler: Option<PathBuf>,
}

impl CliArgs {
    /// Parse flags from an argument iterator (program name already
    /// stripped). Returns a usage message on any malformed input.
    pub fn parse(mut args: impl Iterator<Item = String>) -> Result<CliArgs, String> {
        let mut edl = None;
        let mut output_directory = None;
        let mut error_handling = ErrorHandlingKind::Exception;
        let mut virtual_trust_layer = VirtualTrustLayerKind::Vtl0;
        let mut namespace = None;
        let mut vtl0_class_name = "Enclave".to_string();
        let mut flatbuffer_compiler = None;

        while let Some(flag) = args.next() {
            let mut value = |flag: &str| {
                args.next()
                    .ok_or_else(|| format!("{flag} requires a value"))
            };
            match flag.as_str() {
                "--edl" => edl = Some(PathBuf::from(value("--edl")?)),
                "--output-directory" => {
                    output_directory = Some(PathBuf::from(value("--output-directory")?));
                }
                "--error-handling" => {
                    error_handling = match value("--error-handling")?.as_str() {
                        "exception" => ErrorHandlingKind::Exception,
                        "errorcode" => ErrorHandlingKind::ErrorCode,
                        other => {
                            return Err(format!(
                                "--error-handling must be `exception` or `errorcode`, got `{other}`"
                            ))
                        }
                    };
                }
                "--virtual-trust-layer" => {
                    virtual_trust_layer = match value("--virtual-trust-layer")?.as_str() {
                        "vtl0" => VirtualTrustLayerKind::Vtl0,
                        "vtl1" => VirtualTrustLayerKind::Vtl1,
                        other => {
                            return Err(format!(
                                "--virtual-trust-layer must be `vtl0` or `vtl1`, got `{other}`"
                            ))
                        }
                    };
                }
                "--namespace" => namespace = Some(value("--namespace")?),
                "--vtl0-class-name" => vtl0_class_name = value("--vtl0-class-name")?,
                "--flatbuffer-compiler" => {
                    flatbuffer_compiler = Some(PathBuf::from(value("--flatbuffer-compiler")?));
                }
                other => return Err(format!("unknown flag `{other}`")),
            }
        }

        Ok(CliArgs {
            edl: edl.ok_or("--edl is required")?,
            output_directory: output_directory.ok_or("--output-directory is required")?,
            error_handling,
            virtual_trust_layer,
            namespace,
            vtl0_class_name,
            flatbuffer_compiler,
        })
    }
}

pub fn print_usage() {
    println!("EDL code generator");
    println!();
    println!("Usage: edlc --edl <path> --output-directory <dir> [options]");
    println!();
    println!("Options:");
    println!("  --edl <path>                  EDL interface definition to process (required)");
    println!("  --output-directory <dir>      Where generated files go; created if missing (required)");
    println!("  --error-handling <kind>       `exception` (default) or `errorcode`");
    println!("  --virtual-trust-layer <vtl>   `vtl0` (default) or `vtl1`");
    println!("  --namespace <ident>           Namespace for generated code (default: module name)");
    println!("  --vtl0-class-name <ident>     Host-side enclave facade class name (default: Enclave)");
    println!("  --flatbuffer-compiler <path>  External serialized-record compiler");
    println!();
    println!("Exit codes: 0 success, 1 parse/validation error, 2 I/O error, 3 downstream compiler error");
}
