//! Recursive descent parser and validator for EDL modules.
//!
//! Single-pass, top-down, with a two-token lookahead window and no
//! backtracking. All static rules are enforced while parsing; the two
//! checks that need the whole module (`size`/`count` identifier resolution
//! and struct metadata propagation) run in a final pass once the enclave
//! body is closed.
//!
//! Parsing stops at the first error. There is no recovery and no partial
//! IR: the caller gets either a fully validated [`Edl`] or one
//! [`EdlError`].

mod cursor;
mod grammar;
mod validate;


use std::fmt;
use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::info;

use edl_diagnostic::{EdlError, ErrorCode};
use edl_ir::{keywords, DeveloperType, Edl, Function, Token};
use edl_lexer::Lexer;

use cursor::Cursor;
use grammar::FunctionBank;

/// Failure of [`parse_file`]: either the file could not be read, or its
/// contents failed analysis. I/O errors pass through unwrapped so the
/// driver can map them to its own exit code.
#[derive(Debug)]
pub enum ParseFileError {
    Io(std::io::Error),
    Analysis(EdlError),
}

impl fmt::Display for ParseFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFileError::Io(error) => write!(f, "{error}"),
            ParseFileError::Analysis(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for ParseFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseFileError::Io(error) => Some(error),
            ParseFileError::Analysis(error) => Some(error),
        }
    }
}

impl From<std::io::Error> for ParseFileError {
    fn from(error: std::io::Error) -> Self {
        ParseFileError::Io(error)
    }
}

/// Parse an `.edl` file. The module name is the file stem.
pub fn parse_file(path: &Path) -> Result<Edl, ParseFileError> {
    let source = std::fs::read_to_string(path)?;
    let module_name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    parse_str(module_name, &source).map_err(ParseFileError::Analysis)
}

/// Parse EDL source under an explicit module name.
pub fn parse_str(module_name: &str, source: &str) -> Result<Edl, EdlError> {
    Parser::new(module_name, source).parse()
}

/// Parser state: the cursor plus everything accumulated while walking the
/// module body.
pub struct Parser {
    cursor: Cursor,
    module_name: String,
    developer_types: FxHashMap<String, DeveloperType>,
    /// Type names in first-seen order; the order list in the returned
    /// [`Edl`] is materialized from this after metadata propagation.
    type_order: Vec<String>,
    trusted_map: FxHashMap<String, Function>,
    trusted_list: Vec<Function>,
    untrusted_map: FxHashMap<String, Function>,
    untrusted_list: Vec<Function>,
    /// Shared across both banks so every ABI name is unique in parse order.
    abi_function_index: u32,
}

impl Parser {
    pub fn new(module_name: &str, source: &str) -> Self {
        let file = format!("{module_name}.edl");
        Parser {
            cursor: Cursor::new(file, Lexer::new(source)),
            module_name: module_name.to_string(),
            developer_types: FxHashMap::default(),
            type_order: Vec::new(),
            trusted_map: FxHashMap::default(),
            trusted_list: Vec::new(),
            untrusted_map: FxHashMap::default(),
            untrusted_list: Vec::new(),
            abi_function_index: 0,
        }
    }

    /// Parse the whole module: `enclave { ... }` plus final validations.
    pub fn parse(mut self) -> Result<Edl, EdlError> {
        info!(module = %self.module_name, "processing EDL module");

        self.cursor.expect("enclave")?;
        self.cursor.expect("{")?;
        self.parse_body()?;
        self.cursor.expect("}")?;

        let edl = self.finish()?;
        info!(module = %edl.name, "completed parsing successfully");
        Ok(edl)
    }

    fn parse_body(&mut self) -> Result<(), EdlError> {
        while self.cursor.current() != "}" && !self.cursor.current().is_eof() {
            let token = self.cursor.advance();

            if token == "trusted" {
                self.parse_functions(FunctionBank::Trusted)?;
            } else if token == "untrusted" {
                self.parse_functions(FunctionBank::Untrusted)?;
            } else if token == "enum" {
                self.parse_enum()?;
            } else if token == "struct" {
                self.parse_struct()?;
            } else {
                return Err(self
                    .cursor
                    .error_at(ErrorCode::UnexpectedToken, &token)
                    .with_arg(token.value.clone()));
            }
        }
        Ok(())
    }

    /// Run the final validation pass and assemble the module.
    fn finish(mut self) -> Result<Edl, EdlError> {
        self.validate_size_count_references()?;
        self.propagate_struct_metadata();

        let developer_types_order = self
            .type_order
            .iter()
            .filter_map(|name| self.developer_types.get(name).cloned())
            .collect();

        Ok(Edl {
            name: self.module_name,
            developer_types: self.developer_types,
            developer_types_order,
            trusted_map: self.trusted_map,
            trusted_list: self.trusted_list,
            untrusted_map: self.untrusted_map,
            untrusted_list: self.untrusted_list,
        })
    }

    // --- Shared registration helpers ---

    fn check_type_name(&self, token: &Token) -> Result<(), EdlError> {
        if keywords::is_reserved(&token.value) {
            return Err(self
                .cursor
                .error_here(ErrorCode::TypeNameIdentifierIsReserved)
                .with_arg(token.value.clone()));
        }
        if self.developer_types.contains_key(&token.value) {
            return Err(self
                .cursor
                .error_here(ErrorCode::DuplicateTypeDefinition)
                .with_arg(token.value.clone()));
        }
        Ok(())
    }

    fn check_reserved_name(&self, name: &str) -> Result<(), EdlError> {
        if keywords::is_reserved(name) {
            return Err(self
                .cursor
                .error_here(ErrorCode::TypeNameIdentifierIsReserved)
                .with_arg(name));
        }
        Ok(())
    }

    /// Record a new developer type at the current first-seen position.
    fn register_developer_type(&mut self, developer_type: DeveloperType) {
        self.type_order.push(developer_type.name.clone());
        self.developer_types
            .insert(developer_type.name.clone(), developer_type);
    }
}
