//! Grammar modules.
//!
//! Each module extends [`Parser`](crate::Parser) with methods for one group
//! of productions:
//!
//! - [`attr`]: `[in, out, size=..., count=...]` attribute blocks
//! - [`decl`]: fields, parameters, and array dimensions
//! - [`enum_def`]: named and anonymous `enum` blocks
//! - [`function`]: the `trusted`/`untrusted` banks
//! - [`struct_def`]: `struct` definitions
//! - [`ty`]: type references, pointers, and `vector<...>`
//!
//! Every production returns `Result<_, EdlError>`: there is no
//! backtracking, so the first failure unwinds the whole parse.

mod attr;
mod decl;
mod enum_def;
mod function;
mod struct_def;
mod ty;

pub(crate) use function::FunctionBank;
