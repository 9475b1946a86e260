//! Per-function marshaling plans.
//!
//! A [`FunctionPlan`] captures everything the text renderer needs to emit
//! one function's stubs: direction tags per parameter, which buffers get
//! copied in and back out, the resolved size/count bindings, and the
//! marshaling strategy.

use edl_ir::{Declaration, Edl, EdlTypeKind, Function, Token};

/// Which bank a planned function came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FunctionBank {
    Trusted,
    Untrusted,
}

/// How a `size`/`count` value is obtained at call time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Binding {
    /// A literal from the EDL source.
    Literal(u64),
    /// A member of the anonymous enum.
    EnumConstant(String),
    /// A sibling parameter or field, validated to be a bare unsigned
    /// integer by the parser's final pass.
    Parameter(String),
}

/// How a pointer parameter's extent is known.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerSizing {
    /// `size=` gives the byte count of the pointee buffer.
    Sized,
    /// `count=` (or an array dimension, or the implicit single element)
    /// gives the element count.
    Counted,
}

/// Marshaling strategy for one parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarshalKind {
    Scalar,
    Enum,
    StructByValue,
    Pointer(PointerSizing),
    Vector,
}

/// Plan for one parameter (or the synthetic return value).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamPlan {
    pub name: String,
    /// Carried into the call (`in` or `in`+`out`).
    pub forward: bool,
    /// Carried back out (`out` or `in`+`out`).
    pub is_return: bool,
    /// Copied into the serialized argument record before the call.
    pub convert_in_struct: bool,
    /// Copied from the serialized result record back into the caller's
    /// buffer after the call.
    pub copy_back_out: bool,
    pub size_binding: Option<Binding>,
    pub count_binding: Option<Binding>,
    pub marshal_kind: MarshalKind,
}

/// Plan for one function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionPlan {
    pub name: String,
    pub abi_name: String,
    pub bank: FunctionBank,
    /// Serialized-record type carrying the arguments: `{abi_name}_args`.
    pub args_record: String,
    /// Serialized-record type carrying the results: `{abi_name}_rets`.
    pub rets_record: String,
    pub return_plan: ParamPlan,
    pub parameters: Vec<ParamPlan>,
    pub returns_void: bool,
    /// True when anything flows back: an `out` parameter or a non-void
    /// return value.
    pub needs_return_params: bool,
}

pub(crate) fn plan_function(edl: &Edl, function: &Function, bank: FunctionBank) -> FunctionPlan {
    let parameters: Vec<ParamPlan> = function
        .parameters
        .iter()
        .map(|parameter| plan_parameter(edl, parameter))
        .collect();

    let mut return_plan = plan_parameter(edl, &function.return_info);
    // The return value travels inside the result record; there is no
    // caller buffer to copy back into.
    return_plan.copy_back_out = false;

    let returns_void = function.return_info.is_kind(EdlTypeKind::Void);
    let needs_return_params = !returns_void || parameters.iter().any(|p| p.is_return);

    FunctionPlan {
        name: function.name.clone(),
        abi_name: function.abi_name.clone(),
        bank,
        args_record: format!("{}_args", function.abi_name),
        rets_record: format!("{}_rets", function.abi_name),
        return_plan,
        parameters,
        returns_void,
        needs_return_params,
    }
}

fn plan_parameter(edl: &Edl, declaration: &Declaration) -> ParamPlan {
    let attributes = declaration.attributes.clone().unwrap_or_default();
    let forward = attributes.in_present;
    let is_return = attributes.out_present;

    let size_binding = attributes
        .size_info
        .as_ref()
        .map(|token| resolve_binding(edl, token));
    let mut count_binding = attributes
        .count_info
        .as_ref()
        .map(|token| resolve_binding(edl, token));

    let marshal_kind = if declaration.has_pointer() {
        if size_binding.is_some() {
            MarshalKind::Pointer(PointerSizing::Sized)
        } else {
            // Without size or count the pointer covers one element.
            if count_binding.is_none() {
                count_binding = Some(Binding::Literal(1));
            }
            MarshalKind::Pointer(PointerSizing::Counted)
        }
    } else if declaration.is_container() {
        // The vector's length travels inside the record itself.
        MarshalKind::Vector
    } else if let Some(dimension) = declaration.array_dimensions.first() {
        // A fixed-size array marshals as a counted buffer.
        count_binding = Some(resolve_binding(edl, dimension));
        MarshalKind::Pointer(PointerSizing::Counted)
    } else {
        match declaration.type_info.kind {
            EdlTypeKind::Struct => MarshalKind::StructByValue,
            EdlTypeKind::Enum | EdlTypeKind::AnonymousEnum => MarshalKind::Enum,
            _ => MarshalKind::Scalar,
        }
    };

    let copy_back_out =
        is_return && matches!(marshal_kind, MarshalKind::Pointer(_) | MarshalKind::Vector);

    ParamPlan {
        name: declaration.name.clone(),
        forward,
        is_return,
        convert_in_struct: forward,
        copy_back_out,
        size_binding,
        count_binding,
        marshal_kind,
    }
}

fn resolve_binding(edl: &Edl, token: &Token) -> Binding {
    if token.is_unsigned_integer() {
        if let Some(value) = token.as_unsigned() {
            return Binding::Literal(value);
        }
    }
    if edl
        .anonymous_enum()
        .is_some_and(|enum_type| enum_type.has_item(&token.value))
    {
        return Binding::EnumConstant(token.value.clone());
    }
    Binding::Parameter(token.value.clone())
}
