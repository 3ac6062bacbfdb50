//! In-memory GraphQL schema model.

use std::fmt;

use indexmap::IndexMap;

/// Scalars every GraphQL schema defines implicitly.
pub const BUILTIN_SCALARS: &[&str] = &["String", "Int", "Float", "Boolean", "ID"];

/// Returns true for the scalars every GraphQL schema defines implicitly.
pub fn is_builtin_scalar(name: &str) -> bool {
    BUILTIN_SCALARS.contains(&name)
}

/// Returns true for names reserved by the introspection namespace (`__Schema`, `__Type`, ...).
pub fn is_meta_type(name: &str) -> bool {
    name.starts_with("__")
}

/// A field's declared type, possibly wrapped in list/non-null combinators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A reference to a named type.
    Named(String),
    /// `[T]`
    List(Box<TypeRef>),
    /// `T!`
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// Whether the outermost wrapper is non-null.
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }

    /// Whether a list wrapper appears at any depth.
    pub fn is_list(&self) -> bool {
        match self {
            TypeRef::Named(_) => false,
            TypeRef::List(_) => true,
            TypeRef::NonNull(inner) => inner.is_list(),
        }
    }

    /// The innermost referenced type name, with every wrapper stripped.
    pub fn named_type(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.named_type(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{}", name),
            TypeRef::List(inner) => write!(f, "[{}]", inner),
            TypeRef::NonNull(inner) => write!(f, "{}!", inner),
        }
    }
}

/// A field of an object or interface type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeRef,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A member of an enum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub name: String,
    /// Underlying string value emitted for the member.
    pub value: String,
}

impl EnumValue {
    /// An enum member whose underlying value equals its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: name.clone(),
            name,
        }
    }
}

/// The kind of a named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeKind {
    Object,
    Interface,
    Enum,
    Scalar,
    Union,
    InputObject,
}

impl TypeKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Object => "object",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::Scalar => "scalar",
            TypeKind::Union => "union",
            TypeKind::InputObject => "input object",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One top-level type definition of a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamedType {
    Object { name: String, fields: Vec<Field> },
    Interface { name: String, fields: Vec<Field> },
    Enum { name: String, values: Vec<EnumValue> },
    Scalar { name: String },
    Union { name: String, members: Vec<String> },
    /// Carried so the walker can see it; never turned into a declaration.
    InputObject { name: String },
}

impl NamedType {
    pub fn name(&self) -> &str {
        match self {
            NamedType::Object { name, .. }
            | NamedType::Interface { name, .. }
            | NamedType::Enum { name, .. }
            | NamedType::Scalar { name }
            | NamedType::Union { name, .. }
            | NamedType::InputObject { name } => name,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            NamedType::Object { .. } => TypeKind::Object,
            NamedType::Interface { .. } => TypeKind::Interface,
            NamedType::Enum { .. } => TypeKind::Enum,
            NamedType::Scalar { .. } => TypeKind::Scalar,
            NamedType::Union { .. } => TypeKind::Union,
            NamedType::InputObject { .. } => TypeKind::InputObject,
        }
    }

    /// Fields of object and interface types.
    pub fn fields(&self) -> Option<&[Field]> {
        match self {
            NamedType::Object { fields, .. } | NamedType::Interface { fields, .. } => {
                Some(fields.as_slice())
            }
            _ => None,
        }
    }
}

/// An immutable GraphQL schema: type names mapped to their definitions,
/// in the order the provider declared them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    types: IndexMap<String, NamedType>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a type, replacing any previous definition with the same name
    /// while keeping its original position.
    pub fn insert(&mut self, ty: NamedType) {
        self.types.insert(ty.name().to_string(), ty);
    }

    pub fn get(&self, name: &str) -> Option<&NamedType> {
        self.types.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut NamedType> {
        self.types.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Iterate over all types in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &NamedType> {
        self.types.values()
    }

    /// Count the types of one kind.
    pub fn count(&self, kind: TypeKind) -> usize {
        self.types().filter(|ty| ty.kind() == kind).count()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<NamedType> for Schema {
    fn from_iter<I: IntoIterator<Item = NamedType>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for ty in iter {
            schema.insert(ty);
        }
        schema
    }
}
