//! Type reference rendering.

use gqlts_codegen::language::ScalarMapper;
use gqlts_schema::TypeRef;

/// A field type rendered for TypeScript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedType {
    /// The type expression, e.g. `string[]`.
    pub text: String,
    /// Whether the outermost wrapper is non-null.
    pub required: bool,
    /// The unwrapped type the expression refers to: a TypeScript primitive,
    /// the date type, or a schema type name.
    pub base_name: String,
}

/// Renders [`TypeRef`]s using a scalar mapper.
#[derive(Debug, Clone, Copy)]
pub struct TypeRenderer<'a, M> {
    mapper: &'a M,
}

impl<'a, M: ScalarMapper> TypeRenderer<'a, M> {
    pub fn new(mapper: &'a M) -> Self {
        Self { mapper }
    }

    /// Render a field type.
    ///
    /// Any list wrapper, at any depth, becomes a single `[]` suffix:
    /// `[[Int]]` renders as `number[]`, not `number[][]`. Names outside the
    /// scalar table are kept as they are so they can be imported.
    pub fn render(&self, ty: &TypeRef) -> RenderedType {
        let named = ty.named_type();
        let base_name = self
            .mapper
            .map_known(named)
            .map_or_else(|| named.to_string(), str::to_string);

        let text = if ty.is_list() {
            format!("{base_name}[]")
        } else {
            base_name.clone()
        };

        RenderedType {
            text,
            required: ty.is_non_null(),
            base_name,
        }
    }
}
