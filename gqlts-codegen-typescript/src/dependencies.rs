//! Import resolution for one declaration.

use gqlts_codegen::{
    generation::{EnumRegistry, ImportCollector},
    language::ScalarMapper,
};

use crate::{
    naming::{enum_module, type_module},
    renderer::RenderedType,
    type_mapper::{DATE_MODULE, DATE_TYPE, TypeScriptTypeMapper},
};

/// Collects the imports a declaration needs, one field at a time.
///
/// Each distinct referenced type is imported once, in the order it is first
/// referenced:
///
/// 1. The date type is imported type-only from its package.
/// 2. Primitives and the declaration's own name need no import.
/// 3. Known enums are value imports from the enums directory.
/// 4. Everything else is a type-only import from a sibling file.
pub struct DependencyResolver<'a> {
    current: &'a str,
    enums: &'a EnumRegistry,
    mapper: TypeScriptTypeMapper,
    imports: ImportCollector,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(current: &'a str, enums: &'a EnumRegistry) -> Self {
        Self {
            current,
            enums,
            mapper: TypeScriptTypeMapper,
            imports: ImportCollector::new(),
        }
    }

    /// Record the import needed by one rendered field type, if any.
    pub fn resolve(&mut self, rendered: &RenderedType) {
        let base = rendered.base_name.as_str();

        if base == DATE_TYPE {
            self.imports.add_type(DATE_MODULE, DATE_TYPE);
        } else if self.mapper.is_primitive(base) || base == self.current {
            // no import
        } else if self.enums.contains(base) {
            self.imports.add(&enum_module(base), base);
        } else {
            self.imports.add_type(&type_module(base), base);
        }
    }

    pub fn finish(self) -> ImportCollector {
        self.imports
    }
}
