use indexmap::IndexSet;

/// Names of the enum types produced by the enum pass.
///
/// The registry is built in one go from the finished enum pass and has no
/// mutating methods, so declarations synthesized afterwards always observe
/// the complete set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumRegistry {
    names: IndexSet<String>,
}

impl EnumRegistry {
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<String> for EnumRegistry {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter)
    }
}
