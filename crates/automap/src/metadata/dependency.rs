/// A mapper another mapper calls for a nested property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapperDependency {
    /// Name under which the calling mapper looks the dependency up.
    pub name: String,
    pub source: String,
    pub target: String,
}

impl MapperDependency {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> MapperDependency {
        let source = source.into();
        let target = target.into();

        MapperDependency {
            name: super::mapper_identity("Mapper_", &source, &target),
            source,
            target,
        }
    }
}
