use std::{collections::HashMap, fmt, sync::Arc};

use once_cell::sync::Lazy;

use super::{ScalarMapper, ScalarType, ValueMapper};

static BUILTIN: Lazy<MapperRegistry> = Lazy::new(MapperRegistry::with_builtins);

/// Value mappers keyed by type identifier.
///
/// Identifiers are matched case-insensitively.
#[derive(Clone, Default)]
pub struct MapperRegistry {
    mappers: HashMap<String, Arc<dyn ValueMapper>>,
}

impl MapperRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding one [`ScalarMapper`] per [`ScalarType`], keyed by
    /// [`ScalarType::name`].
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for ty in ScalarType::ALL {
            registry.register(ty.name(), Arc::new(ScalarMapper::new(ty)));
        }
        registry
    }

    /// Shared registry of builtin mappers.
    pub fn builtin() -> &'static MapperRegistry {
        &BUILTIN
    }

    /// Bind `mapper` to `name`, returning the mapper it replaces.
    pub fn register(
        &mut self,
        name: impl AsRef<str>,
        mapper: Arc<dyn ValueMapper>,
    ) -> Option<Arc<dyn ValueMapper>> {
        self.mappers.insert(normalize(name.as_ref()), mapper)
    }

    /// The mapper bound to `name`.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ValueMapper>> {
        self.mappers.get(&normalize(name))
    }

    /// Whether a mapper is bound to `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.mappers.contains_key(&normalize(name))
    }

    /// Registered identifiers in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.mappers.keys().map(String::as_str)
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

impl fmt::Debug for MapperRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("MapperRegistry")
            .field("mappers", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::{MapFailure, ParseFailure, Scalar};

    struct Percent;

    impl ValueMapper for Percent {
        fn target(&self) -> ScalarType {
            ScalarType::Double
        }

        fn try_map(&self, input: &[u8]) -> Result<Scalar, MapFailure> {
            let trimmed = input.strip_suffix(b"%").unwrap_or(input);
            match ScalarType::Double.parse(trimmed) {
                Ok(Scalar::Double(v)) => Ok(Scalar::Double(v / 100.0)),
                Ok(other) => Ok(other),
                Err(reason) => Err(MapFailure {
                    input: input.to_vec(),
                    target: ScalarType::Double,
                    reason,
                }),
            }
        }
    }

    #[test]
    fn builtins_cover_every_scalar_type() {
        let registry = MapperRegistry::builtin();
        for ty in ScalarType::ALL {
            let mapper = registry.get(ty.name()).expect("builtin mapper");
            assert_eq!(mapper.target(), ty);
        }
        assert!(registry.contains("Boolean"));
        assert!(!registry.contains("percent"));
    }

    #[test]
    fn custom_mapper_registration() {
        let mut registry = MapperRegistry::with_builtins();
        assert!(registry.register("percent", Arc::new(Percent)).is_none());
        let mapper = registry.get("PERCENT").unwrap();
        assert_eq!(mapper.try_map(b"50%").unwrap(), Scalar::Double(0.5));
        assert!(matches!(
            mapper.try_map(b"half").unwrap_err().reason,
            ParseFailure::Float(_)
        ));

        let replaced = registry.register("short", Arc::new(ScalarMapper::new(ScalarType::Int)));
        assert_eq!(replaced.map(|m| m.target()), Some(ScalarType::Short));
    }
}
