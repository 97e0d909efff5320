//! Type resolution seam between schemas and the mapper

use crate::model::TypeDescriptor;

/// Answers property questions about target classes
///
/// The mapper never caches answers; every mapping call re-queries.
pub trait TypeResolver: Send + Sync {
    /// Declared property names of a class, or `None` when the class is unknown
    fn properties_of(&self, class: &str) -> Option<Vec<String>>;

    /// Declared type of a property, or `None` when nothing is declared
    fn type_of(&self, class: &str, property: &str) -> Option<TypeDescriptor>;

    /// Whether the class can be instantiated
    fn is_known(&self, class: &str) -> bool {
        self.properties_of(class).is_some()
    }
}

impl<R: TypeResolver + ?Sized> TypeResolver for &R {
    fn properties_of(&self, class: &str) -> Option<Vec<String>> {
        (**self).properties_of(class)
    }

    fn type_of(&self, class: &str, property: &str) -> Option<TypeDescriptor> {
        (**self).type_of(class, property)
    }

    fn is_known(&self, class: &str) -> bool {
        (**self).is_known(class)
    }
}

impl<R: TypeResolver + ?Sized> TypeResolver for std::sync::Arc<R> {
    fn properties_of(&self, class: &str) -> Option<Vec<String>> {
        (**self).properties_of(class)
    }

    fn type_of(&self, class: &str, property: &str) -> Option<TypeDescriptor> {
        (**self).type_of(class, property)
    }

    fn is_known(&self, class: &str) -> bool {
        (**self).is_known(class)
    }
}
