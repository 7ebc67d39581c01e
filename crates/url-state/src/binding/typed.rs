//! Statically typed parameter bindings.

use crate::binding::ParamBinding;
use crate::model::{Location, ParamDescriptor, ParamValue, PendingUpdate, Value};

/// A [`ParamBinding`] whose values are the Rust type `T`.
///
/// The descriptor's type comes from `T::TYPE`, so updates cannot fail.
#[derive(Debug, Clone)]
pub struct TypedBinding<T> {
    inner: ParamBinding,
    default: T,
}

impl<T: ParamValue> TypedBinding<T> {
    /// Creates a binding for `name` with `default`, reading the initial value
    /// from `location`.
    pub fn new(name: impl Into<String>, default: T, location: &Location) -> Self {
        let descriptor = ParamDescriptor::new(name, default.clone().into_value());
        debug_assert_eq!(descriptor.param_type(), T::TYPE);
        Self {
            inner: ParamBinding::new(descriptor, location),
            default,
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Returns the untyped binding.
    pub fn as_binding(&self) -> &ParamBinding {
        &self.inner
    }

    /// Returns the currently exposed value.
    pub fn value(&self) -> T {
        self.convert(self.inner.value().clone())
    }

    /// Decodes this parameter from `location`.
    pub fn read(&self, location: &Location) -> T {
        self.convert(self.inner.read(location))
    }

    /// Recomputes the value from `location`; returns true if it changed.
    pub fn observe(&mut self, location: &Location) -> bool {
        self.inner.observe(location)
    }

    /// Produces the update that writes `value`, or removes the key for
    /// `None`.
    pub fn update(&self, value: Option<T>) -> PendingUpdate {
        let value = value.map(ParamValue::into_value);
        self.inner.update_unchecked(value.as_ref())
    }

    fn convert(&self, value: Value) -> T {
        // decoding always yields T::TYPE, the fallback is unreachable
        T::from_value(value).unwrap_or_else(|| self.default.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ObjectMap, UpdateAction};

    #[test]
    fn test_typed_number() {
        let mut page = TypedBinding::new("page", 1.0, &Location::new("/", "?page=4"));
        assert_eq!(page.value(), 4.0);
        assert!(page.observe(&Location::new("/", "")));
        assert_eq!(page.value(), 1.0);
    }

    #[test]
    fn test_typed_update() {
        let active = TypedBinding::new("active", false, &Location::default());
        assert_eq!(active.update(Some(true)), PendingUpdate::set("active", "true"));
        assert_eq!(active.update(Some(false)), PendingUpdate::delete("active"));
        assert_eq!(active.update(None).action(), &UpdateAction::Delete);
    }

    #[test]
    fn test_typed_collections() {
        let tags = TypedBinding::new("tags", Vec::<String>::new(), &Location::new("/", "?tags=a,b"));
        assert_eq!(tags.value(), vec!["a".to_string(), "b".to_string()]);

        let filters = TypedBinding::new("filters", ObjectMap::new(), &Location::new("/", "?filters=oops"));
        assert!(filters.value().is_empty());
    }

    #[test]
    fn test_typed_read_is_pure() {
        let q = TypedBinding::new("q", String::new(), &Location::default());
        assert_eq!(q.read(&Location::new("/", "?q=a%20b")), "a b");
        assert_eq!(q.value(), "");
    }
}
