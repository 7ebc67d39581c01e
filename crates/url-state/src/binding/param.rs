//! Binding of one named parameter to the query string.
//!
//! A binding is in one of two states. While *reading* it recomputes its
//! value from each observed [`Location`] and exposes a new value only when
//! the decoded value is not deep-equal to the current one. While *updating*
//! it turns a caller-supplied value into a [`PendingUpdate`].
//!
//! Writing a value deep-equal to the descriptor's default removes the key
//! instead of writing it explicitly, so URLs only carry non-default state.

use crate::codec::{decode_value, encode_as, encode_value, parse_search};
use crate::error::EncodeError;
use crate::model::{Location, ParamDescriptor, PendingUpdate, RawParams, Value};

/// A parameter bound to the query string.
#[derive(Debug, Clone)]
pub struct ParamBinding {
    descriptor: ParamDescriptor,
    current: Value,
}

impl ParamBinding {
    /// Creates a binding whose initial value is read from `location`.
    pub fn new(descriptor: ParamDescriptor, location: &Location) -> Self {
        let current = read_param(&descriptor, &parse_search(&location.search));
        Self {
            descriptor,
            current,
        }
    }

    pub fn descriptor(&self) -> &ParamDescriptor {
        &self.descriptor
    }

    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// Returns the currently exposed value.
    pub fn value(&self) -> &Value {
        &self.current
    }

    /// Decodes this parameter from `location` without touching the exposed
    /// value.
    pub fn read(&self, location: &Location) -> Value {
        read_param(&self.descriptor, &parse_search(&location.search))
    }

    /// Recomputes the value from `location`.
    ///
    /// Returns true if the exposed value changed.
    pub fn observe(&mut self, location: &Location) -> bool {
        let next = self.read(location);
        if next == self.current {
            return false;
        }
        tracing::debug!(param = self.name(), "parameter value changed");
        self.current = next;
        true
    }

    /// Produces the update that writes `value`, or removes the key for
    /// `None`.
    ///
    /// Fails if `value` does not have the descriptor's type.
    pub fn update(&self, value: Option<&Value>) -> Result<PendingUpdate, EncodeError> {
        match value {
            Some(value) => {
                let encoded = encode_as(self.name(), self.descriptor.param_type(), value)?;
                Ok(self.update_encoded(value, encoded))
            }
            None => Ok(PendingUpdate::delete(self.name())),
        }
    }

    /// Same as [`update`](Self::update) for a value already known to have
    /// the right type.
    pub(crate) fn update_unchecked(&self, value: Option<&Value>) -> PendingUpdate {
        match value {
            Some(value) => self.update_encoded(value, encode_value(value)),
            None => PendingUpdate::delete(self.name()),
        }
    }

    fn update_encoded(&self, value: &Value, encoded: String) -> PendingUpdate {
        if self.descriptor.is_default(value) {
            PendingUpdate::delete(self.name())
        } else {
            PendingUpdate::set(self.name(), encoded)
        }
    }
}

/// Decodes one parameter from a parsed mapping, falling back to the default
/// when the key is absent.
pub fn read_param(descriptor: &ParamDescriptor, params: &RawParams) -> Value {
    match params.get(descriptor.name()) {
        Some(raw) => decode_value(descriptor.param_type(), raw),
        None => descriptor.default_value().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ParamType, UpdateAction};

    #[test]
    fn test_initial_value() {
        let page = ParamBinding::new(ParamDescriptor::new("page", 1), &Location::new("/", ""));
        assert_eq!(page.value(), &Value::Number(1.0));

        let page = ParamBinding::new(ParamDescriptor::new("page", 1), &Location::new("/", "?page=3"));
        assert_eq!(page.value(), &Value::Number(3.0));
    }

    #[test]
    fn test_observe_transitions_only_on_change() {
        let mut q = ParamBinding::new(ParamDescriptor::string("q"), &Location::new("/", ""));
        assert_eq!(q.value(), &Value::from(""));

        assert!(q.observe(&Location::new("/", "?q=hello")));
        assert_eq!(q.value(), &Value::from("hello"));

        // other keys changing does not transition this one
        assert!(!q.observe(&Location::new("/", "?q=hello&page=2")));
        assert!(!q.observe(&Location::new("/other", "?q=hello")));
    }

    #[test]
    fn test_observe_nan_is_stable() {
        let mut page = ParamBinding::new(ParamDescriptor::new("page", 1), &Location::new("/", "?page=x"));
        assert!(page.value().as_number().is_some_and(f64::is_nan));
        assert!(!page.observe(&Location::new("/", "?page=y")));
    }

    #[test]
    fn test_observe_deep_equal_object() {
        let location = Location::new("/", "?f=%7B%22a%22%3A1%7D");
        let mut filters =
            ParamBinding::new(ParamDescriptor::new("f", crate::model::ObjectMap::new()), &location);
        assert!(!filters.observe(&Location::new("/", "?f=%7B%22a%22%3A1.0%7D")));
    }

    #[test]
    fn test_update_set_and_unset() {
        let page = ParamBinding::new(ParamDescriptor::new("page", 1), &Location::default());
        let update = page.update(Some(&Value::from(2))).unwrap();
        assert_eq!(update.key(), "page");
        assert_eq!(update.action(), &UpdateAction::Set("2".to_string()));

        let update = page.update(None).unwrap();
        assert_eq!(update.action(), &UpdateAction::Delete);
    }

    #[test]
    fn test_update_default_removes_key() {
        let page = ParamBinding::new(ParamDescriptor::new("page", 1), &Location::default());
        let update = page.update(Some(&Value::from(1))).unwrap();
        assert_eq!(update, PendingUpdate::delete("page"));

        let tags = ParamBinding::new(ParamDescriptor::new("tags", Vec::<String>::new()), &Location::default());
        assert_eq!(tags.update(Some(&Value::Array(Vec::new()))).unwrap(), PendingUpdate::delete("tags"));
    }

    #[test]
    fn test_update_type_mismatch() {
        let active = ParamBinding::new(ParamDescriptor::new("active", false), &Location::default());
        let err = active.update(Some(&Value::from("true"))).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::TypeMismatch {
                expected: ParamType::Boolean,
                found: ParamType::String,
                ..
            }
        ));
    }

    #[test]
    fn test_update_does_not_change_exposed_value() {
        let page = ParamBinding::new(ParamDescriptor::new("page", 1), &Location::default());
        let _ = page.update(Some(&Value::from(5))).unwrap();
        assert_eq!(page.value(), &Value::Number(1.0));
    }
}
