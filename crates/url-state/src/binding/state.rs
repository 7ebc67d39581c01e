//! Location owner and navigation entry point.
//!
//! [`UrlState`] holds the last-known [`Location`] and the caller's
//! navigator. Every write starts from a fresh parse of that location and
//! ends in exactly one call to [`Navigate::navigate`] with
//! `pathname + search`.
//!
//! `UrlState` never updates its location on its own after navigating: the
//! caller reports the resulting location through [`UrlState::refresh`].
//! Two direct writes in a row without a refresh therefore start from the
//! same query string, and the second navigation drops the first change.
//! Use [`UrlState::batch_update`] to change several parameters at once.

use crate::binding::batch::{BatchOptions, batch_url};
use crate::binding::{ParamBinding, TypedBinding};
use crate::error::EncodeError;
use crate::model::{Location, ParamDescriptor, ParamValue, PendingUpdate, Value};

/// Receives navigation targets.
pub trait Navigate {
    /// Navigates to `url` (`pathname + search`).
    fn navigate(&mut self, url: &str);
}

impl<F: FnMut(&str)> Navigate for F {
    fn navigate(&mut self, url: &str) {
        self(url)
    }
}

/// Single owner of the last-known location and the navigator.
#[derive(Debug)]
pub struct UrlState<N> {
    location: Location,
    navigator: N,
}

impl<N: Navigate> UrlState<N> {
    pub fn new(location: Location, navigator: N) -> Self {
        Self {
            location,
            navigator,
        }
    }

    /// Returns the last-known location.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Replaces the last-known location with a new snapshot.
    pub fn refresh(&mut self, location: Location) {
        self.location = location;
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }

    /// Binds a parameter, reading its initial value from the current
    /// location.
    pub fn bind(&self, descriptor: ParamDescriptor) -> ParamBinding {
        ParamBinding::new(descriptor, &self.location)
    }

    /// Binds a statically typed parameter.
    pub fn bind_typed<T: ParamValue>(&self, name: impl Into<String>, default: T) -> TypedBinding<T> {
        TypedBinding::new(name, default, &self.location)
    }

    /// Brings `binding` up to date with the current location; returns true
    /// if its value changed.
    pub fn sync(&self, binding: &mut ParamBinding) -> bool {
        binding.observe(&self.location)
    }

    /// Writes one parameter and navigates. `None` removes the key.
    ///
    /// Returns the URL passed to the navigator.
    pub fn set(&mut self, binding: &ParamBinding, value: Option<&Value>) -> Result<String, EncodeError> {
        let update = binding.update(value)?;
        Ok(self.commit([update], &BatchOptions::default()))
    }

    /// Writes one statically typed parameter and navigates.
    pub fn set_typed<T: ParamValue>(&mut self, binding: &TypedBinding<T>, value: Option<T>) -> String {
        let update = binding.update(value);
        self.commit([update], &BatchOptions::default())
    }

    /// Applies several updates and navigates once.
    ///
    /// Returns the URL passed to the navigator.
    pub fn batch_update<I>(&mut self, updates: I, options: &BatchOptions) -> String
    where
        I: IntoIterator<Item = PendingUpdate>,
    {
        self.commit(updates, options)
    }

    fn commit<I>(&mut self, updates: I, options: &BatchOptions) -> String
    where
        I: IntoIterator<Item = PendingUpdate>,
    {
        let url = batch_url(&self.location, updates, options);
        tracing::debug!(url = %url, "navigate");
        self.navigator.navigate(&url);
        url
    }
}
