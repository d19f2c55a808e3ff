//! Resolver capability for opaque string keys.

use std::collections::HashMap;

/// Maps an opaque string key to a handler owned by the collaborator.
///
/// Implemented by the view renderer's template store and the application's
/// controller registry; the route table never interprets the keys itself.
pub trait HandlerResolver {
    type Handler;

    fn lookup(&self, key: &str) -> Option<&Self::Handler>;
}

/// HashMap-backed resolver.
#[derive(Debug, Default)]
pub struct MapResolver<H> {
    handlers: HashMap<String, H>,
}

impl<H> MapResolver<H> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, handler: H) {
        self.handlers.insert(key.into(), handler);
    }
}

impl<H> HandlerResolver for MapResolver<H> {
    type Handler = H;

    fn lookup(&self, key: &str) -> Option<&H> {
        self.handlers.get(key)
    }
}

impl<H, K: Into<String>> FromIterator<(K, H)> for MapResolver<H> {
    fn from_iter<T: IntoIterator<Item = (K, H)>>(iter: T) -> Self {
        Self {
            handlers: iter.into_iter().map(|(k, h)| (k.into(), h)).collect(),
        }
    }
}
