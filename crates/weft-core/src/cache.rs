//! Parsed template cache

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;
use tracing::trace;

use crate::error::WeftResult;
use crate::template::PromptTemplate;

/// LRU cache of parsed templates, keyed by raw template text
///
/// Parsing is pure, so the same text always parses to the same template
/// and caching is safe across concurrent renders. Parse failures are not
/// cached; a template that fails to parse is re-parsed (and fails again)
/// on the next call.
pub struct TemplateCache {
    templates: Mutex<LruCache<String, Arc<PromptTemplate>>>,
}

impl TemplateCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self {
            templates: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Return the cached parse of `text`, parsing and inserting on miss
    pub fn get_or_parse(&self, text: &str) -> WeftResult<Arc<PromptTemplate>> {
        if let Some(template) = self.templates.lock().get(text) {
            trace!(len = text.len(), "template cache hit");
            return Ok(Arc::clone(template));
        }
        let template = Arc::new(PromptTemplate::parse(text)?);
        self.templates
            .lock()
            .put(text.to_string(), Arc::clone(&template));
        trace!(len = text.len(), "template cache insert");
        Ok(template)
    }

    pub fn len(&self) -> usize {
        self.templates.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.lock().is_empty()
    }

    pub fn clear(&self) {
        self.templates.lock().clear();
    }
}

impl std::fmt::Debug for TemplateCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cache = self.templates.lock();
        f.debug_struct("TemplateCache")
            .field("len", &cache.len())
            .field("capacity", &cache.cap().get())
            .finish()
    }
}
