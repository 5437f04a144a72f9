//! Request handlers and dispatch between them.
//!
//! A loader keeps an ordered list of handlers and hands each request to the
//! first one whose [`RequestHandler::can_handle`] accepts it.

use tracing::{debug, trace};

use crate::config::LoaderConfig;
use crate::decode::{load, DecodedImage};
use crate::error::LoadError;
use crate::locator;
use crate::platform::Context;
use crate::request::Request;

/// A source of pixel buffers for some family of requests.
pub trait RequestHandler: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Whether this handler accepts `request`. Must not perform I/O.
    fn can_handle(&self, request: &Request) -> bool;

    /// Produce the pixel buffer for an accepted request.
    ///
    /// `Ok(None)` means the resource exists but produced no image.
    fn load(&self, request: &Request) -> Result<Option<DecodedImage>, LoadError>;
}

/// Handler for packaged resources, addressed by id or by resource locator.
pub struct ResourceRequestHandler<C> {
    context: C,
    config: LoaderConfig,
}

impl<C: Context> ResourceRequestHandler<C> {
    pub fn new(context: C) -> Self {
        Self::with_config(context, LoaderConfig::default())
    }

    pub fn with_config(context: C, config: LoaderConfig) -> Self {
        Self { context, config }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }
}

impl<C: Context> RequestHandler for ResourceRequestHandler<C> {
    fn name(&self) -> &str {
        "resource"
    }

    fn can_handle(&self, request: &Request) -> bool {
        locator::can_handle(request)
    }

    fn load(&self, request: &Request) -> Result<Option<DecodedImage>, LoadError> {
        load(&self.context, request, &self.config)
    }
}

/// Ordered handler list; earlier handlers win.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: Vec<Box<dyn RequestHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler with the lowest priority so far.
    pub fn push(&mut self, handler: impl RequestHandler + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Insert a handler at `index`, clamped to the end of the list.
    pub fn insert(&mut self, index: usize, handler: impl RequestHandler + 'static) {
        let index = index.min(self.handlers.len());
        self.handlers.insert(index, Box::new(handler));
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// The first handler that accepts `request`.
    pub fn handler_for(&self, request: &Request) -> Option<&dyn RequestHandler> {
        self.handlers
            .iter()
            .map(Box::as_ref)
            .find(|handler| handler.can_handle(request))
    }

    /// Dispatch `request` to the first handler that accepts it.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::NoHandler` if no handler accepts the request, or
    /// the chosen handler's error.
    pub fn load(&self, request: &Request) -> Result<Option<DecodedImage>, LoadError> {
        let Some(handler) = self.handler_for(request) else {
            debug!(%request, "no handler accepts request");
            return Err(LoadError::NoHandler(request.to_string()));
        };
        trace!(handler = handler.name(), %request, "dispatching request");
        handler.load(request)
    }
}
