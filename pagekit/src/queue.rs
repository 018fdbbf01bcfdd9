use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::sync::Arc;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::{MenuCell, PagingError};

#[cfg(feature = "std")]
type IdentifierMap<V> = HashMap<String, V>;
#[cfg(not(feature = "std"))]
type IdentifierMap<V> = BTreeMap<String, V>;

/// Builds the payload of a brand-new cell for a registered identifier.
pub type CellFactory<C> = Arc<dyn Fn() -> C + Send + Sync>;

/// Cell registrations plus the per-identifier recycle queues.
///
/// A cell removed from the menu is pushed here and handed back (FIFO) by the next
/// [`CellQueue::dequeue`] for the same identifier. A cell is owned either by the menu's visible
/// list, by exactly one queue here, or transiently by whoever dequeued it.
pub struct CellQueue<C> {
    factories: IdentifierMap<CellFactory<C>>,
    queues: IdentifierMap<VecDeque<MenuCell<C>>>,
    created: usize,
}

impl<C> Default for CellQueue<C> {
    fn default() -> Self {
        Self {
            factories: IdentifierMap::new(),
            queues: IdentifierMap::new(),
            created: 0,
        }
    }
}

impl<C> CellQueue<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constructor for `identifier`. The last registration wins.
    pub fn register(
        &mut self,
        identifier: impl Into<String>,
        factory: impl Fn() -> C + Send + Sync + 'static,
    ) {
        let identifier = identifier.into();
        pdebug!(identifier = identifier.as_str(), "CellQueue::register");
        self.factories.insert(identifier, Arc::new(factory));
    }

    /// Registers a template that is cloned for every new cell. The last registration wins.
    pub fn register_template(&mut self, identifier: impl Into<String>, template: C)
    where
        C: Clone + Send + Sync + 'static,
    {
        self.register(identifier, move || template.clone());
    }

    pub fn is_registered(&self, identifier: &str) -> bool {
        self.factories.contains_key(identifier)
    }

    /// Pops a recycled cell for `identifier`, or builds a new one from its registration.
    pub fn try_dequeue(&mut self, identifier: &str) -> Result<MenuCell<C>, PagingError> {
        if let Some(cell) = self.queues.get_mut(identifier).and_then(|q| q.pop_front()) {
            ptrace!(identifier, index = cell.index, "dequeue: recycled");
            return Ok(cell);
        }
        let Some(factory) = self.factories.get(identifier) else {
            return Err(PagingError::UnregisteredIdentifier(identifier.into()));
        };
        let content = factory();
        self.created += 1;
        ptrace!(identifier, created = self.created, "dequeue: new cell");
        Ok(MenuCell::new(identifier.into(), content))
    }

    /// Same as [`Self::try_dequeue`], but an unregistered identifier with an empty queue is a
    /// programmer error and panics.
    pub fn dequeue(&mut self, identifier: &str) -> MenuCell<C> {
        match self.try_dequeue(identifier) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }

    pub(crate) fn recycle(&mut self, cell: MenuCell<C>) {
        self.queues
            .entry(String::from(cell.identifier()))
            .or_default()
            .push_back(cell);
    }

    /// Number of cells waiting in all recycle queues.
    pub fn queued_len(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    pub fn queued_len_for(&self, identifier: &str) -> usize {
        self.queues.get(identifier).map_or(0, VecDeque::len)
    }

    /// Number of cells ever built from a registration (recycled cells are not counted twice).
    pub fn created_count(&self) -> usize {
        self.created
    }
}

impl<C> core::fmt::Debug for CellQueue<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CellQueue")
            .field("registered", &self.factories.len())
            .field("queued", &self.queued_len())
            .field("created", &self.created)
            .finish()
    }
}
