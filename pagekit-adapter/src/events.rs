use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use pagekit::{
    ContentDelegate, FocusAnimationCoordinator, FocusView, MenuCell, MenuDelegate,
};

/// Menu delegate callbacks, recorded as values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MenuEvent {
    DidSelect {
        index: usize,
        previous_index: Option<usize>,
    },
    WillDisplay {
        index: usize,
    },
    WillAnimateFocusView {
        index: usize,
        coordinator: FocusAnimationCoordinator,
    },
    FocusViewDidEndTransition {
        selected_index: Option<usize>,
    },
}

/// Content delegate callbacks, recorded as values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentEvent {
    WillBeginManualScroll { index: usize },
    DidManualScroll { index: usize, percent: f64 },
    DidEndManualScroll { index: usize },
    WillBeginPaging { index: usize, animated: bool },
    WillFinishPaging { index: usize, animated: bool },
    DidFinishPaging { index: usize, animated: bool },
}

/// A shared FIFO of delegate events.
///
/// One clone is installed as the component's delegate, another one is drained by whoever
/// reacts to the events. Draining outside the callback keeps the reaction free to mutate the
/// component that emitted the event.
#[derive(Debug)]
pub struct EventQueue<E> {
    inner: Rc<RefCell<VecDeque<E>>>,
}

impl<E> Clone for EventQueue<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }
}

impl<E> EventQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: E) {
        self.inner.borrow_mut().push_back(event);
    }

    pub fn pop(&self) -> Option<E> {
        self.inner.borrow_mut().pop_front()
    }

    pub fn drain(&self) -> Vec<E> {
        self.inner.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl<C> MenuDelegate<C> for EventQueue<MenuEvent> {
    fn did_select(&mut self, index: usize, previous_index: Option<usize>) {
        self.push(MenuEvent::DidSelect {
            index,
            previous_index,
        });
    }

    fn will_display(&mut self, _cell: &MenuCell<C>, index: usize) {
        self.push(MenuEvent::WillDisplay { index });
    }

    fn will_animate_focus_view(&mut self, index: usize, coordinator: &FocusAnimationCoordinator) {
        self.push(MenuEvent::WillAnimateFocusView {
            index,
            coordinator: *coordinator,
        });
    }

    fn focus_view_did_end_transition(&mut self, focus: &FocusView) {
        self.push(MenuEvent::FocusViewDidEndTransition {
            selected_index: focus.selected_index,
        });
    }
}

impl ContentDelegate for EventQueue<ContentEvent> {
    fn will_begin_manual_scroll(&mut self, index: usize) {
        self.push(ContentEvent::WillBeginManualScroll { index });
    }

    fn did_manual_scroll(&mut self, index: usize, percent: f64) {
        self.push(ContentEvent::DidManualScroll { index, percent });
    }

    fn did_end_manual_scroll(&mut self, index: usize) {
        self.push(ContentEvent::DidEndManualScroll { index });
    }

    fn will_begin_paging(&mut self, index: usize, animated: bool) {
        self.push(ContentEvent::WillBeginPaging { index, animated });
    }

    fn will_finish_paging(&mut self, index: usize, animated: bool) {
        self.push(ContentEvent::WillFinishPaging { index, animated });
    }

    fn did_finish_paging(&mut self, index: usize, animated: bool) {
        self.push(ContentEvent::DidFinishPaging { index, animated });
    }
}
