use crate::core::runtime;
use crate::domain::model::{ReactionCount, ReactionKind, ReactionRequest};
use crate::domain::ports::{ActivationEvent, CountDisplay, ReactionControl, ReactionTransport};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Which of several overlapping responses is allowed to reach the display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOrdering {
    /// Every response is rendered as it arrives; the last one to arrive wins.
    #[default]
    ArrivalOrder,
    /// A response is dropped once a later request of the same kind has been rendered.
    LatestRequest,
}

/// The page elements the controller drives, handed over at init.
pub struct ReactionBindings {
    pub like_control: Rc<dyn ReactionControl>,
    pub dislike_control: Rc<dyn ReactionControl>,
    pub like_display: Rc<dyn CountDisplay>,
    pub dislike_display: Rc<dyn CountDisplay>,
}

struct Binding {
    control: Rc<dyn ReactionControl>,
    display: Rc<dyn CountDisplay>,
    issued: Cell<u64>,
    rendered: Cell<u64>,
}

impl Binding {
    fn new(control: Rc<dyn ReactionControl>, display: Rc<dyn CountDisplay>) -> Rc<Self> {
        Rc::new(Self {
            control,
            display,
            issued: Cell::new(0),
            rendered: Cell::new(0),
        })
    }

    fn issue(&self) -> u64 {
        let sequence = self.issued.get() + 1;
        self.issued.set(sequence);
        sequence
    }

    fn render(&self, sequence: u64, ordering: ResponseOrdering, count: &ReactionCount) -> bool {
        if ordering == ResponseOrdering::LatestRequest && sequence < self.rendered.get() {
            return false;
        }
        self.rendered.set(sequence.max(self.rendered.get()));
        self.display.set_text(&count.text);
        true
    }
}

/// Turns like/dislike activations into requests and writes the returned
/// counts back into the page.
///
/// Single-threaded: every in-flight request is a local task, and the
/// controller itself is shared through `Rc`.
pub struct ReactionController<T: ReactionTransport> {
    transport: Rc<T>,
    like: Rc<Binding>,
    dislike: Rc<Binding>,
    ordering: ResponseOrdering,
}

impl<T: ReactionTransport + 'static> ReactionController<T> {
    pub fn init(transport: T, bindings: ReactionBindings) -> Self {
        tracing::debug!("Reaction controller initialized");
        Self {
            transport: Rc::new(transport),
            like: Binding::new(bindings.like_control, bindings.like_display),
            dislike: Binding::new(bindings.dislike_control, bindings.dislike_display),
            ordering: ResponseOrdering::default(),
        }
    }

    pub fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn on_like_activated(&self, event: &dyn ActivationEvent) {
        self.dispatch(ReactionKind::Like, event);
    }

    pub fn on_dislike_activated(&self, event: &dyn ActivationEvent) {
        self.dispatch(ReactionKind::Dislike, event);
    }

    fn dispatch(&self, kind: ReactionKind, event: &dyn ActivationEvent) {
        let task = self.activate(kind, event);
        runtime::spawn_local(async move {
            task.await;
        });
    }

    /// Handle one activation and return the in-flight request.
    ///
    /// The default action is suppressed and the slug is read before this
    /// returns; the network call starts when the future is first polled.
    /// Resolves to the count that was rendered, or `None` when the display
    /// was left as it was.
    pub fn activate(
        &self,
        kind: ReactionKind,
        event: &dyn ActivationEvent,
    ) -> impl Future<Output = Option<ReactionCount>> + 'static {
        event.prevent_default();

        let binding = Rc::clone(self.binding(kind));
        let request = ReactionRequest::new(binding.control.slug(), kind);
        let sequence = binding.issue();
        let transport = Rc::clone(&self.transport);
        let ordering = self.ordering;

        async move {
            match fetch(&*transport, &request).await {
                Ok(count) => {
                    if binding.render(sequence, ordering, &count) {
                        tracing::debug!("{} #{} rendered {}", request.path(), sequence, count.text);
                        Some(count)
                    } else {
                        tracing::debug!("{} #{} superseded, response dropped", request.path(), sequence);
                        None
                    }
                }
                Err(e) => {
                    // 頁面上不顯示任何錯誤，保留原本的數字
                    tracing::debug!("{} #{} left display unchanged: {}", request.path(), sequence, e);
                    None
                }
            }
        }
    }

    /// Request a count without touching any display.
    pub async fn fetch(&self, request: &ReactionRequest) -> Result<ReactionCount> {
        fetch(&*self.transport, request).await
    }

    pub fn display(&self, kind: ReactionKind) -> &dyn CountDisplay {
        &*self.binding(kind).display
    }

    fn binding(&self, kind: ReactionKind) -> &Rc<Binding> {
        match kind {
            ReactionKind::Like => &self.like,
            ReactionKind::Dislike => &self.dislike,
        }
    }
}

pub async fn fetch<T: ReactionTransport + ?Sized>(
    transport: &T,
    request: &ReactionRequest,
) -> Result<ReactionCount> {
    tracing::debug!("GET {}", request.path());
    let body = transport.get_json(&request.path_segments()).await?;
    ReactionCount::from_response(request.kind, &body)
}
