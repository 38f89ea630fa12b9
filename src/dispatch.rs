//! Move Dispatch
//!
//! Runs each move request as its own local task and reports the outcome.
//! In serialized mode requests sharing a target wait for each other.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use leptos::task::spawn_local;

use crate::commands;
use crate::config::{MoveOrdering, OrganizerConfig};
use crate::error::MoveError;
use crate::models::{MoveKind, MoveRequest};
use crate::notify;

/// Lane key: the target category of a move (None = root)
type Lane = Option<String>;

/// Single-flight queues, one per target
#[derive(Debug, Default)]
pub struct MoveQueue {
    /// A present key means a request for that lane is in flight
    lanes: HashMap<Lane, VecDeque<MoveRequest>>,
}

impl MoveQueue {
    /// Returns the request if it may be sent right away, otherwise parks it.
    pub fn enqueue(&mut self, request: MoveRequest) -> Option<MoveRequest> {
        let lane = request.target().map(str::to_string);
        match self.lanes.get_mut(&lane) {
            Some(pending) => {
                pending.push_back(request);
                None
            }
            None => {
                self.lanes.insert(lane, VecDeque::new());
                Some(request)
            }
        }
    }

    /// Mark the in-flight request of `lane` finished and hand out the next one.
    pub fn complete(&mut self, lane: &Lane) -> Option<MoveRequest> {
        let next = self.lanes.get_mut(lane)?.pop_front();
        if next.is_none() {
            self.lanes.remove(lane);
        }
        next
    }
}

/// Text of the blocking notification for an outcome, if one is due.
///
/// Only a rejected request notifies the user.
pub fn failure_notice<'a, T>(
    config: &'a OrganizerConfig,
    kind: MoveKind,
    result: &Result<T, MoveError>,
) -> Option<&'a str> {
    match result {
        Err(MoveError::Rejected { .. }) => Some(config.failure_message(kind)),
        _ => None,
    }
}

#[derive(Clone)]
pub struct MoveDispatcher {
    config: Rc<OrganizerConfig>,
    queue: Rc<RefCell<MoveQueue>>,
}

impl MoveDispatcher {
    pub fn new(config: Rc<OrganizerConfig>) -> Self {
        Self {
            config,
            queue: Rc::new(RefCell::new(MoveQueue::default())),
        }
    }

    /// Fire-and-forget; the outcome is reported when the request completes.
    pub fn submit(&self, request: MoveRequest) {
        match self.config.move_ordering {
            MoveOrdering::Concurrent => {
                let this = self.clone();
                spawn_local(async move {
                    this.send(&request).await;
                });
            }
            MoveOrdering::Serialized => {
                let ready = self.queue.borrow_mut().enqueue(request);
                match ready {
                    Some(first) => self.drain_lane(first),
                    None => log::debug!("[MOVE] Request queued behind in-flight move"),
                }
            }
        }
    }

    fn drain_lane(&self, first: MoveRequest) {
        let this = self.clone();
        spawn_local(async move {
            let lane: Lane = first.target().map(str::to_string);
            let mut next = Some(first);
            while let Some(request) = next {
                this.send(&request).await;
                next = this.queue.borrow_mut().complete(&lane);
            }
        });
    }

    async fn send(&self, request: &MoveRequest) {
        let kind = request.kind();
        let result = commands::submit_move(&self.config, request).await;

        match &result {
            Ok(message) => log::info!(
                "[MOVE] {:?} move to {:?} saved{}",
                kind,
                request.target(),
                message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default()
            ),
            Err(MoveError::Rejected { status, message }) => {
                log::warn!("[MOVE] {:?} move rejected with {} ({:?})", kind, status, message)
            }
            Err(e) => log::error!("[MOVE] {:?} move failed: {}", kind, e),
        }

        if let Some(text) = failure_notice(&self.config, kind, &result) {
            notify::alert(text);
        }
    }
}
