// SPDX-License-Identifier: MPL-2.0
//! Single-task event loop around a [`PlaybackSession`].
//!
//! The driver is the session's only execution context: shell events, probe
//! results and timer deadlines are all awaited in one `tokio::select!` and
//! handled one at a time. The blocking probe is the only work that leaves
//! this task, and its result comes back through a channel.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::application::port::{DevicePlatform, MediaEngine, MetadataProbe};

use super::playback::{Effect, PlaybackSession, SessionEvent};
use super::probe::{spawn_probe, ProbeResult};

/// Default capacity of the shell-to-session event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

pub struct SessionDriver<E, D> {
    session: PlaybackSession<E, D>,
    pending: Vec<Effect>,
    probe: Arc<dyn MetadataProbe>,
    probe_tx: mpsc::UnboundedSender<ProbeResult>,
    probe_rx: mpsc::UnboundedReceiver<ProbeResult>,
    effects: mpsc::UnboundedSender<Effect>,
}

impl<E: MediaEngine, D: DevicePlatform> SessionDriver<E, D> {
    /// Wraps a started session. `initial_effects` are the effects returned by
    /// [`PlaybackSession::start`]; they are dispatched when the loop starts.
    pub fn new(
        session: PlaybackSession<E, D>,
        initial_effects: Vec<Effect>,
        probe: Arc<dyn MetadataProbe>,
        effects: mpsc::UnboundedSender<Effect>,
    ) -> Self {
        let (probe_tx, probe_rx) = mpsc::unbounded_channel();
        Self {
            session,
            pending: initial_effects,
            probe,
            probe_tx,
            probe_rx,
            effects,
        }
    }

    /// Runs until the session is destroyed or `events` closes, and returns
    /// the released session.
    ///
    /// Closing the event channel destroys the session.
    pub async fn run(mut self, mut events: mpsc::Receiver<SessionEvent>) -> PlaybackSession<E, D> {
        let initial = std::mem::take(&mut self.pending);
        self.dispatch(initial);

        while !self.session.is_released() {
            self.fire_due_timers();
            let deadline = self.session.next_deadline().map(Instant::from_std);

            tokio::select! {
                biased;

                () = sleep_until(deadline) => {}
                event = events.recv() => {
                    let now = Instant::now().into_std();
                    let effects = match event {
                        Some(event) => self.session.handle(event, now),
                        None => {
                            tracing::debug!("event channel closed, destroying session");
                            self.session.handle(SessionEvent::Destroy, now)
                        }
                    };
                    self.dispatch(effects);
                }
                Some(result) = self.probe_rx.recv() => {
                    let now = Instant::now().into_std();
                    let effects = self.session.apply_probe(result, now);
                    self.dispatch(effects);
                }
            }
        }
        self.session
    }

    fn fire_due_timers(&mut self) {
        let effects = self.session.expire(Instant::now().into_std());
        self.dispatch(effects);
    }

    fn dispatch(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartProbe(request) => {
                    tracing::debug!(generation = request.generation, "probing metadata");
                    spawn_probe(Arc::clone(&self.probe), request, self.probe_tx.clone());
                }
                effect => {
                    if self.effects.send(effect).is_err() {
                        tracing::trace!("effect receiver dropped");
                    }
                }
            }
        }
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
