// SPDX-License-Identifier: MPL-2.0
//! Maps external pause/resume/destroy signals to engine calls.
//!
//! The engine is released exactly once. Any call after that is refused
//! with [`SessionError::EngineUnavailable`] and never reaches the engine.

use crate::application::port::MediaEngine;
use crate::domain::error::SessionError;

/// Where the engine handle is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Playing,
    Paused,
    Released,
}

/// External lifecycle signal from the UI shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleSignal {
    Pause,
    Resume,
    Destroy,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Lifecycle {
    state: LifecycleState,
}

impl Lifecycle {
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.state == LifecycleState::Released
    }

    /// Fails if the engine is already released.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EngineUnavailable`] after release.
    pub fn ensure_active(&self) -> Result<(), SessionError> {
        if self.is_released() {
            Err(SessionError::EngineUnavailable)
        } else {
            Ok(())
        }
    }

    /// Dispatches `signal` to [`pause`](Self::pause),
    /// [`resume`](Self::resume) or [`destroy`](Self::destroy).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EngineUnavailable`] after release.
    pub fn apply<E: MediaEngine + ?Sized>(
        &mut self,
        signal: LifecycleSignal,
        engine: &mut E,
    ) -> Result<(), SessionError> {
        match signal {
            LifecycleSignal::Pause => self.pause(engine),
            LifecycleSignal::Resume => self.resume(engine),
            LifecycleSignal::Destroy => self.destroy(engine),
        }
    }

    /// Clears play intent; resources stay allocated.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EngineUnavailable`] after release.
    pub fn pause<E: MediaEngine + ?Sized>(&mut self, engine: &mut E) -> Result<(), SessionError> {
        self.ensure_active()?;
        engine.pause();
        self.state = LifecycleState::Paused;
        Ok(())
    }

    /// Sets play intent.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EngineUnavailable`] after release.
    pub fn resume<E: MediaEngine + ?Sized>(&mut self, engine: &mut E) -> Result<(), SessionError> {
        self.ensure_active()?;
        engine.play();
        self.state = LifecycleState::Playing;
        Ok(())
    }

    /// Releases the engine.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EngineUnavailable`] if it was already
    /// released; the engine is not called again.
    pub fn destroy<E: MediaEngine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<(), SessionError> {
        self.ensure_active()?;
        engine.release();
        self.state = LifecycleState::Released;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{EngineCommand, FakeEngine};

    #[test]
    fn pause_and_resume_toggle_play_intent() {
        let mut engine = FakeEngine::default();
        let mut lifecycle = Lifecycle::default();

        lifecycle.pause(&mut engine).expect("active");
        assert_eq!(lifecycle.state(), LifecycleState::Paused);
        assert!(!engine.is_playing());

        lifecycle.resume(&mut engine).expect("active");
        assert_eq!(lifecycle.state(), LifecycleState::Playing);
        assert!(engine.is_playing());
        assert_eq!(engine.release_count(), 0);
    }

    #[test]
    fn destroy_releases_exactly_once() {
        let mut engine = FakeEngine::default();
        let mut lifecycle = Lifecycle::default();

        assert_eq!(lifecycle.destroy(&mut engine), Ok(()));
        assert_eq!(
            lifecycle.destroy(&mut engine),
            Err(SessionError::EngineUnavailable)
        );
        assert_eq!(engine.release_count(), 1);
    }

    #[test]
    fn apply_dispatches_signals() {
        let mut engine = FakeEngine::default();
        let mut lifecycle = Lifecycle::default();
        lifecycle
            .apply(LifecycleSignal::Pause, &mut engine)
            .expect("active");
        lifecycle
            .apply(LifecycleSignal::Destroy, &mut engine)
            .expect("active");
        assert_eq!(
            engine.commands(),
            vec![EngineCommand::Pause, EngineCommand::Release]
        );
    }

    #[test]
    fn calls_after_destroy_never_reach_engine() {
        let mut engine = FakeEngine::default();
        let mut lifecycle = Lifecycle::default();
        lifecycle.destroy(&mut engine).expect("first destroy");

        assert_eq!(
            lifecycle.pause(&mut engine),
            Err(SessionError::EngineUnavailable)
        );
        assert_eq!(
            lifecycle.resume(&mut engine),
            Err(SessionError::EngineUnavailable)
        );
        assert_eq!(engine.commands(), vec![EngineCommand::Release]);
    }
}
