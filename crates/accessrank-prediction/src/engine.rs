//! The engine facade: owned state, time source, CRF decay and the observer slot.

use std::fmt;
use std::rc::{Rc, Weak};

use accessrank_core::config::PredictionConfig;
use accessrank_core::constants::SENTINEL_ITEM_ID;
use accessrank_core::errors::{AccessRankResult, ConfigError};
use accessrank_core::models::{EngineState, ItemVisit, ListStability};
use accessrank_core::traits::{IClock, SystemClock};
use accessrank_decay::CrfEngine;
use accessrank_observability::snapshot_span;
use serde_json::Value;
use tracing::{info, warn};

use crate::observer::IPredictionObserver;
use crate::scoring::{ScoreBreakdown, ScoringContext};

/// Predicts the next item from a history of item-to-item transitions.
///
/// Single-threaded and fully synchronous: every operation, including the
/// observer callback, completes before it returns.
pub struct AccessRank {
    pub(crate) state: EngineState,
    pub(crate) crf: CrfEngine,
    pub(crate) clock: Rc<dyn IClock>,
    pub(crate) observer: Option<Weak<dyn IPredictionObserver>>,
}

impl AccessRank {
    /// Create an engine with no history, using the local system clock.
    pub fn new(config: PredictionConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, Rc::new(SystemClock))
    }

    /// Create an engine with no history and a custom time source.
    pub fn with_clock(config: PredictionConfig, clock: Rc<dyn IClock>) -> Result<Self, ConfigError> {
        Self::from_state(EngineState::new(config), clock)
    }

    /// Wrap existing state, e.g. one produced by `accessrank_snapshot::decode`.
    /// Fails if the state's config has a zero `max_visits`.
    pub fn from_state(state: EngineState, clock: Rc<dyn IClock>) -> Result<Self, ConfigError> {
        state.config.validate()?;
        Ok(Self {
            state,
            crf: CrfEngine::new(),
            clock,
            observer: None,
        })
    }

    /// Rebuild an engine from a snapshot, keeping the persisted configuration.
    pub fn from_snapshot(snapshot: &Value) -> AccessRankResult<Self> {
        let _span = snapshot_span!("decode").entered();
        let state = accessrank_snapshot::decode(snapshot).inspect_err(|e| {
            warn!(error = %e, "rejected snapshot");
        })?;
        info!(
            items = state.items.len(),
            predictions = state.prediction_list.len(),
            visit_number = state.visit_number,
            "restored engine from snapshot"
        );
        Ok(Self::from_state(state, Rc::new(SystemClock))?)
    }

    /// Restore from an optional snapshot, applying `config` on top.
    ///
    /// `None` or JSON `null` means no snapshot was ever saved and yields a
    /// fresh engine. Any other value must decode completely.
    pub fn restore(config: PredictionConfig, snapshot: Option<&Value>) -> AccessRankResult<Self> {
        config.validate()?;
        match snapshot {
            None | Some(Value::Null) => {
                info!("no snapshot found, starting fresh");
                Ok(Self::new(config)?)
            }
            Some(snapshot) => {
                let mut engine = Self::from_snapshot(snapshot)?;
                engine.state.config = config;
                Ok(engine)
            }
        }
    }

    /// Encode the full engine state as a versioned snapshot.
    pub fn to_snapshot(&self) -> AccessRankResult<Value> {
        let _span = snapshot_span!("encode").entered();
        Ok(accessrank_snapshot::encode(&self.state)?)
    }

    // ── Read-only views ──────────────────────────────────────────────────

    /// Predicted next items, best first. Never contains the current item.
    pub fn predictions(&self) -> Vec<&str> {
        self.state
            .prediction_list
            .iter()
            .map(|scored| scored.id.as_str())
            .filter(|id| *id != self.state.most_recent_item_id)
            .collect()
    }

    /// The current item, or `None` if nothing is focused.
    pub fn most_recent_item(&self) -> Option<&str> {
        self.state.most_recent_item()
    }

    /// Reserved id representing "no current item".
    pub fn initial_item(&self) -> &'static str {
        SENTINEL_ITEM_ID
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn visit_number(&self) -> u64 {
        self.state.visit_number
    }

    /// Score factors for `item` as of now, or `None` for an unknown item.
    pub fn score_breakdown(&self, item: &str) -> Option<ScoreBreakdown> {
        self.state.items.contains_key(item).then(|| self.scoring_context().breakdown(item))
    }

    pub(crate) fn scoring_context(&self) -> ScoringContext<'_> {
        ScoringContext::new(&self.state, ItemVisit::at(&self.clock.now()))
    }

    // ── Configuration ────────────────────────────────────────────────────

    pub fn config(&self) -> &PredictionConfig {
        &self.state.config
    }

    pub fn list_stability(&self) -> ListStability {
        self.state.config.list_stability
    }

    pub fn set_list_stability(&mut self, list_stability: ListStability) {
        self.state.config.list_stability = list_stability;
    }

    pub fn use_time_weighting(&self) -> bool {
        self.state.config.use_time_weighting
    }

    pub fn set_use_time_weighting(&mut self, enabled: bool) {
        self.state.config.use_time_weighting = enabled;
    }

    pub fn max_visits(&self) -> usize {
        self.state.config.max_visits
    }

    /// Change the history bound. Existing history is trimmed lazily, at the
    /// next transition append or list admission.
    pub fn set_max_visits(&mut self, max_visits: usize) -> Result<(), ConfigError> {
        let config = PredictionConfig {
            max_visits,
            ..self.state.config
        };
        config.validate()?;
        self.state.config = config;
        Ok(())
    }

    // ── Observer ─────────────────────────────────────────────────────────

    /// Register the observer, replacing any previous one. Only a weak
    /// reference is kept.
    pub fn set_observer<O>(&mut self, observer: &Rc<O>)
    where
        O: IPredictionObserver + 'static,
    {
        let weak = Rc::downgrade(observer);
        let weak: Weak<dyn IPredictionObserver> = weak;
        self.observer = Some(weak);
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Whether a registered observer is still alive.
    pub fn has_observer(&self) -> bool {
        self.observer
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }
}

impl fmt::Debug for AccessRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessRank")
            .field("state", &self.state)
            .field("crf", &self.crf)
            .field("has_observer", &self.has_observer())
            .finish_non_exhaustive()
    }
}
