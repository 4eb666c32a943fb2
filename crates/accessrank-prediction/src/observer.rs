use crate::engine::AccessRank;

/// Notified synchronously after every prediction list update.
///
/// The engine holds only a weak reference: dropping the observer's last
/// `Rc` silently unregisters it.
pub trait IPredictionObserver {
    fn did_update_predictions(&self, engine: &AccessRank);
}

impl<F> IPredictionObserver for F
where
    F: Fn(&AccessRank),
{
    fn did_update_predictions(&self, engine: &AccessRank) {
        self(engine)
    }
}
