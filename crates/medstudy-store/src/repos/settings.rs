use medstudy_core::entities::Settings;

use crate::error::StoreError;
use crate::helpers::coerce_daily_goal;
use crate::kv::KeyValueStore;
use crate::service::StudyStore;

impl<S: KeyValueStore> StudyStore<S> {
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.state().settings
    }

    /// Set the daily study goal from raw text.
    ///
    /// Unparseable text and values below 1 store 1. Returns the stored goal.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the document could not be saved.
    pub fn update_daily_goal(&mut self, raw: &str) -> Result<u32, StoreError> {
        let goal = coerce_daily_goal(raw);

        let mut next = self.state().clone();
        next.settings.daily_goal = goal;
        self.commit(next)?;

        tracing::debug!(goal, raw, "daily goal updated");
        Ok(goal)
    }
}
