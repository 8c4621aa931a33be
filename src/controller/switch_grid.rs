use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::theme::Theme;
use crate::api::client::PanelClient;
use crate::error::AppError;
use crate::models::switch::{PanelSnapshot, SwitchAction, SwitchName, SwitchStates};

/// Logical state of a switch control. `Unknown` holds until the first
/// successful fetch and cannot be toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchPhase {
    On,
    Off,
    Unknown,
}

impl From<bool> for SwitchPhase {
    fn from(on: bool) -> Self {
        if on {
            SwitchPhase::On
        } else {
            SwitchPhase::Off
        }
    }
}

impl SwitchPhase {
    /// Next phase and the action to submit, or `None` from `Unknown`.
    pub fn toggled(self) -> Option<(SwitchPhase, SwitchAction)> {
        match self {
            SwitchPhase::On => Some((SwitchPhase::Off, SwitchAction::Off)),
            SwitchPhase::Off => Some((SwitchPhase::On, SwitchAction::On)),
            SwitchPhase::Unknown => None,
        }
    }

    pub fn is_on(self) -> Option<bool> {
        match self {
            SwitchPhase::On => Some(true),
            SwitchPhase::Off => Some(false),
            SwitchPhase::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SwitchPhase::On => "on",
            SwitchPhase::Off => "off",
            SwitchPhase::Unknown => "unknown",
        }
    }
}

impl From<SwitchAction> for SwitchPhase {
    fn from(action: SwitchAction) -> Self {
        match action {
            SwitchAction::On => SwitchPhase::On,
            SwitchAction::Off => SwitchPhase::Off,
        }
    }
}

/// What to do with an optimistic update when the submission fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollbackPolicy {
    Rollback,
    KeepOptimistic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchControl {
    pub name: SwitchName,
    pub phase: SwitchPhase,
}

pub struct SwitchGrid {
    controls: [SwitchControl; 5],
    theme: Theme,
    rollback: RollbackPolicy,
    snapshot: Option<PanelSnapshot>,
}

impl SwitchGrid {
    pub fn new(theme: Theme, rollback: RollbackPolicy) -> Self {
        Self::with_phases(theme, rollback, |_| SwitchPhase::Unknown)
    }

    /// Build a grid whose pre-fetch phases come from `initial`.
    pub fn with_phases(
        theme: Theme,
        rollback: RollbackPolicy,
        initial: impl Fn(SwitchName) -> SwitchPhase,
    ) -> Self {
        Self {
            controls: SwitchName::ALL.map(|name| SwitchControl {
                name,
                phase: initial(name),
            }),
            theme,
            rollback,
            snapshot: None,
        }
    }

    pub fn controls(&self) -> &[SwitchControl] {
        &self.controls
    }

    /// Last snapshot fetched from the panel, if any.
    pub fn snapshot(&self) -> Option<&PanelSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn phase(&self, name: SwitchName) -> SwitchPhase {
        self.control(name).phase
    }

    pub fn appearance(&self, name: SwitchName) -> Option<&str> {
        self.theme.color(self.phase(name))
    }

    fn control(&self, name: SwitchName) -> &SwitchControl {
        // controls are laid out in SwitchName::ALL order
        &self.controls[name as usize]
    }

    fn set_phase(&mut self, name: SwitchName, phase: SwitchPhase) {
        self.controls[name as usize].phase = phase;
    }

    /// Paint every switch from fetched states.
    pub fn paint(&mut self, states: &SwitchStates) {
        for (name, on) in states.iter() {
            self.set_phase(name, SwitchPhase::from(on));
        }
    }

    /// Fetch all switch states and paint them, propagating failures.
    pub async fn sync(&mut self, client: &PanelClient) -> Result<(), AppError> {
        let snapshot = client.get_buttons().await?;
        debug!(?snapshot, "fetched switch states");
        self.paint(&snapshot.switches);
        self.snapshot = Some(snapshot);
        Ok(())
    }

    /// Fetch and paint. Failures are logged and leave every switch as it was.
    pub async fn initialize(&mut self, client: &PanelClient) -> bool {
        match self.sync(client).await {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "Error fetching switch states");
                false
            }
        }
    }

    /// Flip one switch and submit the new state.
    pub async fn toggle(
        &mut self,
        client: &PanelClient,
        name: SwitchName,
    ) -> Result<SwitchAction, AppError> {
        let previous = self.phase(name);
        let (next, action) = previous
            .toggled()
            .ok_or(AppError::UnknownState(name))?;
        info!(switch = %name, "turn {}", action);
        self.submit(client, name, previous, next, action).await?;
        Ok(action)
    }

    /// Drive one switch to an explicit state regardless of its current phase.
    pub async fn set(
        &mut self,
        client: &PanelClient,
        name: SwitchName,
        action: SwitchAction,
    ) -> Result<(), AppError> {
        let previous = self.phase(name);
        self.submit(client, name, previous, SwitchPhase::from(action), action)
            .await
    }

    async fn submit(
        &mut self,
        client: &PanelClient,
        name: SwitchName,
        previous: SwitchPhase,
        next: SwitchPhase,
        action: SwitchAction,
    ) -> Result<(), AppError> {
        self.set_phase(name, next);
        if let Some(snapshot) = self.snapshot.as_mut() {
            snapshot.switches.set(name, action == SwitchAction::On);
        }

        if let Err(e) = client.set_button(name, action).await {
            match self.rollback {
                RollbackPolicy::Rollback => {
                    warn!(switch = %name, error = %e, "submission failed, rolling back");
                    self.set_phase(name, previous);
                    if let (Some(snapshot), Some(was_on)) =
                        (self.snapshot.as_mut(), previous.is_on())
                    {
                        snapshot.switches.set(name, was_on);
                    }
                }
                RollbackPolicy::KeepOptimistic => {
                    warn!(switch = %name, error = %e, "submission failed, keeping local state");
                }
            }
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_transitions() {
        assert_eq!(
            SwitchPhase::On.toggled(),
            Some((SwitchPhase::Off, SwitchAction::Off))
        );
        assert_eq!(
            SwitchPhase::Off.toggled(),
            Some((SwitchPhase::On, SwitchAction::On))
        );
        assert_eq!(SwitchPhase::Unknown.toggled(), None);
    }

    #[test]
    fn test_new_grid_is_unknown() {
        let grid = SwitchGrid::new(Theme::default(), RollbackPolicy::Rollback);
        for control in grid.controls() {
            assert_eq!(control.phase, SwitchPhase::Unknown);
            assert_eq!(grid.appearance(control.name), None);
        }
    }

    #[test]
    fn test_paint_from_states() {
        let mut grid = SwitchGrid::new(Theme::default(), RollbackPolicy::Rollback);
        grid.paint(&SwitchStates {
            living: true,
            hol: false,
            baie1: true,
            baie2: false,
            bucatarie: true,
        });
        assert_eq!(grid.phase(SwitchName::Living), SwitchPhase::On);
        assert_eq!(grid.phase(SwitchName::Baie1), SwitchPhase::On);
        assert_eq!(grid.phase(SwitchName::Bucatarie), SwitchPhase::On);
        assert_eq!(grid.phase(SwitchName::Hol), SwitchPhase::Off);
        assert_eq!(grid.phase(SwitchName::Baie2), SwitchPhase::Off);
        assert_eq!(grid.appearance(SwitchName::Living), Some("#f6f6de"));
        assert_eq!(grid.appearance(SwitchName::Hol), Some("#4d4d4d"));
    }

    #[test]
    fn test_controls_follow_name_order() {
        let grid = SwitchGrid::new(Theme::default(), RollbackPolicy::Rollback);
        for (control, name) in grid.controls().iter().zip(SwitchName::ALL) {
            assert_eq!(control.name, name);
        }
    }
}
