use crate::admin::AdminCommand;

/// Delay between health polls while the gate is open.
pub const HEALTH_POLL_INTERVAL_MS: u32 = 10_000;

/// Poller lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollerState {
    /// No timer scheduled.
    #[default]
    Idle,
    /// Timer scheduled; each tick loads the overview.
    Running,
}

/// Side effect the host must perform after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerCommand {
    /// Load once now, then every [`HEALTH_POLL_INTERVAL_MS`].
    Start,
    /// Cancel the scheduled timer. In-flight loads are left alone.
    Stop,
}

impl PollerCommand {
    /// Admin commands to run right away. Opening the gate loads the overview
    /// and the stats once; the interval takes over the overview after that.
    pub fn immediate_commands(self) -> &'static [AdminCommand] {
        match self {
            PollerCommand::Start => &[AdminCommand::LoadOverview, AdminCommand::RefreshStats],
            PollerCommand::Stop => &[],
        }
    }
}

/// Two-state machine that follows `can_use_admin`.
#[derive(Debug, Clone, Default)]
pub struct HealthPoller {
    state: PollerState,
}

impl HealthPoller {
    /// Current state.
    pub fn state(&self) -> PollerState {
        self.state
    }

    /// Whether a timer should exist.
    pub fn is_running(&self) -> bool {
        self.state == PollerState::Running
    }

    /// Aligns the machine with the gate, returning what the host must do.
    pub fn sync(&mut self, can_use_admin: bool) -> Option<PollerCommand> {
        match (self.state, can_use_admin) {
            (PollerState::Idle, true) => {
                log::debug!("health poller: idle -> running");
                self.state = PollerState::Running;
                Some(PollerCommand::Start)
            },
            (PollerState::Running, false) => {
                log::debug!("health poller: running -> idle");
                self.state = PollerState::Idle;
                Some(PollerCommand::Stop)
            },
            _ => None,
        }
    }

    /// Whether a timer tick should load the overview.
    pub fn on_tick(&self) -> bool {
        self.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_once_and_stops_once() {
        let mut poller = HealthPoller::default();
        assert_eq!(poller.sync(false), None);
        assert_eq!(poller.sync(true), Some(PollerCommand::Start));
        assert_eq!(poller.sync(true), None);
        assert!(poller.on_tick());
        assert_eq!(poller.sync(false), Some(PollerCommand::Stop));
        assert_eq!(poller.sync(false), None);
        assert!(!poller.on_tick());
    }

    #[test]
    fn start_loads_overview_and_stats_once() {
        assert_eq!(
            PollerCommand::Start.immediate_commands(),
            &[AdminCommand::LoadOverview, AdminCommand::RefreshStats]
        );
        assert!(PollerCommand::Stop.immediate_commands().is_empty());
    }

    #[test]
    fn simulated_lifecycle_over_twenty_five_seconds() {
        // Gate opens at t=0 and closes at t=25s; ticks are every interval.
        let mut poller = HealthPoller::default();
        let mut loads = Vec::new();
        if poller.sync(true) == Some(PollerCommand::Start) {
            loads.push(0);
        }
        let mut now = 0;
        while now + HEALTH_POLL_INTERVAL_MS <= 25_000 {
            now += HEALTH_POLL_INTERVAL_MS;
            if poller.on_tick() {
                loads.push(now);
            }
        }
        assert_eq!(poller.sync(false), Some(PollerCommand::Stop));
        for late in [30_000, 40_000] {
            if poller.on_tick() {
                loads.push(late);
            }
        }
        assert_eq!(loads, vec![0, 10_000, 20_000]);
    }
}
