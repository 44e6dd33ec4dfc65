//! Checkpoint Display State

/// Visual state of a checkpoint on the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckpointState {
    Completed,
    Current,
    Pending,
}

impl CheckpointState {
    /// Completed wins over current
    pub fn from_flags(is_completed: bool, is_current: bool) -> Self {
        match (is_completed, is_current) {
            (true, _) => CheckpointState::Completed,
            (false, true) => CheckpointState::Current,
            (false, false) => CheckpointState::Pending,
        }
    }

    /// Bootstrap color suffix (`bg-*`)
    pub fn color(self) -> &'static str {
        match self {
            CheckpointState::Completed => "success",
            CheckpointState::Current => "warning",
            CheckpointState::Pending => "secondary",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CheckpointState::Completed => "check",
            CheckpointState::Current => "location-arrow",
            CheckpointState::Pending => "clock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_truth_table() {
        assert_eq!(CheckpointState::from_flags(true, true), CheckpointState::Completed);
        assert_eq!(CheckpointState::from_flags(true, false), CheckpointState::Completed);
        assert_eq!(CheckpointState::from_flags(false, true), CheckpointState::Current);
        assert_eq!(CheckpointState::from_flags(false, false), CheckpointState::Pending);
    }

    #[test]
    fn test_color_and_icon() {
        assert_eq!(CheckpointState::Current.color(), "warning");
        assert_eq!(CheckpointState::Current.icon(), "location-arrow");
        assert_eq!(CheckpointState::Pending.color(), "secondary");
        assert_eq!(CheckpointState::Completed.icon(), "check");
    }
}
