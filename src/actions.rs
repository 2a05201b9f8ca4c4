//! The explicit action set the router dispatches on.
//!
//! Every user gesture becomes one [`Action`]; the CLI maps argv into this
//! enum and the core never sees argv. Read-only queries (status, log
//! listing, export) are not actions: they mutate nothing and go straight to
//! the store/logbook.

use std::time::Duration;

use crate::nav::Target;
use crate::state::{Mode, PlanLane, Route};

/// A state-mutating or navigating user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Navigate to a top-level route.
    Go(Route),
    /// Navigate to a deep-link target (route plus optional sub-view).
    Open(Target),
    /// Resume at the last meaningful stop.
    Continue,
    /// Set the Move Forward mode.
    SetMode(Mode),
    /// Enter the Plan Today sub-view.
    OpenPlan,
    /// Choose a Plan Today lane and return home.
    ChoosePlan { lane: PlanLane, note: String },
    /// Enter the Clarify sub-view.
    OpenClarify,
    /// Pick a clarify suggestion (0-based) and return home.
    ChooseSuggestion { index: usize, note: String },
    /// Complete a quick action and return home.
    Quick { action: QuickAction, note: String },
    /// Log a free-form win and return home.
    Win { note: String },
    /// Leave a sub-view back to Move Forward.
    Back,
    /// Reset both persisted records and log the event.
    Clear,
}

/// The four Move Forward starters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    BodyShift,
    Walk,
    Tidy,
    FocusSprint,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::BodyShift,
        QuickAction::Walk,
        QuickAction::Tidy,
        QuickAction::FocusSprint,
    ];

    pub fn parse(token: &str) -> Option<QuickAction> {
        match token {
            "shift" => Some(QuickAction::BodyShift),
            "walk" => Some(QuickAction::Walk),
            "tidy" => Some(QuickAction::Tidy),
            "sprint" => Some(QuickAction::FocusSprint),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            QuickAction::BodyShift => "shift",
            QuickAction::Walk => "walk",
            QuickAction::Tidy => "tidy",
            QuickAction::FocusSprint => "sprint",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            QuickAction::BodyShift => "60-Second Body Shift",
            QuickAction::Walk => "3-Minute Walk-in-Place",
            QuickAction::Tidy => "5-Minute Reset Tidy",
            QuickAction::FocusSprint => "10-Minute Focus Sprint",
        }
    }

    /// One-line nudge shown in the Move Forward menu.
    pub fn hint(self) -> &'static str {
        match self {
            QuickAction::BodyShift => "Stand up. Shoulder rolls + slow exhale.",
            QuickAction::Walk => "Move now. Don't negotiate.",
            QuickAction::Tidy => "One surface. Stop at 5.",
            QuickAction::FocusSprint => "Choose one micro-task. Timer on.",
        }
    }

    /// Base log note when the action completes.
    pub fn base_note(self) -> &'static str {
        match self {
            QuickAction::BodyShift => "Stood up and shifted state.",
            QuickAction::Walk => "Moved body for 3 minutes.",
            QuickAction::Tidy => "Reset one surface for 5 minutes.",
            QuickAction::FocusSprint => "Focused on one micro-task for 10 minutes.",
        }
    }

    pub fn duration(self) -> Duration {
        match self {
            QuickAction::BodyShift => Duration::from_secs(60),
            QuickAction::Walk => Duration::from_secs(3 * 60),
            QuickAction::Tidy => Duration::from_secs(5 * 60),
            QuickAction::FocusSprint => Duration::from_secs(10 * 60),
        }
    }
}

/// A clarify suggestion: something small to do for 2 to 10 minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub title: &'static str,
    pub hint: &'static str,
}

pub const SUGGESTIONS: [Suggestion; 6] = [
    Suggestion {
        title: "Do the next 2 minutes",
        hint: "Set a timer. Start imperfect. Don't optimize.",
    },
    Suggestion {
        title: "Make it smaller",
        hint: "Cut the task to one visible action you can finish.",
    },
    Suggestion {
        title: "Move first, think second",
        hint: "10 body-weight squats or a short walk in place.",
    },
    Suggestion {
        title: "Clean one surface",
        hint: "Desk, counter, or floor patch. Stop at 5 minutes.",
    },
    Suggestion {
        title: "Send one message",
        hint: "One email or text that removes a stuck point.",
    },
    Suggestion {
        title: "Open the file",
        hint: "No work required. Just open it and name the next step.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_action_tokens_round_trip() {
        for action in QuickAction::ALL {
            assert_eq!(QuickAction::parse(action.token()), Some(action));
        }
        assert_eq!(QuickAction::parse("move60"), None);
    }

    #[test]
    fn quick_action_durations_match_titles() {
        assert_eq!(QuickAction::BodyShift.duration().as_secs(), 60);
        assert_eq!(QuickAction::Walk.duration().as_secs(), 180);
        assert_eq!(QuickAction::Tidy.duration().as_secs(), 300);
        assert_eq!(QuickAction::FocusSprint.duration().as_secs(), 600);
    }

    #[test]
    fn suggestion_table_is_dense() {
        for suggestion in SUGGESTIONS {
            assert!(!suggestion.title.is_empty());
            assert!(!suggestion.hint.is_empty());
        }
    }
}
