//! Per-route view functions: pure `state -> text`, composed from the card
//! helpers in [`crate::output`]. Views never touch the store; the router
//! hands them freshly loaded state and prints whatever they return.

use std::fmt::Write as _;

use crate::actions::{QuickAction, SUGGESTIONS};
use crate::log::LogEntry;
use crate::nav;
use crate::output::{card, human_time, pill, BOLD, CYAN, DIM, GRAY, GREEN, RESET, YELLOW};
use crate::state::{AppState, ForwardView, PlanLane, Route};

/// Render the view for the state's current route.
pub fn render(state: &AppState, recent: &[LogEntry]) -> String {
    match state.route {
        Route::Home => home(state, recent),
        Route::Reset => reset(),
        Route::Calm => calm(),
        Route::Urge => urge(),
        Route::Forward => forward(state),
    }
}

/// Render a forward sub-view.
pub fn sub_view(view: ForwardView) -> String {
    match view {
        ForwardView::Plan => plan(),
        ForwardView::Clarify => clarify(),
    }
}

pub fn home(state: &AppState, recent: &[LogEntry]) -> String {
    let target = nav::resolve_continue(state);
    let stamp = match &state.last_stop_at {
        Some(at) => format!("Last: {}", human_time(at)),
        None => "Pick up momentum.".to_string(),
    };
    let continue_to = match target.sub {
        Some(sub) => format!("{} / {}", target.route.label(), sub.label()),
        None => target.route.label().to_string(),
    };

    let mut body = String::new();
    let _ = writeln!(body, "{}", pill(&stamp));
    let _ = writeln!(
        body,
        "{GREEN}{BOLD}Continue: {}{RESET}  {DIM}praxis continue{RESET}",
        continue_to
    );

    let mut out = card(
        "Continue",
        Some("Where you left off. One command back into motion."),
        &body,
    );
    out.push('\n');

    let mut menu = String::new();
    for route in [Route::Reset, Route::Calm, Route::Urge, Route::Forward] {
        let _ = writeln!(
            menu,
            "  {CYAN}{:<14}{RESET} {DIM}praxis go {}{RESET}",
            route.label(),
            route.token()
        );
    }
    out.push_str(&card("Home", Some("Or choose a step manually."), &menu));
    out.push('\n');

    out.push_str(&card(
        "Recent Log",
        Some("A simple trail proves momentum."),
        &log_items(recent),
    ));
    out
}

pub fn reset() -> String {
    card(
        "Reset",
        Some("Back to baseline. Reduce chaos."),
        &format!("{}\n", pill("Reset flow is locked as complete.")),
    )
}

pub fn calm() -> String {
    card(
        "Calm",
        Some("Downshift your nervous system."),
        &format!(
            "{}\n{DIM}Try a timed round: praxis do shift --timer{RESET}\n",
            pill("Calm flow is locked as complete.")
        ),
    )
}

pub fn urge() -> String {
    card(
        "Stop Urge",
        Some("Interrupt the spiral. Choose safety."),
        &format!("{}\n", pill("Ride the wave; it peaks and passes.")),
    )
}

pub fn forward(state: &AppState) -> String {
    let mut body = String::new();
    let _ = writeln!(
        body,
        "{}  {DIM}praxis mode <movement|productivity|balanced>{RESET}",
        pill(&format!(
            "Mode: {}",
            state.preferences.preferred_mode.token()
        ))
    );
    if let Some(lane) = state.preferences.last_plan_choice {
        let _ = writeln!(body, "{}", pill(&format!("Last plan: {}", lane.title())));
    }

    let mut out = card(
        "Move Forward",
        Some("Convert stability into motion. Choose one, complete it, log it."),
        &body,
    );
    out.push('\n');

    let mut starters = String::new();
    for action in QuickAction::ALL {
        let _ = writeln!(
            starters,
            "  {YELLOW}{:<26}{RESET} {DIM}praxis do {}{RESET}\n      {GRAY}{}{RESET}",
            action.title(),
            action.token(),
            action.hint()
        );
    }
    let _ = writeln!(starters);
    let _ = writeln!(
        starters,
        "  {YELLOW}{:<26}{RESET} {DIM}praxis plan{RESET}\n      {GRAY}Pick the lane. Don't over-plan.{RESET}",
        "Plan Today"
    );
    let _ = writeln!(
        starters,
        "  {YELLOW}{:<26}{RESET} {DIM}praxis clarify{RESET}\n      {GRAY}Suggestions if you don't know where to start.{RESET}",
        "Clarify the Next Move"
    );
    out.push_str(&card(
        "Start Here",
        Some("If you're foggy, do the smallest thing that changes your body."),
        &starters,
    ));
    out.push('\n');

    out.push_str(&card(
        "Log a Win",
        Some("One sentence is enough."),
        &format!("  {DIM}praxis win --note \"what you did\"{RESET}\n"),
    ));
    out
}

pub fn plan() -> String {
    let mut body = String::new();
    for lane in PlanLane::ALL {
        let _ = writeln!(
            body,
            "  {YELLOW}{:<16}{RESET} {DIM}praxis plan {}{RESET}\n      {GRAY}{}{RESET}",
            lane.title(),
            lane.token(),
            lane.hint()
        );
    }
    let _ = writeln!(body);
    let _ = writeln!(body, "  {DIM}Back to Move Forward: praxis back{RESET}");
    card(
        "Plan Today",
        Some("Pick one lane. It is your anchor, not a cage."),
        &body,
    )
}

pub fn clarify() -> String {
    let mut body = String::new();
    for (i, suggestion) in SUGGESTIONS.iter().enumerate() {
        let _ = writeln!(
            body,
            "  {YELLOW}{}. {:<24}{RESET} {DIM}praxis clarify {}{RESET}\n      {GRAY}{}{RESET}",
            i + 1,
            suggestion.title,
            i + 1,
            suggestion.hint
        );
    }
    let _ = writeln!(body);
    let _ = writeln!(body, "  {DIM}Back to Move Forward: praxis back{RESET}");
    card(
        "Clarify the Next Move",
        Some("Pick one suggestion and do it for 2 to 10 minutes. Then log it."),
        &body,
    )
}

pub fn status(state: &AppState) -> String {
    let target = nav::resolve_continue(state);
    let mut body = String::new();
    let _ = writeln!(body, "  Route:        {}", state.route.label());
    let _ = writeln!(
        body,
        "  Last visited: {}",
        state
            .last_visited
            .as_ref()
            .map(human_time)
            .unwrap_or_else(|| "never".to_string())
    );
    let _ = writeln!(
        body,
        "  Continue:     {}{}",
        target.route.label(),
        target
            .sub
            .map(|s| format!(" / {}", s.label()))
            .unwrap_or_default()
    );
    let _ = writeln!(
        body,
        "  Mode:         {}",
        state.preferences.preferred_mode.token()
    );
    let _ = writeln!(
        body,
        "  Last plan:    {}",
        state
            .preferences
            .last_plan_choice
            .map(|l| l.title().to_string())
            .unwrap_or_else(|| "none".to_string())
    );
    card("Status", None, &body)
}

pub fn log_list(entries: &[LogEntry]) -> String {
    card(
        "Log",
        Some("Newest first."),
        &log_items(entries),
    )
}

fn log_items(entries: &[LogEntry]) -> String {
    if entries.is_empty() {
        return format!("{}\n", pill("No log entries yet."));
    }
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "  {BOLD}{}{RESET}  {GRAY}{}{RESET}",
            entry.title,
            human_time(&entry.at)
        );
        let note = if entry.note.is_empty() {
            entry.kind.token()
        } else {
            entry.note.as_str()
        };
        let _ = writeln!(out, "      {DIM}{}{RESET}", note);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::LogKind;
    use crate::state::LastStop;

    #[test]
    fn render_is_deterministic_for_identical_state() {
        let state = AppState::default();
        let log = vec![LogEntry::now(LogKind::Win, "Win", "note")];
        assert_eq!(render(&state, &log), render(&state, &log));
    }

    #[test]
    fn home_shows_continue_target_with_sub_view() {
        let mut state = AppState::default();
        state.last_stop = LastStop::Forward {
            sub: Some(ForwardView::Plan),
        };
        let rendered = home(&state, &[]);
        assert!(rendered.contains("Move Forward / Plan Today"));
    }

    #[test]
    fn home_without_history_invites_momentum() {
        let rendered = home(&AppState::default(), &[]);
        assert!(rendered.contains("Pick up momentum."));
        assert!(rendered.contains("No log entries yet."));
    }

    #[test]
    fn forward_shows_current_mode() {
        let mut state = AppState::default();
        state.route = Route::Forward;
        let rendered = render(&state, &[]);
        assert!(rendered.contains("Mode: balanced"));
        assert!(rendered.contains("60-Second Body Shift"));
    }

    #[test]
    fn clarify_lists_every_suggestion() {
        let rendered = clarify();
        for suggestion in SUGGESTIONS {
            assert!(rendered.contains(suggestion.title));
        }
    }

    #[test]
    fn empty_note_falls_back_to_kind_token() {
        let entry = LogEntry::now(LogKind::ModeSet, "Set Move Forward Mode", "");
        let rendered = log_list(&[entry]);
        assert!(rendered.contains("mode-set"));
    }
}
