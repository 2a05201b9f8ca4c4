//! Navigation tracking: the "continue where you left off" affordance.
//!
//! [`remember_last_stop`] is the only writer of the last-stop tracker, and
//! [`resolve_continue`] is its only reader. Resume is two-level: a route plus
//! an optional sub-view, so Continue lands on the exact prior screen.

use chrono::Utc;

use crate::state::{AppState, ForwardView, LastStop, Route};

/// A resolved navigation target: a route, and for the forward route possibly
/// a sub-view to open directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub route: Route,
    pub sub: Option<ForwardView>,
}

impl Target {
    pub fn route(route: Route) -> Self {
        Self { route, sub: None }
    }
}

/// Record `route` as the last meaningful stop. Pure: returns the next state.
///
/// Home is not meaningful and returns the state unchanged. For every other
/// route the tracker and its stamp are replaced; `sub` is written through
/// explicitly (including `None`) so re-entering a parent route clears any
/// stale sub-view, and [`LastStop::for_route`] drops a sub-view paired with
/// a non-forward route.
pub fn remember_last_stop(state: &AppState, route: Route, sub: Option<ForwardView>) -> AppState {
    let Some(stop) = LastStop::for_route(route, sub) else {
        return state.clone();
    };
    let mut next = state.clone();
    next.last_stop = stop;
    next.last_stop_at = Some(Utc::now());
    next
}

/// Resolve the Continue target from state. The tracker type already
/// guarantees a valid non-home route; a forward stop with a recorded
/// sub-view resumes directly into that sub-view.
pub fn resolve_continue(state: &AppState) -> Target {
    Target {
        route: state.last_stop.route(),
        sub: state.last_stop.sub(),
    }
}

/// Parse a deep-link fragment (`route[/sub]`, hash prefix tolerated) into a
/// target. Absent or unknown routes resolve to home; a sub token is only
/// honored under the forward route.
pub fn parse_fragment(fragment: &str) -> Target {
    let trimmed = fragment.trim().trim_start_matches('#').trim_matches('/');
    let mut parts = trimmed.splitn(2, '/');
    let route = parts
        .next()
        .and_then(Route::parse)
        .unwrap_or(Route::Home);
    let sub = match route {
        Route::Forward => parts.next().and_then(ForwardView::parse),
        _ => None,
    };
    Target { route, sub }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_identity() {
        let state = AppState::default();
        let next = remember_last_stop(&state, Route::Home, None);
        assert_eq!(next, state);

        let next = remember_last_stop(&state, Route::Home, Some(ForwardView::Plan));
        assert_eq!(next, state);
    }

    #[test]
    fn non_home_routes_are_recorded_with_stamp() {
        let state = AppState::default();
        for route in [Route::Reset, Route::Calm, Route::Urge, Route::Forward] {
            let next = remember_last_stop(&state, route, None);
            assert_eq!(next.last_stop.route(), route);
            assert_eq!(next.last_stop.sub(), None);
            assert_eq!(next.last_stop.label(), route.label());
            assert!(next.last_stop_at.is_some());
        }
    }

    #[test]
    fn entering_parent_route_clears_stale_sub_view() {
        let state = AppState::default();
        let with_sub = remember_last_stop(&state, Route::Forward, Some(ForwardView::Plan));
        assert_eq!(with_sub.last_stop.sub(), Some(ForwardView::Plan));

        let cleared = remember_last_stop(&with_sub, Route::Forward, None);
        assert_eq!(cleared.last_stop.sub(), None);
    }

    #[test]
    fn leaving_forward_cannot_carry_the_sub_view() {
        let state = AppState::default();
        let with_sub = remember_last_stop(&state, Route::Forward, Some(ForwardView::Clarify));
        let moved = remember_last_stop(&with_sub, Route::Calm, Some(ForwardView::Clarify));
        assert_eq!(moved.last_stop, crate::state::LastStop::Calm);
        assert_eq!(moved.last_stop.sub(), None);
    }

    #[test]
    fn continue_resolves_to_recorded_stop() {
        let state = AppState::default();
        let next = remember_last_stop(&state, Route::Calm, None);
        assert_eq!(resolve_continue(&next), Target::route(Route::Calm));
    }

    #[test]
    fn continue_resumes_into_sub_view() {
        let state = AppState::default();
        let next = remember_last_stop(&state, Route::Forward, Some(ForwardView::Plan));
        let target = resolve_continue(&next);
        assert_eq!(target.route, Route::Forward);
        assert_eq!(target.sub, Some(ForwardView::Plan));
    }

    #[test]
    fn continue_on_fresh_state_goes_forward() {
        let target = resolve_continue(&AppState::default());
        assert_eq!(target, Target::route(Route::Forward));
    }

    #[test]
    fn fragments_parse_with_and_without_hash() {
        assert_eq!(parse_fragment("calm"), Target::route(Route::Calm));
        assert_eq!(parse_fragment("#/calm"), Target::route(Route::Calm));
        assert_eq!(parse_fragment("/urge/"), Target::route(Route::Urge));
        assert_eq!(
            parse_fragment("forward/plan"),
            Target {
                route: Route::Forward,
                sub: Some(ForwardView::Plan),
            }
        );
    }

    #[test]
    fn invalid_fragments_resolve_to_home() {
        assert_eq!(parse_fragment(""), Target::route(Route::Home));
        assert_eq!(parse_fragment("#/wat"), Target::route(Route::Home));
        // A sub token outside forward is ignored.
        assert_eq!(parse_fragment("calm/plan"), Target::route(Route::Calm));
        // An unknown sub token under forward falls back to forward-main.
        assert_eq!(parse_fragment("forward/oops"), Target::route(Route::Forward));
    }
}
