//! Core state model: routes, sub-views, the last-stop tracker, and the
//! persisted application state.
//!
//! The persisted record is tolerant of partial or stale data: every field
//! carries a serde default, and token-typed fields deserialize leniently so
//! an unknown token falls back to its default instead of poisoning the rest
//! of the record.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level routes, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Home,
    Reset,
    Calm,
    Urge,
    Forward,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Reset,
        Route::Calm,
        Route::Urge,
        Route::Forward,
    ];

    /// Parse a route token. Unknown tokens are the caller's problem; the
    /// routing layer coerces them to [`Route::Home`].
    pub fn parse(token: &str) -> Option<Route> {
        match token {
            "home" => Some(Route::Home),
            "reset" => Some(Route::Reset),
            "calm" => Some(Route::Calm),
            "urge" => Some(Route::Urge),
            "forward" => Some(Route::Forward),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Reset => "reset",
            Route::Calm => "calm",
            Route::Urge => "urge",
            Route::Forward => "forward",
        }
    }

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Reset => "Reset",
            Route::Calm => "Calm",
            Route::Urge => "Stop Urge",
            Route::Forward => "Move Forward",
        }
    }
}

/// Sub-views of the Move Forward route. These are not routes: they are only
/// reachable through their entry points and only tracked through
/// [`LastStop::Forward`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForwardView {
    Plan,
    Clarify,
}

impl ForwardView {
    pub fn parse(token: &str) -> Option<ForwardView> {
        match token {
            "plan" => Some(ForwardView::Plan),
            "clarify" => Some(ForwardView::Clarify),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            ForwardView::Plan => "plan",
            ForwardView::Clarify => "clarify",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ForwardView::Plan => "Plan Today",
            ForwardView::Clarify => "Clarify the Next Move",
        }
    }
}

/// The last meaningful (non-home) stop, used by the Continue affordance.
///
/// Modeled as a tagged union rather than a (route, sub-route) string pair:
/// home cannot be encoded at all, and a sub-view can only exist under the
/// Forward variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "lowercase")]
pub enum LastStop {
    Reset,
    Calm,
    Urge,
    Forward {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sub: Option<ForwardView>,
    },
}

impl Default for LastStop {
    /// Forward bias: with no history, Continue goes to Move Forward.
    fn default() -> Self {
        LastStop::Forward { sub: None }
    }
}

impl LastStop {
    /// Build a stop for `route`. Returns `None` for home. A sub-view is only
    /// kept for the forward route; anything else drops it, so no call site
    /// can leave a stale sub-view behind a non-forward stop.
    pub fn for_route(route: Route, sub: Option<ForwardView>) -> Option<LastStop> {
        match route {
            Route::Home => None,
            Route::Reset => Some(LastStop::Reset),
            Route::Calm => Some(LastStop::Calm),
            Route::Urge => Some(LastStop::Urge),
            Route::Forward => Some(LastStop::Forward { sub }),
        }
    }

    pub fn route(self) -> Route {
        match self {
            LastStop::Reset => Route::Reset,
            LastStop::Calm => Route::Calm,
            LastStop::Urge => Route::Urge,
            LastStop::Forward { .. } => Route::Forward,
        }
    }

    pub fn sub(self) -> Option<ForwardView> {
        match self {
            LastStop::Forward { sub } => sub,
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        self.route().label()
    }
}

/// Preferred pacing for the Move Forward step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Movement,
    Productivity,
    #[default]
    Balanced,
}

impl Mode {
    pub fn parse(token: &str) -> Option<Mode> {
        match token {
            "movement" => Some(Mode::Movement),
            "productivity" => Some(Mode::Productivity),
            "balanced" => Some(Mode::Balanced),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Mode::Movement => "movement",
            Mode::Productivity => "productivity",
            Mode::Balanced => "balanced",
        }
    }
}

/// The three Plan Today lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanLane {
    Body,
    Task,
    People,
}

impl PlanLane {
    pub const ALL: [PlanLane; 3] = [PlanLane::Body, PlanLane::Task, PlanLane::People];

    pub fn parse(token: &str) -> Option<PlanLane> {
        match token {
            "body" => Some(PlanLane::Body),
            "task" => Some(PlanLane::Task),
            "people" => Some(PlanLane::People),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            PlanLane::Body => "body",
            PlanLane::Task => "task",
            PlanLane::People => "people",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PlanLane::Body => "Body First",
            PlanLane::Task => "One Task",
            PlanLane::People => "People & Admin",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            PlanLane::Body => "Movement + hydration + food.",
            PlanLane::Task => "A single concrete deliverable.",
            PlanLane::People => "Calls, messages, appointments, bills.",
        }
    }
}

/// Move Forward user preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Preferences {
    #[serde(default, deserialize_with = "lenient")]
    pub preferred_mode: Mode,
    #[serde(default, deserialize_with = "lenient")]
    pub last_plan_choice: Option<PlanLane>,
}

/// The single persisted application record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppState {
    /// Currently displayed route. Unknown stored tokens coerce to home.
    #[serde(default, deserialize_with = "lenient")]
    pub route: Route,
    /// Last time any route was set.
    #[serde(default, deserialize_with = "lenient")]
    pub last_visited: Option<DateTime<Utc>>,
    /// Last meaningful non-home stop, for Continue.
    #[serde(default, deserialize_with = "lenient")]
    pub last_stop: LastStop,
    /// Stamp when `last_stop` was last updated.
    #[serde(default, deserialize_with = "lenient")]
    pub last_stop_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient")]
    pub preferences: Preferences,
}

/// Deserialize a field, substituting the default on any mismatch. Invariant:
/// one stale token in a stored record never discards the rest of the record.
fn lenient<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(de)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
