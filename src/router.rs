//! Route transitions and action dispatch.
//!
//! Every handler follows the same cycle: load fresh state, produce the next
//! state, persist the whole record, then re-render from another fresh load.
//! Nothing is cached between steps; the store is the single source of truth.

use chrono::Utc;

use crate::actions::{Action, QuickAction, SUGGESTIONS};
use crate::error::{PraxisError, Result};
use crate::log::{LogKind, Logbook};
use crate::nav;
use crate::state::{ForwardView, Mode, PlanLane, Route};
use crate::store::Store;
use crate::views;

pub struct Router<'a> {
    store: &'a Store,
    log_preview: usize,
}

impl<'a> Router<'a> {
    pub fn new(store: &'a Store, log_preview: usize) -> Self {
        Self { store, log_preview }
    }

    fn logbook(&self) -> Logbook<'a> {
        Logbook::new(self.store)
    }

    /// First-run initialization plus a render of the persisted route.
    pub fn boot(&self) -> Result<()> {
        self.store.init_if_absent()?;
        self.render()
    }

    /// Full re-read-and-render cycle.
    pub fn render(&self) -> Result<()> {
        let state = self.store.load_state();
        let recent = self.logbook().recent(self.log_preview);
        print!("{}", views::render(&state, &recent));
        Ok(())
    }

    pub fn dispatch(&self, action: Action) -> Result<()> {
        match action {
            Action::Go(route) => self.set_route(route),
            Action::Open(target) => match target.sub {
                Some(view) => self.open_sub(view),
                None => self.set_route(target.route),
            },
            Action::Continue => self.resume(),
            Action::SetMode(mode) => self.set_mode(mode),
            Action::OpenPlan => self.open_sub(ForwardView::Plan),
            Action::ChoosePlan { lane, note } => self.choose_plan(lane, &note),
            Action::OpenClarify => self.open_sub(ForwardView::Clarify),
            Action::ChooseSuggestion { index, note } => self.choose_suggestion(index, &note),
            Action::Quick { action, note } => self.quick(action, &note),
            Action::Win { note } => self.win(&note),
            Action::Back => self.back(),
            Action::Clear => self.clear(),
        }
    }

    /// Set the current route, stamp the visit, and track non-home routes for
    /// Continue. Entering a top route always clears any sub-view marker.
    fn set_route(&self, route: Route) -> Result<()> {
        let mut next = self.store.load_state();
        next.route = route;
        next.last_visited = Some(Utc::now());
        if route != Route::Home {
            next = nav::remember_last_stop(&next, route, None);
        }
        self.store.save_state(&next)?;
        self.render()
    }

    /// Enter a forward sub-view. The route itself does not change; only the
    /// sub-view marker does, so Continue can resume into the exact screen.
    fn open_sub(&self, view: ForwardView) -> Result<()> {
        let state = self.store.load_state();
        let next = nav::remember_last_stop(&state, Route::Forward, Some(view));
        self.store.save_state(&next)?;
        print!("{}", views::sub_view(view));
        Ok(())
    }

    /// Resume at the last meaningful stop, two levels deep.
    fn resume(&self) -> Result<()> {
        let target = nav::resolve_continue(&self.store.load_state());
        match target.sub {
            Some(view) => self.open_sub(view),
            None => self.set_route(target.route),
        }
    }

    /// Setting a mode counts as meaningful engagement with Move Forward.
    fn set_mode(&self, mode: Mode) -> Result<()> {
        let mut next = self.store.load_state();
        next.preferences.preferred_mode = mode;
        next.last_visited = Some(Utc::now());
        let next = nav::remember_last_stop(&next, Route::Forward, None);
        self.store.save_state(&next)?;
        self.logbook().append(
            LogKind::ModeSet,
            "Set Move Forward Mode",
            &format!("Mode: {}", mode.token()),
        )?;
        self.render()
    }

    fn choose_plan(&self, lane: PlanLane, note: &str) -> Result<()> {
        self.logbook().append(
            LogKind::PlanChoice,
            "Plan Today",
            &join_note(&format!("Chose: {}", lane.token()), note),
        )?;

        let mut next = self.store.load_state();
        next.preferences.last_plan_choice = Some(lane);
        // After choosing, Continue should bring you back to forward-main.
        let next = nav::remember_last_stop(&next, Route::Forward, None);
        self.store.save_state(&next)?;
        self.set_route(Route::Home)
    }

    fn choose_suggestion(&self, index: usize, note: &str) -> Result<()> {
        let suggestion = SUGGESTIONS
            .get(index)
            .ok_or(PraxisError::UnknownSuggestion(index + 1))?;
        self.logbook().append(
            LogKind::Clarify,
            "Clarified Next Move",
            &join_note(&format!("{} • {}", suggestion.title, suggestion.hint), note),
        )?;

        let next = nav::remember_last_stop(&self.store.load_state(), Route::Forward, None);
        self.store.save_state(&next)?;
        self.set_route(Route::Home)
    }

    fn quick(&self, action: QuickAction, note: &str) -> Result<()> {
        self.logbook().append(
            LogKind::Action,
            action.title(),
            &join_note(action.base_note(), note),
        )?;

        let next = nav::remember_last_stop(&self.store.load_state(), Route::Forward, None);
        self.store.save_state(&next)?;
        self.set_route(Route::Home)
    }

    fn win(&self, note: &str) -> Result<()> {
        let note = note.trim();
        let note = if note.is_empty() { "Logged a win." } else { note };
        self.logbook()
            .append(LogKind::Win, "Move Forward Win", note)?;

        let next = nav::remember_last_stop(&self.store.load_state(), Route::Forward, None);
        self.store.save_state(&next)?;
        self.set_route(Route::Home)
    }

    /// Leave a sub-view back to forward-main, clearing the marker.
    fn back(&self) -> Result<()> {
        let next = nav::remember_last_stop(&self.store.load_state(), Route::Forward, None);
        self.store.save_state(&next)?;
        self.set_route(Route::Forward)
    }

    /// Reset both records, then record the reset itself as the first entry
    /// of the fresh log.
    fn clear(&self) -> Result<()> {
        self.store.clear()?;
        self.logbook()
            .append(LogKind::System, "Cleared Data", "Local data was cleared.")?;
        self.render()
    }
}

fn join_note(base: &str, note: &str) -> String {
    let note = note.trim();
    if note.is_empty() {
        base.to_string()
    } else {
        format!("{base} • {note}")
    }
}
