//! Terminal views for the reservation application.
//!
//! - `entry_form` - the reservation form (input collector)
//! - `listing` - active reservations, date filter and report export
//! - `status_bar` - keyboard hints
//!
//! The whole screen is rebuilt from [`AppState`] after every state change, so
//! views never hold data the session does not.

mod entry_form;
mod listing;
mod status_bar;

use cursive::{
    Cursive,
    event::{Event, Key},
    view::Resizable,
    views::{Button, Dialog, DummyView, LinearLayout},
};
use lab_core::{Layout, ViewMode};
use tracing::{debug, warn};

use crate::state::AppState;
use status_bar::{build_status_bar, hints};

pub use listing::format_table;

/// Installs global shortcuts and shows the first screen.
pub fn show_root(siv: &mut Cursive) {
    siv.add_global_callback(Event::CtrlChar('q'), |s| s.quit());
    siv.add_global_callback(Event::Key(Key::F1), |s| switch_view(s, ViewMode::Entry));
    siv.add_global_callback(Event::Key(Key::F2), |s| switch_view(s, ViewMode::Listing));
    rebuild(siv);
}

/// Replaces the whole screen stack with one root built from the latest state.
///
/// Open popups go too, so no stale view keeps callbacks into the session.
fn rebuild(siv: &mut Cursive) {
    let Some(root) = siv.with_user_data(|state: &mut AppState| build_root(state)) else {
        warn!("no application state; nothing to draw");
        return;
    };
    while siv.pop_layer().is_some() {}
    siv.add_layer(root);
}

fn switch_view(
    siv: &mut Cursive,
    view: ViewMode,
) {
    entry_form::sync_text_areas(siv);
    siv.with_user_data(|state: &mut AppState| state.session.select_view(view));
    debug!(?view, "view selected");
    rebuild(siv);
}

fn build_root(state: &AppState) -> Dialog {
    let session = &state.session;
    let mut body = LinearLayout::vertical();

    if session.config().layout == Layout::Tabs {
        body.add_child(build_tab_bar(session.view()));
        body.add_child(DummyView.fixed_height(1));
    }

    let mut panes = LinearLayout::horizontal();
    for view in session.visible_views() {
        match view {
            ViewMode::Entry => panes.add_child(entry_form::build(state)),
            ViewMode::Listing => panes.add_child(listing::build(state)),
        }
    }
    body.add_child(panes);
    body.add_child(DummyView.fixed_height(1));

    let shortcuts = match session.config().layout {
        Layout::Tabs => vec![hints::TAB, hints::SHIFT_TAB, hints::ENTER, hints::F1, hints::F2, hints::CTRL_Q],
        Layout::Panels => vec![hints::TAB, hints::SHIFT_TAB, hints::ENTER, hints::CTRL_Q],
    };
    body.add_child(build_status_bar(&shortcuts));

    Dialog::around(body)
        .title("Laboratory Reservations")
        .padding_lrtb(2, 2, 1, 1)
}

fn build_tab_bar(active: ViewMode) -> LinearLayout {
    let mut bar = LinearLayout::horizontal();
    for mode in ViewMode::ALL {
        let label = if mode == active {
            format!("[ {} ]", mode.title())
        } else {
            format!("  {}  ", mode.title())
        };
        bar.add_child(Button::new_raw(label, move |s| switch_view(s, mode)));
        bar.add_child(DummyView.fixed_width(2));
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app, config::AppConfig};
    use chrono::NaiveDate;
    use cursive::views::TextView;
    use lab_core::FixedClock;
    use pretty_assertions::assert_eq;

    fn screen(layout: Layout) -> Cursive {
        let config = AppConfig {
            layout,
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let mut siv = Cursive::new();
        siv.set_user_data(app::build_state(&config, FixedClock(today)));
        show_root(&mut siv);
        siv
    }

    fn selected_view(siv: &mut Cursive) -> Option<ViewMode> {
        siv.with_user_data(|state: &mut AppState| state.session.view())
    }

    #[test]
    fn startup_shows_a_single_root() {
        let mut siv = screen(Layout::Tabs);
        assert_eq!(siv.screen().len(), 1);
        assert_eq!(selected_view(&mut siv), Some(ViewMode::Entry));
    }

    #[test]
    fn switching_views_with_a_popup_open_leaves_one_root() {
        let mut siv = screen(Layout::Tabs);
        // Stands in for the open lab selector.
        siv.add_layer(TextView::new("popup"));
        assert_eq!(siv.screen().len(), 2);

        switch_view(&mut siv, ViewMode::Listing);

        assert_eq!(siv.screen().len(), 1);
        assert_eq!(selected_view(&mut siv), Some(ViewMode::Listing));

        switch_view(&mut siv, ViewMode::Entry);
        switch_view(&mut siv, ViewMode::Listing);
        assert_eq!(siv.screen().len(), 1);
    }

    #[test]
    fn text_areas_survive_a_view_switch_in_panels() {
        let mut siv = screen(Layout::Panels);
        siv.call_on_name("materials", |v: &mut cursive::views::TextArea| {
            v.set_content("microscopes")
        });

        switch_view(&mut siv, ViewMode::Listing);

        let materials = siv.with_user_data(|state: &mut AppState| state.session.draft().materials.clone());
        assert_eq!(materials.as_deref(), Some("microscopes"));
        assert_eq!(siv.screen().len(), 1);
    }
}
