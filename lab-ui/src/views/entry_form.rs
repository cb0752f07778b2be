//! The reservation form.
//!
//! Single-line inputs push every keystroke into the session draft. Text areas
//! have no edit callback, so their contents are copied into the draft by
//! [`sync_text_areas`] before any action that rebuilds the screen.

use cursive::{
    Cursive, View,
    theme::{BaseColor, Color},
    utils::markup::StyledString,
    view::{Nameable, Resizable},
    views::{Button, DummyView, EditView, LinearLayout, ListView, Panel, SelectView, TextArea, TextView},
};
use lab_core::{DraftField, Lab, ViewMode};
use tracing::debug;

use crate::state::AppState;

const MATERIALS: &str = "materials";
const OBSERVATIONS: &str = "observations";
const INPUT_WIDTH: usize = 32;

pub(super) fn build(state: &AppState) -> impl View {
    let session = &state.session;
    let draft = session.draft();

    let selected = Lab::ALL
        .iter()
        .position(|lab| lab.as_str() == draft.lab.trim())
        .map_or(0, |i| i + 1);
    let mut labs = SelectView::<String>::new().popup();
    labs.add_item("Select a laboratory", String::new());
    for lab in Lab::ALL {
        labs.add_item(lab.as_str(), lab.as_str().to_string());
    }
    let labs = labs
        .selected(selected)
        .on_select(|s, lab: &String| set_field(s, DraftField::Lab, lab))
        .on_submit(|s, lab: &String| set_field(s, DraftField::Lab, lab));

    let form = ListView::new()
        .child(&label(DraftField::Lab), labs.fixed_width(INPUT_WIDTH))
        .child(&label(DraftField::Date), edit(draft.get(DraftField::Date), DraftField::Date))
        .child(
            &label(DraftField::Professor),
            edit(draft.get(DraftField::Professor), DraftField::Professor),
        )
        .child(
            &label(DraftField::Discipline),
            edit(draft.get(DraftField::Discipline), DraftField::Discipline),
        )
        .child(
            &label(DraftField::QtdStudents),
            edit(draft.get(DraftField::QtdStudents), DraftField::QtdStudents),
        )
        .child(
            &label(DraftField::Telephone),
            edit(draft.get(DraftField::Telephone), DraftField::Telephone),
        )
        .child(
            &label(DraftField::Materials),
            text_area(draft.get(DraftField::Materials), MATERIALS),
        )
        .child(
            &label(DraftField::Observations),
            text_area(draft.get(DraftField::Observations), OBSERVATIONS),
        );

    let mut layout = LinearLayout::vertical()
        .child(form)
        .child(DummyView.fixed_height(1))
        .child(Button::new("Reserve", submit));

    if let Some(reason) = session.error() {
        layout.add_child(DummyView.fixed_height(1));
        layout.add_child(TextView::new(StyledString::styled(
            reason.to_string(),
            Color::Dark(BaseColor::Red),
        )));
    }

    Panel::new(layout).title(ViewMode::Entry.title())
}

/// Copies the text areas into the session draft.
pub(super) fn sync_text_areas(siv: &mut Cursive) {
    for (name, field) in [
        (MATERIALS, DraftField::Materials),
        (OBSERVATIONS, DraftField::Observations),
    ] {
        if let Some(text) = siv.call_on_name(name, |v: &mut TextArea| v.get_content().to_string()) {
            set_field(siv, field, &text);
        }
    }
}

fn label(field: DraftField) -> String {
    if field.is_required() {
        format!("{}:", field.label())
    } else {
        format!("{} (optional):", field.label())
    }
}

fn edit(
    value: &str,
    field: DraftField,
) -> impl View {
    EditView::new()
        .content(value)
        .on_edit(move |s, text, _cursor| set_field(s, field, text))
        .fixed_width(INPUT_WIDTH)
}

fn text_area(
    value: &str,
    name: &str,
) -> impl View {
    TextArea::new()
        .content(value)
        .with_name(name)
        .fixed_size((INPUT_WIDTH, 3))
}

fn set_field(
    siv: &mut Cursive,
    field: DraftField,
    value: &str,
) {
    siv.with_user_data(|state: &mut AppState| state.session.set_field(field, value));
}

fn submit(siv: &mut Cursive) {
    sync_text_areas(siv);
    siv.with_user_data(|state: &mut AppState| {
        if state.session.submit().is_ok() {
            debug!(total = state.session.reservations().len(), "form reset after submit");
        }
    });
    super::rebuild(siv);
}
