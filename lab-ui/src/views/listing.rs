//! Active reservations: date filter, table and report export.

use cursive::{
    Cursive, View,
    view::{Resizable, Scrollable},
    views::{Button, DummyView, EditView, LinearLayout, Panel, TextView},
};
use lab_core::{DATE_FORMAT, ReservationRow, ViewMode, presenter::COLUMN_HEADERS};

use crate::{logging::log_failure, state::AppState};

pub(super) fn build(state: &AppState) -> impl View {
    let session = &state.session;
    let filter_text = session
        .filter()
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default();

    let controls = LinearLayout::horizontal()
        .child(TextView::new("Filter by date: "))
        .child(
            EditView::new()
                .content(filter_text)
                .on_submit(apply_filter)
                .fixed_width(12),
        )
        .child(DummyView.fixed_width(1))
        .child(Button::new("Clear", |s| apply_filter(s, "")))
        .child(DummyView.fixed_width(2))
        .child(Button::new("Generate report", generate_report));

    let mut layout = LinearLayout::vertical()
        .child(controls)
        .child(DummyView.fixed_height(1))
        .child(TextView::new(format_table(&session.rows())).scrollable());

    if let Some(notice) = &state.notice {
        layout.add_child(DummyView.fixed_height(1));
        layout.add_child(TextView::new(notice.clone()));
    }

    Panel::new(layout).title(ViewMode::Listing.title())
}

/// Renders rows as a fixed-width text table with a header and a rule line.
pub fn format_table(rows: &[ReservationRow]) -> String {
    let mut widths = COLUMN_HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 7]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect::<Vec<_>>()
            .join(" │ ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![
        line(COLUMN_HEADERS),
        widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─"),
    ];
    if rows.is_empty() {
        lines.push("(no reservations)".to_string());
    }
    lines.extend(rows.iter().map(|row| line(row.cells())));
    lines.join("\n")
}

fn apply_filter(
    siv: &mut Cursive,
    input: &str,
) {
    super::entry_form::sync_text_areas(siv);
    siv.with_user_data(|state: &mut AppState| {
        state.notice = state
            .session
            .apply_filter_input(input)
            .err()
            .map(|reason| reason.to_string());
    });
    super::rebuild(siv);
}

fn generate_report(siv: &mut Cursive) {
    super::entry_form::sync_text_areas(siv);
    let result = siv.with_user_data(|state: &mut AppState| {
        let result = state.export_report();
        state.notice = Some(match &result {
            Ok(path) => format!("Report saved to {}", path.display()),
            Err(e) => format!("Report not saved: {e}"),
        });
        result
    });

    if let Some(result) = result {
        log_failure("generate report", result.map(drop).map_err(anyhow::Error::from));
    }
    super::rebuild(siv);
}
