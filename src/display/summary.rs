use std::fmt::Write;

use crate::model::{
    AxisKind, CardDef, Category, ChartDef, Dashboard, Line, ScalarType, Table, Widget, WidgetKind,
    WidgetPayload,
};

const RULE: &str = "--------------------------------------------------";

/// Formats a dashboard as an indented tree, one widget per branch.
///
/// Works on documents in any state; enumeration numbers outside the known
/// set are shown as `#n`.
pub fn format_summary(dashboard: &Dashboard) -> String {
    let mut summary = Summary { output: String::new() };

    let _ = writeln!(
        summary.output,
        "DASHBOARD '{}' ({}): {} widget(s)",
        dashboard.title,
        dashboard.id,
        dashboard.len()
    );
    let _ = writeln!(summary.output, "{RULE}");

    let widgets = dashboard.widgets();
    for (i, widget) in widgets.iter().enumerate() {
        summary.widget(widget, i + 1 == widgets.len());
    }
    summary.output
}

struct Summary {
    output: String,
}

impl Summary {
    fn widget(&mut self, widget: &Widget, is_last: bool) {
        let (connector, stem) = branch(is_last);
        let _ = writeln!(self.output, "{connector} {}", header(widget));

        let details = match &widget.payload {
            None => Vec::new(),
            Some(WidgetPayload::Lines(w)) => chart_details(w.chart_def.as_ref(), &w.lines, "line"),
            Some(WidgetPayload::Bar(w)) => {
                let mut details = chart_details(w.chart_def.as_ref(), &w.data, "series");
                if w.stacked {
                    details.insert(0, "stacked".to_string());
                }
                details
            }
            Some(WidgetPayload::Table(w)) => table_details(w),
            Some(WidgetPayload::Cards(w)) => card_details(w),
        };
        self.children(stem, &details);
    }

    fn children(&mut self, stem: &str, details: &[String]) {
        for (i, detail) in details.iter().enumerate() {
            let (connector, _) = branch(i + 1 == details.len());
            let _ = writeln!(self.output, "{stem}{connector} {detail}");
        }
    }
}

fn branch(is_last: bool) -> (&'static str, &'static str) {
    if is_last {
        ("`--", "    ")
    } else {
        ("|--", "|   ")
    }
}

fn enum_label<E: TryFrom<i32>>(raw: i32, name: fn(E) -> &'static str) -> String {
    E::try_from(raw).map_or_else(|_| format!("#{raw}"), |e| name(e).to_string())
}

fn header(widget: &Widget) -> String {
    let Some(payload) = &widget.payload else {
        return "<empty widget>".to_string();
    };
    let meta = payload.meta();
    format!(
        "[{}] {} \"{}\" ({})",
        enum_label(meta.raw_widget_kind(), WidgetKind::as_str),
        meta.widget_id(),
        meta.widget_title(),
        enum_label(meta.raw_widget_category(), Category::as_str)
    )
}

fn chart_details(def: Option<&ChartDef>, series: &[Line], noun: &str) -> Vec<String> {
    let mut details = Vec::new();
    if let Some(def) = def {
        for (name, axis) in [("x", &def.x_axis), ("y", &def.y_axis)] {
            if let Some(axis) = axis {
                details.push(format!(
                    "{name}: {} \"{}\"",
                    enum_label(axis.kind, AxisKind::as_str),
                    axis.label
                ));
            }
        }
    }
    for line in series {
        details.push(format!("{noun} '{}': {} point(s)", line.name, line.len()));
    }
    details
}

fn table_details(table: &Table) -> Vec<String> {
    let Some(data) = &table.data else {
        return vec!["<no data>".to_string()];
    };
    let columns: Vec<String> = data
        .schema()
        .iter()
        .map(|c| format!("{}:{}", c.id, enum_label(c.value_type, ScalarType::as_str)))
        .collect();
    vec![
        format!("columns: {}", columns.join(", ")),
        format!("rows: {}", data.rows_size()),
    ]
}

fn card_details(cards: &CardDef) -> Vec<String> {
    let group_count = cards.group_count();
    let mut details: Vec<String> = (0..group_count)
        .map(|g| {
            let members: Vec<String> = cards
                .group(g)
                .map(|c| format!("{} = {}", c.title, c.scalar()))
                .collect();
            format!("group {g}: {}", members.join(", "))
        })
        .collect();

    let stray = cards.cards().iter().filter(|c| c.group >= group_count).count();
    if stray > 0 {
        details.push(format!("{stray} card(s) outside any group"));
    }
    details
}
