//! JSON rendering of sealed documents via `serde_json`.
//!
//! Enumerations are written as raw numbers, matching the binary form, so a
//! document decoded from either encoding seals the same way.
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::CodecError;
use crate::validation::Sealed;

pub fn to_json<T: Serialize>(doc: &Sealed<T>) -> Result<String, CodecError> {
    Ok(serde_json::to_string(doc.get())?)
}

pub fn to_json_pretty<T: Serialize>(doc: &Sealed<T>) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(doc.get())?)
}

/// Parses a document into the Building state. Missing fields take their defaults.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, CodecError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        CardData, CardDef, Category, ChartDef, ColumnDef, Dashboard, Line, LinesDef, Point, Scalar,
        ScalarType, Table, TableData, WidgetKind,
    };
    use crate::validation::{ErrorKind, Seal};

    fn sharpe_cards(sharpe: f64) -> CardDef {
        CardDef::new("kpis", "KPIs", WidgetKind::Card, Category::StrategyBenchmark, 2).with_card(
            CardData::new("Sharpe Ratio", Scalar::decimal(sharpe), ScalarType::Decimal, 0),
        )
    }

    fn dashboard() -> Dashboard {
        let mut data = TableData::new(vec![
            ColumnDef::new("metric", "Metric", ScalarType::String),
            ColumnDef::new("portfolio", "Portfolio", ScalarType::Percent),
        ]);
        data.add_row(vec![Scalar::string("Total Return"), Scalar::percent(12.5)])
            .unwrap();

        let table = Table::new(
            "summary",
            "Summary",
            WidgetKind::DataTable,
            Category::StrategyBenchmark,
        )
        .with_data(data);
        Dashboard::new("report", "Report")
            .with_widget(table)
            .with_widget(sharpe_cards(1.42))
    }

    #[test]
    fn test_round_trip() {
        let sealed = dashboard().seal().unwrap();
        let text = to_json(&sealed).unwrap();
        let back: Dashboard = from_json(&text).unwrap();
        assert_eq!(&back, sealed.get());

        let pretty = to_json_pretty(&sealed).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(from_json::<Dashboard>(&pretty).unwrap(), back);
    }

    #[test]
    fn test_explicit_null_point_side_survives() {
        let header = ChartDef::new("nav", "NAV", WidgetKind::Lines, Category::StrategyBenchmark);
        let chart = LinesDef::new(header).with_line(Line::new("Fund").with_points([Point {
            x: Some(Scalar::null()),
            y: Some(Scalar::decimal(2.0)),
        }]));
        let sealed = chart.clone().seal().unwrap();
        let back: LinesDef = from_json(&to_json(&sealed).unwrap()).unwrap();
        assert_eq!(back, chart);
        assert_eq!(back.lines[0].points()[0].x, Some(Scalar::null()));
    }

    #[test]
    fn test_non_finite_values_never_reach_json() {
        let err = sharpe_cards(f64::INFINITY).seal().unwrap_err();
        assert_eq!(err.report().count(ErrorKind::NonFiniteNumber), 1);

        let mut fixed = err.into_value();
        fixed.data[0].value = Some(Scalar::decimal(f64::MAX));
        let sealed = fixed.seal().unwrap();
        let back: CardDef = from_json(&to_json(&sealed).unwrap()).unwrap();
        assert_eq!(&back, sealed.get());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let text = r#"{
            "id": "kpis", "title": "KPIs", "kind": 1, "category": 1, "group_size": 2,
            "layout": "grid",
            "data": [{
                "title": "Sharpe Ratio",
                "value": {"value": {"decimal": 1.42}, "precision": 2},
                "value_type": 2, "group": 0, "color": "green"
            }]
        }"#;
        let cards: CardDef = from_json(text).unwrap();
        assert_eq!(cards, sharpe_cards(1.42));
        assert!(cards.seal().is_ok());
    }

    #[test]
    fn test_missing_fields_default_then_fail_seal() {
        let text = r#"{"id":"r","widgets":[{"cards":{"id":"c","group_size":1}}]}"#;
        let doc: Dashboard = from_json(text).unwrap();
        let err = doc.seal().unwrap_err();
        assert_eq!(err.report().count(ErrorKind::EnumViolation), 2);
    }

    #[test]
    fn test_malformed_input() {
        let result = from_json::<Dashboard>("{\"widgets\": 3}");
        assert!(matches!(result, Err(CodecError::Json(_))));
    }
}
