use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::calc::coerce;

use super::kind::WidgetKind;

/// Payload of a `[BUDGET_TABLE]` widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetTableData {
    #[serde(deserialize_with = "lenient_strings")]
    pub headers: Vec<String>,
    #[serde(deserialize_with = "lenient_rows")]
    pub rows: Vec<BudgetRow>,
}

/// One budget line. Missing fields default to empty / zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetRow {
    #[serde(deserialize_with = "lenient_string")]
    pub item: String,
    #[serde(deserialize_with = "lenient_number")]
    pub low: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub high: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub estimate: f64,
}

/// Payload of a `[TICKET_ESTIMATOR]` widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketEstimatorData {
    #[serde(deserialize_with = "lenient_defaults")]
    pub defaults: TicketDefaults,
}

/// Starting values for the eight ticket estimator inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketDefaults {
    #[serde(deserialize_with = "lenient_number")]
    pub ticket_price: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub venue_capacity: f64,
    /// Percentage of capacity expected to sell, 0 to 100.
    #[serde(deserialize_with = "lenient_number")]
    pub sell_through_rate: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub merch_spend_per_guest: f64,
    /// Venue's cut of ticket revenue, 0 to 100.
    #[serde(deserialize_with = "lenient_number")]
    pub venue_fee_percent: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub venue_cost_fixed: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub marketing_cost: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub crew_cost: f64,
}

// Field types inside a payload are not checked: anything that is not the
// expected shape coerces the same way a calculator edit box does.

/// A number, a numeric string (`"20"`, `"15%"`) or anything else as 0.
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(number_of(&Value::deserialize(deserializer)?))
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(string_of(Value::deserialize(deserializer)?))
}

/// An array with every element stringified; any other value is empty.
fn lenient_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(string_of).collect(),
        _ => Vec::new(),
    })
}

/// An array of rows; entries that are not objects become empty rows.
fn lenient_rows<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<BudgetRow>, D::Error> {
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(_) => BudgetRow::deserialize(item).map_err(serde::de::Error::custom),
            _ => Ok(BudgetRow::default()),
        })
        .collect()
}

fn lenient_defaults<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<TicketDefaults, D::Error> {
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => {
            TicketDefaults::deserialize(value).map_err(serde::de::Error::custom)
        }
        _ => Ok(TicketDefaults::default()),
    }
}

fn number_of(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Value::String(s) => coerce::leading_float(s),
        _ => 0.0,
    }
}

fn string_of(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// A decoded widget payload. Immutable once parsed; editable state lives in
/// the calculators of [`crate::calc`].
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetPayload {
    BudgetTable(BudgetTableData),
    TicketEstimator(TicketEstimatorData),
}

#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("Invalid {kind} JSON: {source}")]
    InvalidJson {
        kind: WidgetKind,
        source: serde_json::Error,
    },
    #[error("{kind} payload is missing required field `{field}`")]
    MissingField {
        kind: WidgetKind,
        field: &'static str,
    },
}

/// Decodes the text between a widget's tags.
///
/// Only the presence of the kind's top-level keys is checked; a key set to
/// `null` or `false` counts as absent. Unknown fields are ignored, and row
/// or default fields that are missing or of the wrong type fall back to
/// zero or an empty string.
pub fn decode(kind: WidgetKind, body: &str) -> Result<WidgetPayload, WidgetError> {
    let invalid = |source| WidgetError::InvalidJson { kind, source };

    let value: Value = serde_json::from_str(body).map_err(invalid)?;
    for &field in kind.required_fields() {
        if matches!(value.get(field), None | Some(Value::Null) | Some(Value::Bool(false))) {
            return Err(WidgetError::MissingField { kind, field });
        }
    }

    match kind {
        WidgetKind::BudgetTable => serde_json::from_value(value)
            .map(WidgetPayload::BudgetTable)
            .map_err(invalid),
        WidgetKind::TicketEstimator => serde_json::from_value(value)
            .map(WidgetPayload::TicketEstimator)
            .map_err(invalid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn decodes_budget_table() {
        let body = r#"{"headers":["Item","Low","High","Est"],"rows":[{"item":"Mixing","low":100,"high":500,"estimate":250}]}"#;
        let payload = decode(WidgetKind::BudgetTable, body).unwrap();
        assert_eq!(
            payload,
            WidgetPayload::BudgetTable(BudgetTableData {
                headers: vec!["Item".into(), "Low".into(), "High".into(), "Est".into()],
                rows: vec![BudgetRow {
                    item: "Mixing".into(),
                    low: 100.0,
                    high: 500.0,
                    estimate: 250.0,
                }],
            })
        );
    }

    #[test]
    fn decodes_ticket_defaults() {
        let body = r#"{"defaults":{"ticketPrice":20,"venueCapacity":200,"sellThroughRate":75,"merchSpendPerGuest":10,"venueFeePercent":15,"venueCostFixed":500,"marketingCost":200,"crewCost":300}}"#;
        let WidgetPayload::TicketEstimator(data) =
            decode(WidgetKind::TicketEstimator, body).unwrap()
        else {
            panic!("expected ticket estimator");
        };
        assert_eq!(data.defaults.ticket_price, 20.0);
        assert_eq!(data.defaults.crew_cost, 300.0);
    }

    #[test]
    fn partial_fields_default_to_zero() {
        let body = r#"{"headers":[],"rows":[{"item":"Gas"}],"note":"extra"}"#;
        let WidgetPayload::BudgetTable(data) = decode(WidgetKind::BudgetTable, body).unwrap()
        else {
            panic!("expected budget table");
        };
        assert_eq!(data.rows[0].estimate, 0.0);

        let WidgetPayload::TicketEstimator(data) =
            decode(WidgetKind::TicketEstimator, r#"{"defaults":{"ticketPrice":12.5}}"#).unwrap()
        else {
            panic!("expected ticket estimator");
        };
        assert_eq!(data.defaults.ticket_price, 12.5);
        assert_eq!(data.defaults.venue_capacity, 0.0);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = decode(WidgetKind::BudgetTable, "{not valid json").unwrap_err();
        assert!(matches!(err, WidgetError::InvalidJson { .. }));
        assert!(err.to_string().starts_with("Invalid BUDGET_TABLE JSON"));
    }

    #[rstest]
    #[case(WidgetKind::BudgetTable, r#"{"rows":[]}"#, "headers")]
    #[case(WidgetKind::BudgetTable, r#"{"headers":[]}"#, "rows")]
    #[case(WidgetKind::BudgetTable, r#"{"headers":null,"rows":[]}"#, "headers")]
    #[case(WidgetKind::BudgetTable, "[1, 2]", "headers")]
    #[case(WidgetKind::TicketEstimator, r#"{"ticketPrice":20}"#, "defaults")]
    #[case(WidgetKind::TicketEstimator, r#"{"defaults":false}"#, "defaults")]
    fn missing_required_field(
        #[case] kind: WidgetKind,
        #[case] body: &str,
        #[case] expected: &'static str,
    ) {
        match decode(kind, body) {
            Err(WidgetError::MissingField { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected missing `{expected}`, got {other:?}"),
        }
    }

    #[rstest]
    #[case(r#"{"item":"Mixing","low":100,"high":500,"estimate":null}"#, 0.0)]
    #[case(r#"{"item":"Mixing","low":100,"high":500,"estimate":"250"}"#, 250.0)]
    #[case(r#"{"item":"Mixing","low":100,"high":500,"estimate":"$250"}"#, 0.0)]
    #[case(r#"{"item":"Mixing","low":100,"high":500,"estimate":true}"#, 0.0)]
    fn budget_estimate_is_coerced(#[case] row: &str, #[case] expected: f64) {
        let body = format!(r#"{{"headers":["Item"],"rows":[{row}]}}"#);
        let WidgetPayload::BudgetTable(data) = decode(WidgetKind::BudgetTable, &body).unwrap()
        else {
            panic!("expected budget table");
        };
        assert_eq!(data.rows[0].estimate, expected);
        assert_eq!(data.rows[0].low, 100.0);
    }

    #[rstest]
    #[case(r#"{"ticketPrice":"20"}"#, 20.0)]
    #[case(r#"{"ticketPrice":"12.5 dollars"}"#, 12.5)]
    #[case(r#"{"ticketPrice":null}"#, 0.0)]
    #[case(r#"{"ticketPrice":[20]}"#, 0.0)]
    fn ticket_defaults_are_coerced(#[case] defaults: &str, #[case] expected: f64) {
        let body = format!(r#"{{"defaults":{defaults}}}"#);
        let WidgetPayload::TicketEstimator(data) =
            decode(WidgetKind::TicketEstimator, &body).unwrap()
        else {
            panic!("expected ticket estimator");
        };
        assert_eq!(data.defaults.ticket_price, expected);
    }

    #[test]
    fn header_cells_are_stringified() {
        let body = r#"{"headers":["Item","Low",null,4],"rows":[{"item":7}]}"#;
        let WidgetPayload::BudgetTable(data) = decode(WidgetKind::BudgetTable, body).unwrap()
        else {
            panic!("expected budget table");
        };
        assert_eq!(data.headers, vec!["Item", "Low", "", "4"]);
        assert_eq!(data.rows[0].item, "7");
    }

    #[test]
    fn wrong_container_shapes_decode_empty() {
        let WidgetPayload::BudgetTable(data) =
            decode(WidgetKind::BudgetTable, r#"{"headers":"Item","rows":[5,{"item":"Gas"}]}"#)
                .unwrap()
        else {
            panic!("expected budget table");
        };
        assert!(data.headers.is_empty());
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[0], BudgetRow::default());

        let WidgetPayload::TicketEstimator(data) =
            decode(WidgetKind::TicketEstimator, r#"{"defaults":"cheap"}"#).unwrap()
        else {
            panic!("expected ticket estimator");
        };
        assert_eq!(data.defaults, TicketDefaults::default());
    }

    #[test]
    fn empty_body_is_invalid_json() {
        assert!(matches!(
            decode(WidgetKind::TicketEstimator, ""),
            Err(WidgetError::InvalidJson { .. })
        ));
    }
}
