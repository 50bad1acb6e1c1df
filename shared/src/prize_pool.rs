use serde::{Deserialize, Serialize};

/// Admin-editable prize row. Rows without a server id are client-only
/// drafts until the next successful save.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Prize {
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: Option<String>,
    pub weight: i64,
    pub active: bool,
    pub icon: Option<String>,
}

/// Public view of one active prize, in draw order. Its position in the list
/// is the wedge index.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PrizeSummary {
    pub id: i64,
    pub name: String,
    pub value: Option<String>,
    pub weight: i64,
}

/// At least one row must be drawable: active, positive weight, named.
pub fn has_viable_pool(rows: &[Prize]) -> bool {
    rows.iter()
        .any(|r| r.active && r.weight > 0 && !r.name.trim().is_empty())
}

/// Every row, active or not, needs a name, a type, and a non-negative weight.
pub fn all_fields_valid(rows: &[Prize]) -> bool {
    rows.iter()
        .all(|r| !r.name.trim().is_empty() && !r.kind.trim().is_empty() && r.weight >= 0)
}

/// Gate for the admin save button.
pub fn can_submit(rows: &[Prize]) -> bool {
    !rows.is_empty() && has_viable_pool(rows) && all_fields_valid(rows)
}

/// Descriptive only; the server computes actual draw odds independently.
pub fn total_active_weight(rows: &[Prize]) -> i64 {
    rows.iter().filter(|r| r.active).map(|r| r.weight).sum()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PrizesSetRequest {
    pub prizes: Vec<Prize>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PrizesSetResponse {
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, kind: &str, weight: i64, active: bool) -> Prize {
        Prize {
            id: None,
            name: name.into(),
            kind: kind.into(),
            value: None,
            weight,
            active,
            icon: None,
        }
    }

    #[test]
    fn test_single_viable_row_is_submittable() {
        let rows = vec![row("X", "t", 5, true)];
        assert!(can_submit(&rows));
    }

    #[test]
    fn test_zero_weight_pool_is_rejected() {
        let rows = vec![row("X", "t", 0, true)];
        assert!(!can_submit(&rows));
    }

    #[test]
    fn test_only_inactive_weight_is_rejected() {
        let rows = vec![row("A", "t", 0, true), row("B", "t", 5, false)];
        assert!(!has_viable_pool(&rows));
        assert!(!can_submit(&rows));
    }

    #[test]
    fn test_blank_fields_fail_validation() {
        let rows = vec![row("X", "t", 5, true), row("  ", "t", 1, false)];
        assert!(!all_fields_valid(&rows));
        let rows = vec![row("X", "", 5, true)];
        assert!(!all_fields_valid(&rows));
        let rows = vec![row("X", "t", -1, true)];
        assert!(!all_fields_valid(&rows));
    }

    #[test]
    fn test_empty_list_is_not_submittable() {
        assert!(!can_submit(&[]));
    }

    #[test]
    fn test_total_active_weight_ignores_inactive_rows() {
        let rows = vec![
            row("A", "t", 5, true),
            row("B", "t", 3, false),
            row("C", "t", 2, true),
        ];
        assert_eq!(total_active_weight(&rows), 7);
    }

    #[test]
    fn test_type_field_round_trips_as_json_keyword() {
        let json = r#"{"id":1,"name":"Free Coffee","type":"free_item","value":null,"weight":4,"active":true,"icon":"coffee"}"#;
        let prize: Prize = serde_json::from_str(json).unwrap();
        assert_eq!(prize.kind, "free_item");
        let back = serde_json::to_value(&prize).unwrap();
        assert_eq!(back["type"], "free_item");
    }
}
