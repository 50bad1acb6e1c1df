use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AdminLoginRequest {
    pub password: String,
}

/// Opaque bearer token; stored client-side and attached to every admin call.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AdminLoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RedeemRequest {
    pub code: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RedeemStatus {
    Redeemed,
    AlreadyRedeemed,
    Expired,
    Invalid,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RedeemResponse {
    pub status: RedeemStatus,
    pub prize_name: Option<String>,
    pub prize_type: Option<String>,
    pub prize_value: Option<String>,
    pub redeemed_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnalyticsTotals {
    pub users: i64,
    pub spins: i64,
    pub codes: i64,
    pub redeemed: i64,
    pub expired: i64,
    pub active: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PrizeStat {
    pub prize_id: i64,
    pub prize_name: String,
    pub issued: i64,
    pub redeemed: i64,
    pub expired: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecentRedemption {
    pub code: String,
    pub redeemed_at: Option<String>,
    pub prize: String,
    pub user_name: Option<String>,
    pub user_phone: Option<String>,
}

/// Reporting payload; rendered as-is, no client-side computation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Analytics {
    pub totals: AnalyticsTotals,
    pub prizes: Vec<PrizeStat>,
    pub recent: Vec<RecentRedemption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redeem_status_round_trip() {
        let parsed: RedeemResponse =
            serde_json::from_str(r#"{"status":"already_redeemed"}"#).unwrap();
        assert_eq!(parsed.status, RedeemStatus::AlreadyRedeemed);
        assert!(parsed.prize_name.is_none());
    }
}
