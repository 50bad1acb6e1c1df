use serde::{Deserialize, Serialize};

/// Server-assigned outcome of a spin or status check.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpinStatus {
    New,
    ExistingActive,
    AlreadyRedeemed,
    Expired,
    Cooldown,
    None,
}

/// Latest word from the server about this user's spin. Replaced wholesale on
/// every response, never merged field by field.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinResult {
    pub status: SpinStatus,
    #[serde(default)]
    pub message: String,
    pub prize_name: Option<String>,
    pub prize_type: Option<String>,
    pub prize_value: Option<String>,
    pub code: Option<String>,
    pub expires_at: Option<String>,
    pub redeemed_at: Option<String>,
    pub next_spin_at: Option<String>,
    /// Present only on spin responses, never on status checks. Validated by
    /// the wheel geometry engine before use.
    pub wedge_index: Option<i64>,
    pub wedges_count: Option<i64>,
}

// === API Types ===

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpinRequest {
    pub full_name: String,
    pub phone: String,
    pub device_hash: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StatusRequest {
    pub phone: String,
    pub device_hash: String,
}

/// Request lifecycle; at most one spin or status request is in flight per
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Requesting,
    Settled,
}

/// Tracks the in-flight request phase plus the last settled server result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpinSession {
    pub phase: SpinPhase,
    pub last: Option<SpinResult>,
}

impl Default for SpinPhase {
    fn default() -> Self {
        SpinPhase::Idle
    }
}

impl SpinSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a request as dispatched. Returns false, changing nothing, while
    /// another request is still outstanding.
    pub fn begin(&mut self) -> bool {
        if self.phase == SpinPhase::Requesting {
            log::debug!("ignoring duplicate request while one is in flight");
            return false;
        }
        self.phase = SpinPhase::Requesting;
        true
    }

    /// Applies a server response, replacing any previous result wholesale.
    pub fn settle(&mut self, result: SpinResult) {
        self.phase = SpinPhase::Settled;
        self.last = Some(result);
    }

    /// The request failed: revert to the pre-request state and discard any
    /// partial result. The caller surfaces the error message separately.
    pub fn fail(&mut self) {
        self.phase = if self.last.is_some() {
            SpinPhase::Settled
        } else {
            SpinPhase::Idle
        };
    }

    pub fn requesting(&self) -> bool {
        self.phase == SpinPhase::Requesting
    }

    /// True while the latest settled result still carries an unredeemed code.
    pub fn has_active_code(&self) -> bool {
        self.phase == SpinPhase::Settled
            && matches!(
                self.last.as_ref().map(|r| r.status),
                Some(SpinStatus::New) | Some(SpinStatus::ExistingActive)
            )
    }

    /// The spin control is disabled while a request is outstanding or an
    /// active code is already held. Cooldown gating is time-based and comes
    /// from the server response, not from this flag.
    pub fn spin_blocked(&self) -> bool {
        self.requesting() || self.has_active_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(status: SpinStatus) -> SpinResult {
        SpinResult {
            status,
            message: String::new(),
            prize_name: None,
            prize_type: None,
            prize_value: None,
            code: None,
            expires_at: None,
            redeemed_at: None,
            next_spin_at: None,
            wedge_index: None,
            wedges_count: None,
        }
    }

    #[test]
    fn test_duplicate_requests_rejected() {
        let mut session = SpinSession::new();
        assert!(session.begin());
        assert!(!session.begin());
        assert!(session.spin_blocked());
    }

    #[test]
    fn test_settle_replaces_wholesale() {
        let mut session = SpinSession::new();
        session.begin();
        let mut first = result_with(SpinStatus::New);
        first.code = Some("K7F9X2BD".into());
        session.settle(first);
        assert!(session.has_active_code());

        session.begin();
        session.settle(result_with(SpinStatus::AlreadyRedeemed));
        let last = session.last.as_ref().unwrap();
        assert_eq!(last.status, SpinStatus::AlreadyRedeemed);
        assert!(last.code.is_none());
        assert!(!session.has_active_code());
    }

    #[test]
    fn test_failure_reverts_to_previous_state() {
        let mut session = SpinSession::new();
        session.begin();
        session.fail();
        assert_eq!(session.phase, SpinPhase::Idle);
        assert!(session.last.is_none());

        session.begin();
        session.settle(result_with(SpinStatus::ExistingActive));
        session.begin();
        session.fail();
        assert_eq!(session.phase, SpinPhase::Settled);
        assert!(session.has_active_code());
    }

    #[test]
    fn test_cooldown_blocks_for_a_different_reason() {
        let mut session = SpinSession::new();
        session.begin();
        session.settle(result_with(SpinStatus::Cooldown));
        // On cooldown the user holds no code; the UI disables spinning off
        // the countdown instead.
        assert!(!session.has_active_code());
        assert!(!session.spin_blocked());
    }

    #[test]
    fn test_status_strings_round_trip() {
        let json = r#"{"status":"existing_active","message":"m"}"#;
        let parsed: SpinResult = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, SpinStatus::ExistingActive);
        assert_eq!(
            serde_json::to_value(SpinStatus::AlreadyRedeemed).unwrap(),
            serde_json::json!("already_redeemed")
        );
        assert_eq!(
            serde_json::to_value(SpinStatus::None).unwrap(),
            serde_json::json!("none")
        );
    }
}
