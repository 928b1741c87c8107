//! Error classification: offline, client-side, or server-side.

/// The three buckets every handled error falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The device has no network connectivity.
    NetworkIssue,
    /// The endpoint rejected the request (HTTP 4xx).
    ClientSide,
    /// The endpoint failed, or the failure carries no recognizable status
    /// (5xx, status 0, transport errors).
    ServerSide,
}

impl ErrorClass {
    /// Fixed user-facing message for this class.
    pub fn message(self) -> &'static str {
        match self {
            ErrorClass::NetworkIssue => "No internet connection. Please check your network.",
            ErrorClass::ClientSide => "Something went wrong with the request. Please try again.",
            ErrorClass::ServerSide => "The server is having trouble. Please try again later.",
        }
    }
}

/// Classifies a failure. Evaluation order matters: connectivity wins over
/// any status, and a 4xx status beats the server-side fallback.
///
/// Stateless; each call computes the classification fresh.
pub fn classify(online: bool, status: Option<u16>) -> ErrorClass {
    if !online {
        ErrorClass::NetworkIssue
    } else if matches!(status, Some(s) if (400..=499).contains(&s)) {
        ErrorClass::ClientSide
    } else {
        ErrorClass::ServerSide
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_4xx_is_client_side_when_online() {
        for status in 400..=499 {
            assert_eq!(classify(true, Some(status)), ErrorClass::ClientSide);
        }
    }

    #[test]
    fn statuses_outside_4xx_are_server_side_when_online() {
        for status in [0, 100, 301, 399, 500, 503, 599, 999] {
            assert_eq!(classify(true, Some(status)), ErrorClass::ServerSide);
        }
        assert_eq!(classify(true, None), ErrorClass::ServerSide);
    }

    #[test]
    fn offline_wins_regardless_of_status() {
        assert_eq!(classify(false, Some(404)), ErrorClass::NetworkIssue);
        assert_eq!(classify(false, Some(500)), ErrorClass::NetworkIssue);
        assert_eq!(classify(false, None), ErrorClass::NetworkIssue);
    }

    #[test]
    fn classification_is_idempotent() {
        let first = classify(true, Some(404));
        let second = classify(true, Some(404));
        assert_eq!(first, second);
        assert_eq!(first.message(), second.message());
    }
}
