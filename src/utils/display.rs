use crate::types::TransactionStatus;

/// Visual treatment for a transaction status, for presentation surfaces
///
/// The core never depends on this; it exists so every surface renders the
/// same status the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusIndicator {
    pub color: &'static str,
    pub icon: &'static str,
}

/// Map a status to its visual treatment
pub fn status_indicator(status: TransactionStatus) -> StatusIndicator {
    match status {
        TransactionStatus::Pending => StatusIndicator {
            color: "blue",
            icon: "spinner",
        },
        TransactionStatus::Confirmed => StatusIndicator {
            color: "green",
            icon: "check-circle",
        },
        TransactionStatus::Failed => StatusIndicator {
            color: "red",
            icon: "warning",
        },
    }
}

/// Abbreviate a transaction hash for display, keeping the `0x` prefix,
/// the first `visible` and the last `visible` characters
pub fn shorten_hash(hash: &str, visible: usize) -> String {
    let body = hash.strip_prefix("0x").unwrap_or(hash);
    if body.len() <= visible * 2 {
        return hash.to_string();
    }
    format!(
        "0x{}…{}",
        &body[..visible],
        &body[body.len() - visible..]
    )
}
