use protoscope_core::MessageInfo;
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Timestamp used when the current time cannot be formatted.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Identification report emitted for one capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,
    /// Input capture metadata.
    pub input: InputInfo,
    /// Decoded message, absent when no registered decoder matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageInfo>,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "protoscope").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input capture metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the analyzer.
    pub path: String,
    /// Capture length in bits.
    pub bits: u64,
}

/// Build a report around an identification outcome.
pub fn make_report(input_path: &str, input_bits: u64, message: Option<MessageInfo>) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "protoscope".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: now_rfc3339(),
        input: InputInfo {
            path: input_path.to_string(),
            bits: input_bits,
        },
        message,
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| DEFAULT_GENERATED_AT.to_string())
}
