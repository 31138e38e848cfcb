//! JSON serialization of analysis results
//!
//! The serialized shape is the interchange contract between this heuristic
//! analyzer and any substitute producer; reports written by either side
//! deserialize identically, so downstream consumers never know which
//! analyzer ran.

use crate::analysis::pipeline::AnalysisResult;
use crate::io::error::{AnalysisError, Result};
use std::path::{Path, PathBuf};

/// Serialize a result to a JSON string
///
/// # Errors
///
/// Returns [`AnalysisError::ReportExport`] if serialization fails.
pub fn to_json(result: &AnalysisResult, pretty: bool) -> Result<String> {
    let serialized = if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    };

    serialized.map_err(|e| AnalysisError::ReportExport {
        path: PathBuf::from("<string>"),
        source: e,
    })
}

/// Write a result to a JSON report file
///
/// # Errors
///
/// Returns an error if:
/// - The result cannot be serialized
/// - The parent directory cannot be created
/// - The report cannot be written to the specified path
pub fn write_report(result: &AnalysisResult, output_path: &str, pretty: bool) -> Result<()> {
    let serialized = if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    };
    let body = serialized.map_err(|e| AnalysisError::ReportExport {
        path: PathBuf::from(output_path),
        source: e,
    })?;

    if let Some(parent) = Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| AnalysisError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(output_path, body).map_err(|e| AnalysisError::FileSystem {
        path: PathBuf::from(output_path),
        operation: "write report",
        source: e,
    })?;

    Ok(())
}

/// Read a previously written report back into an [`AnalysisResult`]
///
/// Accepts reports from this analyzer and from any substitute producer
/// emitting the same contract.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The contents do not parse as a valid report
pub fn read_report<P: AsRef<Path>>(path: P) -> Result<AnalysisResult> {
    let path_buf = path.as_ref().to_path_buf();
    let body = std::fs::read_to_string(&path_buf).map_err(|e| AnalysisError::FileSystem {
        path: path_buf.clone(),
        operation: "read report",
        source: e,
    })?;

    serde_json::from_str(&body).map_err(|e| AnalysisError::ReportExport {
        path: path_buf,
        source: e,
    })
}
