use std::io::Write;
use std::str::FromStr;

use anyhow::{bail, Result};
use serde::Serialize;
use sha2_engine::Digest;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<hex digest>  <path>` lines, as printed by `sha256sum`.
    Hex,
    /// The digest bytes only, back to back.
    Raw,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(OutputFormat::Hex),
            "raw" => Ok(OutputFormat::Raw),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format: {}", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FileReport {
    pub path: String,
    pub variant: String,
    pub digest: String,
    pub bytes: u128,
    #[serde(skip)]
    raw: Vec<u8>,
}

impl FileReport {
    pub fn new(path: &str, digest: &Digest, bytes: u128) -> Self {
        FileReport {
            path: path.to_string(),
            variant: digest.variant().to_string(),
            digest: digest.to_hex(),
            bytes,
            raw: digest.to_vec(),
        }
    }

    pub fn line(&self) -> String {
        format!("{}  {}", self.digest, self.path)
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }
}

pub fn write_reports<W: Write>(
    out: &mut W,
    reports: &[FileReport],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Hex => {
            for report in reports {
                writeln!(out, "{}", report.line())?;
            }
        }
        OutputFormat::Raw => {
            for report in reports {
                out.write_all(report.raw())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}
