//! Line-delimited JSON session between the calculator and an external UI.
//!
//! Each input line is one [`UiToCore`] message. The session applies it to the
//! form state, recomputes, and answers with exactly one [`CoreToUi`] line
//! before reading the next.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use ndcalc_core::ExposureInputs;

use crate::ipc::{CoreToUi, UiToCore};

/// Owns the form state for the lifetime of a session.
#[derive(Debug, Clone)]
pub struct Session {
    defaults: ExposureInputs,
    inputs: ExposureInputs,
}

impl Session {
    pub fn new(defaults: ExposureInputs) -> Self {
        Self {
            inputs: defaults.clone(),
            defaults,
        }
    }

    pub fn inputs(&self) -> &ExposureInputs {
        &self.inputs
    }

    /// Apply one message and return the recomputed state.
    pub fn handle(&mut self, msg: UiToCore) -> CoreToUi {
        match msg {
            UiToCore::RequestState => {}
            UiToCore::SetField { field, value } => self.inputs.set(field, value),
            UiToCore::SetMode { mode } => self.inputs.set_mode(mode),
            UiToCore::Reset => self.inputs = self.defaults.clone(),
        }
        CoreToUi::State {
            evaluation: self.inputs.evaluate().report(),
        }
    }

    /// Decode one raw line and handle it. Undecodable lines produce an
    /// error message and leave the state untouched.
    pub fn handle_line(&mut self, line: &str) -> CoreToUi {
        match serde_json::from_str::<UiToCore>(line) {
            Ok(msg) => {
                tracing::debug!("session received: {msg:?}");
                self.handle(msg)
            }
            Err(e) => {
                tracing::warn!("undecodable session line: {e}");
                CoreToUi::Error {
                    message: format!("invalid message: {e}"),
                }
            }
        }
    }

    /// Serve messages from `reader` until EOF, writing replies to `writer`.
    ///
    /// Blank lines are skipped without a reply. A line that is not valid
    /// UTF-8 is answered with an error like any other undecodable line; only
    /// I/O failures end the session.
    pub fn run<R: BufRead, W: Write>(&mut self, mut reader: R, mut writer: W) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .context("failed to read session input")?;
            if read == 0 {
                break;
            }

            let reply = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(line.trim_end_matches(['\n', '\r'])),
                Err(e) => {
                    tracing::warn!("session line is not UTF-8: {e}");
                    CoreToUi::Error {
                        message: format!("invalid message: {e}"),
                    }
                }
            };

            let json = serde_json::to_string(&reply).context("failed to encode reply")?;
            writeln!(writer, "{json}").context("failed to write reply")?;
            writer.flush().context("failed to flush reply")?;
        }

        tracing::info!("session input closed");
        Ok(())
    }
}
