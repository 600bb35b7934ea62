//! Plain-text card with current settings, desired settings and the
//! recommended ND filter.
//!
//! Derived values are only printed from a valid [`Evaluation`]; an invalid
//! one shows the error in their place, so `NaN` never reaches the screen.

use std::fmt::Write;

use ndcalc_core::{Evaluation, ExposureGap, Field};

const TITLE: &str = "ND Filter Calculator";
const DESCRIPTION: &str = "Calculate the ND filter you need for your camera settings. \
This is only a recommendation; adjust for the lighting and the look you want.";
const RULE_WIDTH: usize = 48;
const LABEL_WIDTH: usize = 15;
const PLACEHOLDER: &str = "-";

/// Render the full card for one evaluation.
pub fn render_form(eval: &Evaluation) -> String {
    let inputs = &eval.inputs;
    let rec = eval.outcome.as_ref().ok();
    let mut out = String::new();

    let mode = format!("[{}]", inputs.mode.label());
    let pad = RULE_WIDTH.saturating_sub(TITLE.len() + mode.len()).max(1);
    let _ = writeln!(out, "{TITLE}{}{mode}", " ".repeat(pad));
    for line in wrap(DESCRIPTION, RULE_WIDTH) {
        let _ = writeln!(out, "{line}");
    }

    rule(&mut out);
    let _ = writeln!(out, "Current Settings");
    row(&mut out, "ISO", inputs.get(Field::CurrentIso));
    row(&mut out, "Aperture", inputs.get(Field::CurrentAperture));
    row(&mut out, "Shutter Speed", inputs.get(Field::CurrentShutter));
    row(&mut out, "FPS", inputs.get(Field::Fps));
    row(&mut out, "EV", &derived(rec.map(|r| r.current_ev.to_string())));

    rule(&mut out);
    let _ = writeln!(out, "Desired Settings");
    if inputs.mode.is_advanced() {
        row(&mut out, "ISO", inputs.get(Field::DesiredIso));
        row(&mut out, "Aperture", inputs.get(Field::DesiredAperture));
    }
    let shutter = eval.recommended_shutter.as_deref().ok().map(str::to_string);
    row(&mut out, "Shutter Speed", &derived(shutter));
    row(&mut out, "Stops", &derived(rec.map(|r| r.stops.to_string())));
    row(&mut out, "EV", &derived(rec.map(|r| r.desired_ev.to_string())));

    rule(&mut out);
    match &eval.outcome {
        Ok(rec) => {
            let _ = writeln!(out, "Recommendation");
            match (rec.nd_filter(), rec.exposure_gap()) {
                (Some(nd), _) => {
                    let _ = writeln!(out, "  Filter {nd} (density {:.1})", nd.optical_density());
                }
                (None, ExposureGap::TooDark(stops)) => {
                    let _ = writeln!(
                        out,
                        "  No ND filter. Settings are {stops} {} too dark.",
                        plural_stops(stops)
                    );
                }
                (None, _) => {
                    let _ = writeln!(out, "  No ND filter needed.");
                }
            }
        }
        Err(e) => {
            let _ = writeln!(out, "invalid: {e}");
        }
    }

    out
}

fn rule(out: &mut String) {
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
}

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {label:<LABEL_WIDTH$}{value}");
}

fn derived(value: Option<String>) -> String {
    value.unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn plural_stops(stops: u32) -> &'static str {
    if stops == 1 { "stop" } else { "stops" }
}

/// Greedy word wrap.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
