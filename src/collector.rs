use std::io::{BufRead, Write};
use log::warn;
use crate::errors::TriLightError;
use crate::models::lamp_settings::{ClockTime, FieldKind, LampSettings};

/// One question put to the operator
struct Prompt {
    label: &'static str,
    name: &'static str,
    kind: FieldKind,
}

const EVENING_HEADING: &str = "Please input the time in the evening you want to start relaxing";
const WAKE_HEADING: &str = "Please input the time you get up";
const TRANSITION_HEADING: &str = "Please input the time to transition the light";
const TEMPERATURE_HEADING: &str = "Please input the day and night temperature (100 - 10 000)";

const EVENING_HOUR: Prompt = Prompt { label: "Hour: ", name: "evening hour", kind: FieldKind::Hour };
const EVENING_MINUTE: Prompt = Prompt { label: "Minute: ", name: "evening minute", kind: FieldKind::Minute };
const WAKE_HOUR: Prompt = Prompt { label: "Hour: ", name: "wake hour", kind: FieldKind::Hour };
const WAKE_MINUTE: Prompt = Prompt { label: "Minute: ", name: "wake minute", kind: FieldKind::Minute };
const TRANSITION_HOUR: Prompt = Prompt { label: "Hour: ", name: "transition hour", kind: FieldKind::Hour };
const TRANSITION_MINUTE: Prompt = Prompt { label: "Minute: ", name: "transition minute", kind: FieldKind::Minute };
const DAY_TEMPERATURE: Prompt = Prompt { label: "Day: ", name: "day temperature", kind: FieldKind::Temperature };
const NIGHT_TEMPERATURE: Prompt = Prompt { label: "Night: ", name: "night temperature", kind: FieldKind::Temperature };

/// Asks the operator for all lamp settings
///
/// Prompts are given in a fixed order and every answer is checked before the next prompt.
/// An answer that isn't accepted is explained and asked for again. If input ends before all
/// settings are given, nothing is returned but an error.
///
/// # Arguments
///
/// * 'input' - the operator input
/// * 'out' - the operator console
pub fn collect_settings<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<LampSettings, TriLightError> {
    writeln!(out, "{}", EVENING_HEADING)?;
    let sundown = read_clock_time(input, out, &EVENING_HOUR, &EVENING_MINUTE)?;
    writeln!(out)?;

    writeln!(out, "{}", WAKE_HEADING)?;
    let sunrise = read_clock_time(input, out, &WAKE_HOUR, &WAKE_MINUTE)?;
    writeln!(out)?;

    writeln!(out, "{}", TRANSITION_HEADING)?;
    let transition = read_clock_time(input, out, &TRANSITION_HOUR, &TRANSITION_MINUTE)?;
    writeln!(out)?;

    writeln!(out, "{}", TEMPERATURE_HEADING)?;
    let temp_day = read_field(input, out, &DAY_TEMPERATURE)?;
    let temp_night = read_field(input, out, &NIGHT_TEMPERATURE)?;
    writeln!(out)?;

    writeln!(out, "Thank you, setting time and configuration")?;
    out.flush()?;

    Ok(LampSettings { sundown, sunrise, transition, temp_day, temp_night })
}

fn read_clock_time<R: BufRead, W: Write>(input: &mut R, out: &mut W, hour: &Prompt, minute: &Prompt)
    -> Result<ClockTime, TriLightError> {

    // Both values are range checked to 0-59 at most, so they always fit
    let hour = read_field(input, out, hour)? as u8;
    let minute = read_field(input, out, minute)? as u8;

    Ok(ClockTime { hour, minute })
}

/// Reads one field, repeating the prompt until an acceptable value is given
///
/// # Arguments
///
/// * 'input' - the operator input
/// * 'out' - the operator console
/// * 'prompt' - the prompt to show and the kind of value expected
fn read_field<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &Prompt) -> Result<u16, TriLightError> {
    loop {
        write!(out, "{}", prompt.label)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Err(TriLightError::IncompleteInput(prompt.name.to_string()));
        }

        let text = strip_terminator(&line);
        match prompt.kind.parse(text) {
            Ok(value) => return Ok(value),
            Err(reason) => {
                warn!("rejected {}: {}", prompt.name, reason);
                writeln!(out, "Invalid {}: {}, please try again", prompt.name, reason)?;
            }
        }
    }
}

/// Removes a trailing line terminator, leaving everything else untouched
fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
