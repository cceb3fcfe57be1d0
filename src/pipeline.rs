use std::io::{BufRead, Read, Write};
use std::time::Duration;
use log::{info, warn};
use crate::collector::collect_settings;
use crate::encoder::{encode, Clock};
use crate::errors::TriLightError;
use crate::manager_lamp::{Lamp, Reply};
use crate::models::lamp_settings::LampSettings;

/// Runs the collect, encode, transmit and report stages against an open lamp
///
/// The clock is read only after all settings are collected, and nothing is written to the
/// lamp unless every setting was given.
///
/// # Arguments
///
/// * 'lamp' - the open lamp connection
/// * 'input' - the operator input
/// * 'out' - the operator console
/// * 'clock' - source of the current local time
/// * 'response_timeout' - how long to wait for the lamp to answer
pub fn run_session<P, R, W, C>(lamp: &mut Lamp<P>, input: &mut R, out: &mut W, clock: &C, response_timeout: Duration)
    -> Result<Reply, TriLightError>
where
    P: Read + Write,
    R: BufRead,
    W: Write,
    C: Clock,
{
    let settings = collect_settings(input, out)?;
    info!("collected settings: {}", settings);

    let line = encode_now(clock, &settings);
    transmit(lamp, out, &line)?;

    report(lamp, out, response_timeout)
}

fn encode_now<C: Clock>(clock: &C, settings: &LampSettings) -> String {
    let now = clock.now();
    encode(&now, settings)
}

/// Echoes the line to the operator and sends it to the lamp
///
/// # Arguments
///
/// * 'lamp' - the open lamp connection
/// * 'out' - the operator console
/// * 'line' - the encoded line including its terminator
fn transmit<P: Read + Write, W: Write>(lamp: &mut Lamp<P>, out: &mut W, line: &str) -> Result<(), TriLightError> {
    write!(out, "Sending: {}", line)?;
    out.flush()?;

    lamp.send_line(line)?;
    info!("sent {}", line.trim_end());

    Ok(())
}

/// Waits for the lamp to answer and shows the answer to the operator
///
/// # Arguments
///
/// * 'lamp' - the open lamp connection
/// * 'out' - the operator console
/// * 'response_timeout' - how long to wait for the answer
fn report<P: Read + Write, W: Write>(lamp: &mut Lamp<P>, out: &mut W, response_timeout: Duration)
    -> Result<Reply, TriLightError> {

    let reply = lamp.read_reply(response_timeout)?;
    match &reply {
        Reply::Line(line) => {
            info!("lamp replied: {}", line);
            writeln!(out, "Response: {}", line)?;
        }
        Reply::NoResponse => {
            warn!("no reply from lamp within {} seconds", response_timeout.as_secs_f32());
            writeln!(out, "No response from the lamp within {} seconds", response_timeout.as_secs_f32())?;
        }
    }
    out.flush()?;

    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::Cursor;
    use chrono::NaiveTime;
    use crate::manager_lamp::mock::MockPort;

    const ANSWERS: &str = "20\n0\n6\n30\n0\n15\n9000\n300\n";

    struct FixedClock {
        time: NaiveTime,
        calls: Cell<usize>,
    }

    impl FixedClock {
        fn at(hour: u32, minute: u32) -> Self {
            Self { time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap(), calls: Cell::new(0) }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> NaiveTime {
            self.calls.set(self.calls.get() + 1);
            self.time
        }
    }

    fn run(port: MockPort, answers: &str, clock: &FixedClock) -> (Result<Reply, TriLightError>, Lamp<MockPort>, String) {
        let mut lamp = Lamp::new(port);
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut out: Vec<u8> = Vec::new();
        let result = run_session(&mut lamp, &mut input, &mut out, clock, Duration::from_millis(20));

        (result, lamp, String::from_utf8(out).unwrap())
    }

    #[test]
    fn sends_line_and_prints_reply() {
        let clock = FixedClock::at(18, 5);
        let (result, lamp, console) = run(MockPort::replying("OK\n"), ANSWERS, &clock);

        assert_eq!(result.unwrap(), Reply::Line("OK".to_string()));
        assert_eq!(lamp.port().written, b"18x5x20x0x6x30x0x15x300x9000\n");
        assert!(console.contains("Sending: 18x5x20x0x6x30x0x15x300x9000\n"));
        assert!(console.lines().any(|l| l == "Response: OK"));
    }

    #[test]
    fn clock_read_once_after_collection() {
        let clock = FixedClock::at(23, 59);
        let (_, lamp, _) = run(MockPort::replying("OK\n"), ANSWERS, &clock);

        assert_eq!(clock.calls.get(), 1);
        assert!(lamp.port().written.starts_with(b"23x59x"));
    }

    #[test]
    fn incomplete_input_sends_nothing() {
        let clock = FixedClock::at(18, 5);
        let (result, lamp, _) = run(MockPort::replying("OK\n"), "20\n0\n6\n", &clock);

        assert!(matches!(result, Err(TriLightError::IncompleteInput(_))));
        assert!(lamp.port().written.is_empty());
        assert_eq!(lamp.port().reads, 0);
        assert_eq!(clock.calls.get(), 0);
    }

    #[test]
    fn write_failure_skips_read() {
        let clock = FixedClock::at(18, 5);
        let port = MockPort { fail_write: true, ..MockPort::replying("OK\n") };
        let (result, lamp, console) = run(port, ANSWERS, &clock);

        let err = result.unwrap_err();
        assert!(matches!(err, TriLightError::TransmissionFailure(_)));
        assert_eq!(err.stage(), crate::errors::Stage::Transmit);
        assert_eq!(lamp.port().reads, 0);
        assert!(!console.contains("Response:"));
    }

    #[test]
    fn closed_port_is_a_reception_failure() {
        let clock = FixedClock::at(18, 5);
        let (result, lamp, console) = run(MockPort { closed: true, ..Default::default() }, ANSWERS, &clock);

        let err = result.unwrap_err();
        assert!(matches!(err, TriLightError::ReceptionFailure(_)));
        assert_eq!(err.stage(), crate::errors::Stage::Receive);
        assert!(!lamp.port().written.is_empty());
        assert!(!console.contains("No response from the lamp"));
    }

    #[test]
    fn silent_lamp_gives_no_response() {
        let clock = FixedClock::at(18, 5);
        let (result, lamp, console) = run(MockPort::default(), ANSWERS, &clock);

        assert_eq!(result.unwrap(), Reply::NoResponse);
        assert!(!lamp.port().written.is_empty());
        assert!(console.contains("No response from the lamp"));
    }
}
