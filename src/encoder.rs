use chrono::{Local, NaiveTime, Timelike};
use crate::models::lamp_settings::LampSettings;

/// Separator between fields in the line sent to the lamp
pub const SEPARATOR: &str = "x";

/// Source of the current local time
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// Reads the host clock
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Builds the configuration line for the lamp firmware
///
/// The firmware reads fields by position, the order is current hour, current minute,
/// sundown hour, sundown minute, sunrise hour, sunrise minute, transition hour,
/// transition minute, night temperature and day temperature.
///
/// # Arguments
///
/// * 'now' - the current local time, sent so the lamp can set its clock
/// * 'settings' - the settings given by the operator
pub fn encode<T: Timelike>(now: &T, settings: &LampSettings) -> String {
    let fields: [String; 10] = [
        now.hour().to_string(),
        now.minute().to_string(),
        settings.sundown.hour.to_string(),
        settings.sundown.minute.to_string(),
        settings.sunrise.hour.to_string(),
        settings.sunrise.minute.to_string(),
        settings.transition.hour.to_string(),
        settings.transition.minute.to_string(),
        settings.temp_night.to_string(),
        settings.temp_day.to_string(),
    ];

    format!("{}\n", fields.join(SEPARATOR))
}
