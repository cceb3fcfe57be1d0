pub mod lamp_settings;
