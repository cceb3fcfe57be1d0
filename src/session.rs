use std::io::Write;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const BANNER: &str = r#"  _______   _ _      _       _     _
 |__   __| (_) |    (_)     | |   | |
    | |_ __ _| |     _  __ _| |__ | |_
    | | '__| | |    | |/ _` | '_ \| __|
    | | |  | | |____| | (_| | | | | |_
    |_|_|  |_|______|_|\__, |_| |_|\__|
                        __/ |
                       |___/
"#;

/// Clears the terminal, any failure is ignored since it is only for neatness
///
/// # Arguments
///
/// * 'out' - the operator console
pub fn clear_screen<W: Write>(out: &mut W) {
    let _ = out.write_all(CLEAR_SCREEN.as_bytes());
    let _ = out.flush();
}

/// Prints the banner and welcome text
///
/// # Arguments
///
/// * 'out' - the operator console
pub fn print_banner<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "Welcome to the TriLight configuration utility")?;
    writeln!(out)?;
    writeln!(out, "trilight-config version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out)?;
    out.flush()
}
