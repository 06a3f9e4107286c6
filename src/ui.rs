/// Status and error output for the command line
///
/// Colored terminal text with a plain-text fallback when no terminal
/// capabilities are available.

use std::io::Write;

/// Print a status message with the tool prefix.
pub fn status(s: &str) {
    println!("bench-delta: {}", s);
}

/// Print an error message with a colored "error" prefix.
pub fn print_error(msg: &str) {
    println!();
    print_color("error", term::color::BRIGHT_RED);
    println!(": {}", msg);
    println!();
}

fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        print!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        if let Some(ref mut t) = term::stdout() {
            if t.fg(fg).is_err() {
                return false;
            }
            let _ = t.attr(term::Attr::Bold);
            if write!(t, "{}", s).is_err() {
                return false;
            }
            let _ = t.reset();
        }

        true
    }
}
