use console::{style, Term};
use photoindex::gate::{Confirmation, ConfirmationGate, Decision};

/// Asks on stderr and reads the answer from the terminal.
///
/// Without a terminal there is nobody to ask, so the answer is cancel;
/// scripts pass `--yes` instead.
pub struct TerminalGate {
    term: Term,
}

impl TerminalGate {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl ConfirmationGate for TerminalGate {
    fn confirm(&mut self, request: &Confirmation) -> Decision {
        if !self.term.is_term() {
            return Decision::Cancel;
        }

        let prompt = format!(
            "{}\n{} [y = {}, N = {}]: ",
            style(request.header).bold(),
            request.message,
            request.confirm_label,
            request.cancel_label
        );
        if self.term.write_str(&prompt).is_err() {
            return Decision::Cancel;
        }

        match self.term.read_line() {
            Ok(answer) => parse_answer(&answer),
            Err(_) => Decision::Cancel,
        }
    }
}

fn parse_answer(answer: &str) -> Decision {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Decision::Confirm,
        _ => Decision::Cancel,
    }
}
