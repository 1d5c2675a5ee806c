//! Boundary between the engine and whatever displays it.
//!
//! Inbound calls arrive as [`Operation`]s; [`Engine::apply`] runs one and then
//! notifies a [`DisplaySurface`] with the new trace and, after `Clear` or a
//! successful `Evaluate`, the new result text.

use crate::engine::state::Engine;
use crate::engine::token::Operator;

/// Receives engine notifications. Implementors only observe; they never
/// touch the history.
pub trait DisplaySurface {
    fn on_trace_changed(&mut self, text: &str);
    fn on_result_changed(&mut self, formatted: &str);
}

/// One user action against the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Digit(char),
    Operator(Operator),
    DecimalPoint,
    Negate,
    Percent,
    Backspace,
    Clear,
    Evaluate,
}

/// In-memory two-field display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
    pub trace: String,
    pub result: String,
}

impl Default for DisplayModel {
    fn default() -> Self {
        Self {
            trace: String::new(),
            result: "0".to_string(),
        }
    }
}

impl DisplaySurface for DisplayModel {
    fn on_trace_changed(&mut self, text: &str) {
        self.trace = text.to_string();
    }

    fn on_result_changed(&mut self, formatted: &str) {
        self.result = formatted.to_string();
    }
}

impl Engine {
    pub fn apply<S: DisplaySurface + ?Sized>(&mut self, operation: Operation, surface: &mut S) {
        let result = match operation {
            Operation::Digit(digit) => {
                self.insert_number(digit);
                None
            }
            Operation::Operator(op) => {
                self.insert_operator(op);
                None
            }
            Operation::DecimalPoint => {
                self.insert_decimal_point();
                None
            }
            Operation::Negate => {
                self.negate();
                None
            }
            Operation::Percent => {
                self.percent();
                None
            }
            Operation::Backspace => {
                self.backspace();
                None
            }
            Operation::Clear => {
                self.clear();
                Some(self.format_result(0.0))
            }
            Operation::Evaluate => self.evaluate().map(|value| self.format_result(value)),
        };

        surface.on_trace_changed(&self.trace());
        if let Some(formatted) = result {
            surface.on_result_changed(&formatted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every notification in order.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl DisplaySurface for Recorder {
        fn on_trace_changed(&mut self, text: &str) {
            self.events.push(format!("trace:{}", text));
        }

        fn on_result_changed(&mut self, formatted: &str) {
            self.events.push(format!("result:{}", formatted));
        }
    }

    fn run(ops: &[Operation]) -> (Engine, DisplayModel) {
        let mut engine = Engine::new();
        let mut display = DisplayModel::default();
        for &op in ops {
            engine.apply(op, &mut display);
        }
        (engine, display)
    }

    #[test]
    fn test_display_model_defaults_to_zero() {
        let display = DisplayModel::default();
        assert_eq!(display.trace, "");
        assert_eq!(display.result, "0");
    }

    #[test]
    fn test_trace_follows_every_operation() {
        let (_, display) = run(&[Operation::Digit('1'), Operation::Digit('2')]);
        assert_eq!(display.trace, "12");

        let (_, display) = run(&[
            Operation::Digit('1'),
            Operation::Digit('2'),
            Operation::Operator(Operator::Add),
        ]);
        assert_eq!(display.trace, "12 +");
    }

    #[test]
    fn test_evaluate_pushes_result() {
        let (_, display) = run(&[
            Operation::Digit('1'),
            Operation::Digit('2'),
            Operation::Operator(Operator::Add),
            Operation::Digit('3'),
            Operation::Evaluate,
        ]);
        assert_eq!(display.trace, "12 + 3");
        assert_eq!(display.result, "15");
    }

    #[test]
    fn test_result_is_grouped() {
        let (_, display) = run(&[
            Operation::Digit('9'),
            Operation::Digit('9'),
            Operation::Digit('9'),
            Operation::Operator(Operator::Multiply),
            Operation::Digit('9'),
            Operation::Digit('9'),
            Operation::Digit('9'),
            Operation::Evaluate,
        ]);
        assert_eq!(display.result, "998,001");
    }

    #[test]
    fn test_noop_evaluate_emits_trace_only() {
        let mut engine = Engine::new();
        let mut recorder = Recorder::default();
        engine.apply(Operation::Digit('4'), &mut recorder);
        engine.apply(Operation::Operator(Operator::Add), &mut recorder);
        engine.apply(Operation::Evaluate, &mut recorder);
        assert_eq!(recorder.events, vec!["trace:4", "trace:4 +", "trace:4 +"]);
    }

    #[test]
    fn test_clear_emits_trace_then_zero() {
        let mut engine = Engine::new();
        let mut recorder = Recorder::default();
        engine.apply(Operation::Digit('4'), &mut recorder);
        engine.apply(Operation::Clear, &mut recorder);
        assert_eq!(recorder.events, vec!["trace:4", "trace:", "result:0"]);
    }

    #[test]
    fn test_clear_after_result_shows_zero() {
        let (engine, display) = run(&[
            Operation::Digit('8'),
            Operation::Evaluate,
            Operation::Clear,
        ]);
        assert!(engine.history().is_empty());
        assert_eq!(display.trace, "");
        assert_eq!(display.result, "0");
    }

    #[test]
    fn test_surface_as_trait_object() {
        let mut engine = Engine::new();
        let mut display = DisplayModel::default();
        let surface: &mut dyn DisplaySurface = &mut display;
        engine.apply(Operation::Digit('7'), surface);
        assert_eq!(display.trace, "7");
    }
}
