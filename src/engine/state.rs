use tracing::{debug, info};

use crate::engine::config::{DisplayConfig, EvaluatorConfig};
use crate::engine::format::{display_to_operand, format_display, parse_operand, serialize_operand};
use crate::engine::reduce::reduce_tokens;
use crate::engine::token::{parse_digit, Operator, Token};

/// Where the engine is in building an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Empty,
    EnteringNumber,
    AfterOperator,
    AfterEquals,
}

impl EngineState {
    /// Classify a history by its tail token.
    pub fn of(history: &[Token]) -> Self {
        match history.last() {
            None => EngineState::Empty,
            Some(Token::Number(_)) => EngineState::EnteringNumber,
            Some(Token::Operator(_)) => EngineState::AfterOperator,
            Some(Token::Equals) => EngineState::AfterEquals,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EngineState::Empty => "READY",
            EngineState::EnteringNumber => "NUMBER",
            EngineState::AfterOperator => "OPERATOR",
            EngineState::AfterEquals => "RESULT",
        }
    }
}

/// The expression engine: an owned token history plus the operations that
/// mutate it. Requests that make no sense in the current state are no-ops.
#[derive(Debug, Clone)]
pub struct Engine {
    history: Vec<Token>,
    state: EngineState,
    display: DisplayConfig,
    evaluator: EvaluatorConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_config(DisplayConfig::default(), EvaluatorConfig::default())
    }

    pub fn with_config(display: DisplayConfig, evaluator: EvaluatorConfig) -> Self {
        Self {
            history: Vec::new(),
            state: EngineState::Empty,
            display,
            evaluator,
        }
    }

    pub fn history(&self) -> &[Token] {
        &self.history
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn display_config(&self) -> &DisplayConfig {
        &self.display
    }

    /// Space-joined token texts for the trace field. The `Equals` sentinel is
    /// not shown; the expression stays visible under its result.
    pub fn trace(&self) -> String {
        self.history
            .iter()
            .filter(|token| !matches!(token, Token::Equals))
            .map(Token::text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Result of the evaluated expression, recomputed from history.
    pub fn result(&self) -> Option<f64> {
        match self.state {
            EngineState::AfterEquals => Some(reduce_tokens(
                &self.history,
                &self.evaluator.pass_order,
            )),
            _ => None,
        }
    }

    pub fn format_result(&self, value: f64) -> String {
        format_display(value, &self.display)
    }

    pub fn insert_number(&mut self, digit: char) {
        let digit = match parse_digit(digit) {
            Ok(digit) => digit,
            Err(err) => {
                debug!(%err, "ignoring insert_number");
                return;
            }
        };

        match self.state {
            EngineState::EnteringNumber => {
                if let Some(text) = self.last_number_mut() {
                    text.push(digit);
                }
            }
            EngineState::Empty | EngineState::AfterOperator => {
                self.history.push(Token::Number(digit.to_string()));
                self.state = EngineState::EnteringNumber;
            }
            EngineState::AfterEquals => debug!("digit ignored after result"),
        }
    }

    pub fn insert_operator(&mut self, op: Operator) {
        match self.state {
            EngineState::EnteringNumber => {
                self.history.push(Token::Operator(op));
                self.state = EngineState::AfterOperator;
            }
            EngineState::AfterOperator => {
                self.edit_last_input(Token::Operator(op));
            }
            EngineState::AfterEquals => {
                let operand = self.displayed_operand();
                debug!(%operand, operator = %op, "chaining onto previous result");
                self.history.clear();
                self.history.push(Token::Number(operand));
                self.history.push(Token::Operator(op));
                self.state = EngineState::AfterOperator;
            }
            EngineState::Empty => debug!(operator = %op, "operator ignored on empty history"),
        }
    }

    pub fn insert_decimal_point(&mut self) {
        match self.state {
            EngineState::EnteringNumber => {
                if let Some(text) = self.last_number_mut() {
                    if !text.contains('.') {
                        text.push('.');
                    }
                }
            }
            EngineState::Empty | EngineState::AfterOperator => {
                self.history.push(Token::Number("0.".to_string()));
                self.state = EngineState::EnteringNumber;
            }
            EngineState::AfterEquals => debug!("decimal point ignored after result"),
        }
    }

    pub fn negate(&mut self) {
        self.map_last_number(|value| -value);
    }

    pub fn percent(&mut self) {
        self.map_last_number(|value| value / 100.0);
    }

    pub fn backspace(&mut self) {
        match self.state {
            EngineState::EnteringNumber => {
                let Some(Token::Number(text)) = self.history.last() else {
                    return;
                };
                let mut shortened = text.clone();
                shortened.pop();
                // A lone sign is not a number; drop the token with it
                if shortened.is_empty() || shortened == "-" {
                    self.history.pop();
                    self.state = if self.history.is_empty() {
                        EngineState::Empty
                    } else {
                        EngineState::AfterOperator
                    };
                } else {
                    self.edit_last_input(Token::Number(shortened));
                }
            }
            EngineState::AfterOperator => {
                self.history.pop();
                self.state = EngineState::EnteringNumber;
            }
            EngineState::Empty | EngineState::AfterEquals => debug!("backspace ignored"),
        }
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.state = EngineState::Empty;
        info!("history cleared");
    }

    /// Reduce the history to one value and mark it evaluated. Returns `None`
    /// unless the expression ends in a number.
    pub fn evaluate(&mut self) -> Option<f64> {
        if self.state != EngineState::EnteringNumber {
            debug!(state = ?self.state, "evaluate ignored");
            return None;
        }

        let value = reduce_tokens(&self.history, &self.evaluator.pass_order);
        info!(expression = %self.trace(), value, "evaluated");
        self.history.push(Token::Equals);
        self.state = EngineState::AfterEquals;
        Some(value)
    }

    /// The shown result as operand text, carrying the displayed precision.
    fn displayed_operand(&self) -> String {
        let value = self.result().unwrap_or(0.0);
        display_to_operand(&self.format_result(value), &self.display)
    }

    fn last_number_mut(&mut self) -> Option<&mut String> {
        match self.history.last_mut() {
            Some(Token::Number(text)) => Some(text),
            _ => None,
        }
    }

    fn map_last_number(&mut self, f: impl FnOnce(f64) -> f64) {
        let Some(Token::Number(text)) = self.history.last() else {
            debug!(state = ?self.state, "number edit ignored");
            return;
        };
        let value = f(parse_operand(text));
        self.edit_last_input(Token::Number(serialize_operand(value)));
    }

    /// Pop the tail and push its replacement as one mutation.
    fn edit_last_input(&mut self, token: Token) {
        self.history.pop();
        self.history.push(token);
    }
}
