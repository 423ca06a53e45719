//! Calculator keypad: the display text and the rules for each button.
//!
//! The keypad owns the display. Button presses only ever build text; the
//! evaluator sees it when `=` is pressed.

use tracing::debug;

use crate::calculator::{Operator, evaluate};
use crate::config::DisplayConfig;
use crate::items::CalculatorItem;

/// A calculator button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Point,
    Operator(Operator),
    Clear,
    Equals,
}

impl Key {
    /// Map a button label (`0-9 . + - * / C =`) to a key.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c)),
            '.' => Some(Self::Point),
            'C' | 'c' => Some(Self::Clear),
            '=' => Some(Self::Equals),
            _ => Operator::from_char(c).map(Self::Operator),
        }
    }
}

/// The calculator display and its input rules.
#[derive(Debug, Clone, Default)]
pub struct Keypad {
    display: String,
    config: DisplayConfig,
    last_result: Option<CalculatorItem>,
}

impl Keypad {
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            display: String::new(),
            config,
            last_result: None,
        }
    }

    /// Current display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The result of the last `=` press, if any.
    pub fn last_result(&self) -> Option<&CalculatorItem> {
        self.last_result.as_ref()
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.display.push(d),
            Key::Point => {
                if !self.current_number().contains('.') {
                    self.display.push('.');
                }
            }
            Key::Operator(op) => self.push_operator(op),
            Key::Clear => self.clear(),
            Key::Equals => {
                self.equals();
            }
        }
    }

    /// Press every recognised key in `keys`, skipping anything else.
    pub fn press_all(&mut self, keys: &str) {
        for c in keys.chars() {
            match Key::from_char(c) {
                Some(key) => self.press(key),
                None => debug!(key = %c, "ignoring unknown key"),
            }
        }
    }

    pub fn clear(&mut self) {
        self.display.clear();
    }

    /// Evaluate the display and replace it with the result or error text.
    ///
    /// The display gets the separator-free form so later keys can extend it.
    pub fn equals(&mut self) -> &CalculatorItem {
        let expression = std::mem::take(&mut self.display);
        let item = CalculatorItem::from_result(&*expression, evaluate(&expression), &self.config);
        self.display = item.text_for_clipboard().to_string();
        self.last_result.insert(item)
    }

    /// Operators are ignored on an empty display and replace a trailing operator.
    fn push_operator(&mut self, op: Operator) {
        match self.display.chars().last() {
            None => {}
            Some(last) if Operator::from_char(last).is_some() => {
                self.display.pop();
                self.display.push(op.as_char());
            }
            Some(_) => self.display.push(op.as_char()),
        }
    }

    /// The text after the last operator.
    fn current_number(&self) -> &str {
        match self.display.rfind(['+', '-', '*', '/']) {
            Some(index) => &self.display[index + 1..],
            None => &self.display,
        }
    }
}
