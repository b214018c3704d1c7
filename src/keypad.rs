//! Calculator Keypad State
//!
//! Pure input state of the calculator widget. Arithmetic itself happens on
//! the remote service: pressing `=` (or an operator while one is pending)
//! yields a `Calculation` to send, and the answer comes back through
//! `apply_result`.

use storefront_api::Operation;

/// A request the widget has to send to the arithmetic service
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calculation {
    pub op: Operation,
    pub a: f64,
    pub b: f64,
    /// Operator pressed to trigger this calculation, pending afterwards
    pub then: Option<Operation>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Keypad {
    display: String,
    first: Option<f64>,
    operator: Option<Operation>,
    waiting_for_operand: bool,
}

impl Default for Keypad {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            first: None,
            operator: None,
            waiting_for_operand: false,
        }
    }
}

impl Keypad {
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn operator(&self) -> Option<Operation> {
        self.operator
    }

    fn value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    pub fn input_digit(&mut self, digit: char) {
        if self.waiting_for_operand {
            self.display = digit.to_string();
            self.waiting_for_operand = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    pub fn input_decimal(&mut self) {
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn negate(&mut self) {
        self.display = format_number(-self.value());
    }

    pub fn percent(&mut self) {
        self.display = format_number(self.value() / 100.0);
    }

    /// Select the next operator. With an operator already pending and a
    /// second operand typed, the pending calculation is returned first.
    pub fn press_operator(&mut self, op: Operation) -> Option<Calculation> {
        let value = self.value();
        match (self.first, self.operator) {
            (Some(a), Some(pending)) if !self.waiting_for_operand => Some(Calculation {
                op: pending,
                a,
                b: value,
                then: Some(op),
            }),
            (None, _) => {
                self.first = Some(value);
                self.operator = Some(op);
                self.waiting_for_operand = true;
                None
            }
            (Some(_), _) => {
                self.operator = Some(op);
                self.waiting_for_operand = true;
                None
            }
        }
    }

    /// The calculation behind `=`, if an operator is pending
    pub fn equals(&self) -> Option<Calculation> {
        let (a, op) = (self.first?, self.operator?);
        Some(Calculation { op, a, b: self.value(), then: None })
    }

    /// Show the service's answer and carry it as the next first operand
    pub fn apply_result(&mut self, calculation: &Calculation, result: f64) {
        self.display = format_number(result);
        self.first = Some(result);
        self.operator = calculation.then;
        self.waiting_for_operand = true;
    }
}

/// Shortest display form (`2` rather than `2.0`, never `-0`)
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_digits(keypad: &mut Keypad, digits: &str) {
        for digit in digits.chars() {
            match digit {
                '.' => keypad.input_decimal(),
                d => keypad.input_digit(d),
            }
        }
    }

    #[test]
    fn test_digit_entry() {
        let mut keypad = Keypad::default();
        type_digits(&mut keypad, "007.5.1");
        assert_eq!(keypad.display(), "7.51");

        keypad.clear();
        assert_eq!(keypad, Keypad::default());
    }

    #[test]
    fn test_equals_after_operator() {
        let mut keypad = Keypad::default();
        type_digits(&mut keypad, "12");
        assert_eq!(keypad.press_operator(Operation::Multiply), None);
        type_digits(&mut keypad, "3");

        let calc = keypad.equals().unwrap();
        assert_eq!(calc, Calculation { op: Operation::Multiply, a: 12.0, b: 3.0, then: None });

        keypad.apply_result(&calc, 36.0);
        assert_eq!(keypad.display(), "36");
        assert_eq!(keypad.operator(), None);
    }

    #[test]
    fn test_chained_operators() {
        let mut keypad = Keypad::default();
        type_digits(&mut keypad, "2");
        keypad.press_operator(Operation::Add);
        type_digits(&mut keypad, "3");

        let calc = keypad.press_operator(Operation::Minus).unwrap();
        assert_eq!(calc, Calculation { op: Operation::Add, a: 2.0, b: 3.0, then: Some(Operation::Minus) });
        keypad.apply_result(&calc, 5.0);
        assert_eq!(keypad.operator(), Some(Operation::Minus));

        type_digits(&mut keypad, "1");
        let calc = keypad.equals().unwrap();
        assert_eq!(calc, Calculation { op: Operation::Minus, a: 5.0, b: 1.0, then: None });
    }

    #[test]
    fn test_operator_can_be_replaced_before_second_operand() {
        let mut keypad = Keypad::default();
        type_digits(&mut keypad, "8");
        keypad.press_operator(Operation::Add);
        assert_eq!(keypad.press_operator(Operation::Divide), None);
        assert_eq!(keypad.operator(), Some(Operation::Divide));
    }

    #[test]
    fn test_equals_without_operator() {
        let mut keypad = Keypad::default();
        type_digits(&mut keypad, "4");
        assert_eq!(keypad.equals(), None);
    }

    #[test]
    fn test_negate_and_percent() {
        let mut keypad = Keypad::default();
        type_digits(&mut keypad, "50");
        keypad.percent();
        assert_eq!(keypad.display(), "0.5");
        keypad.negate();
        assert_eq!(keypad.display(), "-0.5");

        keypad.clear();
        keypad.negate();
        assert_eq!(keypad.display(), "0");
    }
}
