use std::fmt;

use serde::Serialize;

use crate::puzzle::{Operator, Value};

/// Two numbers combined into one
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    /// The left operand
    pub a: Value,
    /// The right operand
    pub b: Value,
    /// The operator applied to `a` and `b`
    pub operator: Operator,
    /// `a operator b`
    pub result: Value,
}

impl Step {
    /// Creates a step
    pub fn new(a: Value, b: Value, operator: Operator, result: Value) -> Self {
        Self {
            a,
            b,
            operator,
            result,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.a, self.operator, self.b, self.result)
    }
}

/// The steps that combine a puzzle's digits into its target, in order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SolutionPath {
    steps: Vec<Step>,
}

impl SolutionPath {
    /// The steps in the order they are applied
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if there are no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True if any step divides
    pub fn uses_division(&self) -> bool {
        self.steps
            .iter()
            .any(|step| step.operator == Operator::Divide)
    }

    /// Replay the steps on `digits` and check that they end at `target`.
    ///
    /// Every step must take its operands from the numbers left by the steps before it, and its
    /// result must follow the rules of the game.
    pub fn verify(&self, digits: &[Value], target: Value) -> bool {
        let mut values = digits.to_vec();
        for step in &self.steps {
            for &operand in &[step.a, step.b] {
                match values.iter().position(|&v| v == operand) {
                    Some(i) => {
                        values.swap_remove(i);
                    }
                    None => return false,
                }
            }
            if step.operator.apply(step.a, step.b) != Ok(step.result) {
                return false;
            }
            values.push(step.result);
        }
        values == [target]
    }
}

impl From<Vec<Step>> for SolutionPath {
    fn from(steps: Vec<Step>) -> Self {
        Self { steps }
    }
}

impl fmt::Display for SolutionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{}", step)?;
        }
        Ok(())
    }
}
