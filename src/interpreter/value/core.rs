use std::rc::Rc;

use crate::{
    ast::{FunctionDef, LiteralValue},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// There is no boolean type: comparisons and logical operators produce
/// `Number(1.0)` for true and `Number(0.0)` for false.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string of text.
    Str(String),
    /// A function value. Functions do not capture their defining scope;
    /// free names in the body resolve against the scopes active at call time.
    Function(Rc<FunctionDef>),
}

/// What a name in a scope is bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// A plain value.
    Variable(Value),
    /// A declared function, or a function passed in as an argument.
    Function(Rc<FunctionDef>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Number(if v { 1.0 } else { 0.0 })
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(s.clone()),
        }
    }
}

impl From<Value> for Binding {
    fn from(value: Value) -> Self {
        match value {
            Value::Function(def) => Self::Function(def),
            other => Self::Variable(other),
        }
    }
}

impl From<&Binding> for Value {
    fn from(binding: &Binding) -> Self {
        match binding {
            Binding::Variable(value) => value.clone(),
            Binding::Function(def) => Self::Function(Rc::clone(def)),
        }
    }
}

impl Value {
    /// Returns the name of the value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Function(_) => "function",
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    /// - `operation`: What the number is needed for, e.g. `"multiply"`.
    pub fn as_number(&self, line: usize, operation: &str) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(RuntimeError::TypeError { details: format!("Can only {operation} numbers, found {}",
                                                                    other.type_name()),
                                                   line }),
        }
    }

    /// Applies the truthiness rule: a non-zero number or a non-empty string
    /// is true.
    ///
    /// # Errors
    /// A function has no truth value and yields a type error.
    ///
    /// # Example
    /// ```
    /// use tilang::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(2.0).is_truthy(1).unwrap());
    /// assert!(!Value::Number(0.0).is_truthy(1).unwrap());
    /// assert!(!Value::from("").is_truthy(1).unwrap());
    /// ```
    pub fn is_truthy(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Number(n) => Ok(*n != 0.0),
            Self::Str(s) => Ok(!s.is_empty()),
            Self::Function(_) => Err(RuntimeError::TypeError { details:
                                                                   "A function has no truth value"
                                                                       .to_string(),
                                                               line }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Function(def) => write!(f, "<fun({})>", def.params.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_print_in_natural_decimal_form() {
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(-0.125).to_string(), "-0.125");
    }

    #[test]
    fn booleans_are_numbers() {
        assert_eq!(Value::from(true), Value::Number(1.0));
        assert_eq!(Value::from(false), Value::Number(0.0));
    }

    #[test]
    fn functions_have_no_truth_value() {
        let def = Rc::new(FunctionDef { name:   "f".into(),
                                        params: vec!["a".into()],
                                        body:   Vec::new(),
                                        line:   1, });
        let value = Value::Function(def);
        assert!(matches!(value.is_truthy(4), Err(RuntimeError::TypeError { line: 4, .. })));
        assert_eq!(value.to_string(), "<fun(a)>");
    }

    #[test]
    fn function_values_bind_as_functions() {
        let def = Rc::new(FunctionDef { name:   "g".into(),
                                        params: Vec::new(),
                                        body:   Vec::new(),
                                        line:   1, });
        assert_eq!(Binding::from(Value::Function(Rc::clone(&def))), Binding::Function(def));
        assert_eq!(Binding::from(Value::Number(1.0)), Binding::Variable(Value::Number(1.0)));
    }
}
