use std::{
    collections::HashMap,
    io::Write,
    ops::{Deref, DerefMut},
};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Binding, Value},
    },
};

/// A scope pushed onto a [`Context`], popped again when the guard is dropped.
///
/// The guard dereferences to the context, so code runs "inside" the scope by
/// going through it. Because the pop happens in `Drop`, every way out of the
/// scope releases it: normal completion, a `return` unwinding, or an error
/// propagated with `?`.
pub struct ScopeGuard<'a, W: Write> {
    context: &'a mut Context<W>,
}

impl<W: Write> Deref for ScopeGuard<'_, W> {
    type Target = Context<W>;

    fn deref(&self) -> &Self::Target {
        &*self.context
    }
}

impl<W: Write> DerefMut for ScopeGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.context
    }
}

impl<W: Write> Drop for ScopeGuard<'_, W> {
    fn drop(&mut self) {
        self.context.scope_stack.pop();
    }
}

impl<W: Write> Context<W> {
    /// Pushes a new, empty scope and returns the guard that will pop it.
    pub fn scoped(&mut self) -> ScopeGuard<'_, W> {
        self.scope_stack.push(HashMap::new());
        ScopeGuard { context: self }
    }

    /// Evaluates a subexpression and ensures that it produces a value.
    ///
    /// # Errors
    /// `MissingValue` when the expression is a call to a function that
    /// finished without `return`.
    ///
    /// # Example
    /// ```
    /// use tilang::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut ctx = Context::with_output(Vec::new());
    /// let expr = Expr::Literal { value: 10.0.into(),
    ///                            line:  1, };
    ///
    /// assert_eq!(ctx.eval_child(&expr, 1).unwrap(), Value::Number(10.0));
    /// ```
    pub fn eval_child(&mut self, expr: &Expr, line: usize) -> EvalResult<Value> {
        self.eval(expr)?.ok_or(RuntimeError::MissingValue { line })
    }

    /// Binds `name`, rebinding an existing binding wherever it lives.
    ///
    /// Scopes are searched from the innermost outwards. If `name` is found,
    /// that binding is overwritten in place; otherwise the name is created in
    /// the innermost scope. Declaring an existing name therefore assigns to it
    /// rather than shadowing it.
    ///
    /// # Example
    /// ```
    /// use tilang::interpreter::{
    ///     evaluator::core::Context,
    ///     value::core::{Binding, Value},
    /// };
    ///
    /// let mut ctx = Context::with_output(Vec::new());
    /// ctx.declare("x", Binding::Variable(Value::Number(1.0)));
    /// {
    ///     let mut inner = ctx.scoped();
    ///     inner.declare("x", Binding::Variable(Value::Number(2.0)));
    /// }
    ///
    /// assert_eq!(ctx.lookup("x", 1).unwrap(), Value::Number(2.0));
    /// ```
    pub fn declare(&mut self, name: &str, binding: Binding) {
        if let Some(slot) = self.scope_stack
                                .iter_mut()
                                .rev()
                                .find_map(|scope| scope.get_mut(name))
        {
            *slot = binding;
            return;
        }

        if let Some(scope) = self.scope_stack.last_mut() {
            scope.insert(name.to_string(), binding);
        }
    }

    /// Binds `name` in the innermost scope, shadowing any outer binding.
    ///
    /// Used for call parameters, which always belong to the new call frame.
    pub fn define_local(&mut self, name: &str, binding: Binding) {
        if let Some(scope) = self.scope_stack.last_mut() {
            scope.insert(name.to_string(), binding);
        }
    }

    /// Looks up a name, searching scopes from the innermost outwards.
    ///
    /// A variable binding yields its value; a function binding yields a
    /// function value.
    ///
    /// # Errors
    /// `UnknownVariable` if no scope binds `name`.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.scope_stack
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
            .map(Value::from)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Number of scopes currently on the stack, the global scope included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scope_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_pops_on_drop() {
        let mut ctx = Context::with_output(Vec::new());
        {
            let mut frame = ctx.scoped();
            frame.define_local("a", Binding::Variable(Value::Number(1.0)));
            assert_eq!(frame.depth(), 2);
        }
        assert_eq!(ctx.depth(), 1);
        assert!(ctx.lookup("a", 1).is_err());
    }

    #[test]
    fn guard_pops_when_an_error_propagates() {
        fn failing(ctx: &mut Context<Vec<u8>>) -> EvalResult<Value> {
            let frame = ctx.scoped();
            frame.lookup("missing", 3)
        }

        let mut ctx = Context::with_output(Vec::new());
        assert_eq!(failing(&mut ctx),
                   Err(RuntimeError::UnknownVariable { name: "missing".into(),
                                                       line: 3, }));
        assert_eq!(ctx.depth(), 1);
    }

    #[test]
    fn declare_creates_in_innermost_scope_when_unbound() {
        let mut ctx = Context::with_output(Vec::new());
        {
            let mut frame = ctx.scoped();
            frame.declare("y", Binding::Variable(Value::Number(5.0)));
            assert_eq!(frame.lookup("y", 1), Ok(Value::Number(5.0)));
        }
        assert!(ctx.lookup("y", 1).is_err());
    }

    #[test]
    fn define_local_shadows() {
        let mut ctx = Context::with_output(Vec::new());
        ctx.declare("x", Binding::Variable(Value::Number(1.0)));
        {
            let mut frame = ctx.scoped();
            frame.define_local("x", Binding::Variable(Value::Number(2.0)));
            assert_eq!(frame.lookup("x", 1), Ok(Value::Number(2.0)));
        }
        assert_eq!(ctx.lookup("x", 1), Ok(Value::Number(1.0)));
    }
}
