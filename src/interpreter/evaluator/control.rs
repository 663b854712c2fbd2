use log::debug;

use crate::{
    ast::Node,
    error::Unwind,
    interpreter::{
        environment::ScopeId,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an `if` statement.
    ///
    /// The condition is coerced with [`Value::is_truthy`]. Only the chosen
    /// block runs, in the enclosing scope, so its assignments stay visible
    /// afterwards.
    ///
    /// # Returns
    /// The value of the last statement of the chosen block, or `nothing` if
    /// that block is empty.
    ///
    /// # Errors
    /// Propagates any unwind from the condition or the chosen block.
    pub(crate) fn eval_if(&mut self,
                          node: &Node,
                          condition: &Node,
                          then_block: &[Node],
                          else_block: &[Node],
                          scope: ScopeId)
                          -> EvalResult<Value> {
        let condition = self.eval(condition, scope)
                            .map_err(|e| e.with_frame(node, "evaluating the condition"))?;

        if condition.is_truthy() {
            self.eval_block(then_block, scope)
                .map_err(|e| e.with_frame(node, "running the branch taken"))
        } else {
            self.eval_block(else_block, scope)
                .map_err(|e| e.with_frame(node, "running the otherwise branch"))
        }
    }

    /// Evaluates a `while` loop.
    ///
    /// The condition is re-evaluated before every iteration. When it turns
    /// falsy, the `otherwise` block runs once and the loop ends. A `break` in
    /// the body ends the loop at once and skips the `otherwise` block. A
    /// `returns` passes through to the enclosing procedure.
    ///
    /// # Returns
    /// Always `nothing`.
    ///
    /// # Errors
    /// Propagates runtime errors and `returns` from the condition, the body or
    /// the `otherwise` block.
    pub(crate) fn eval_loop(&mut self,
                            node: &Node,
                            condition: &Node,
                            body: &[Node],
                            otherwise: &[Node],
                            scope: ScopeId)
                            -> EvalResult<Value> {
        let mut iterations = 0_usize;

        loop {
            let keep_going = self.eval(condition, scope)
                                 .map_err(|e| e.with_frame(node, "evaluating the loop condition"))?
                                 .is_truthy();

            if !keep_going {
                debug!(target: "eval",
                       "line {}: loop finished after {iterations} iterations",
                       node.line_number());
                self.eval_block(otherwise, scope)
                    .map_err(|e| e.with_frame(node, "running the otherwise block"))?;
                return Ok(Value::Nil);
            }

            match self.eval_block(body, scope) {
                Ok(_) => iterations += 1,
                Err(Unwind::Break) => {
                    debug!(target: "eval",
                           "line {}: loop broken after {iterations} iterations",
                           node.line_number());
                    return Ok(Value::Nil);
                },
                Err(unwind) => return Err(unwind.with_frame(node, "running the loop body")),
            }
        }
    }
}
