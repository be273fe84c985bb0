use std::fmt::{self, Display, Formatter};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// The contents of a binding.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// A parameter pushed before its argument value is known.
    Placeholder,
    /// A bound value.
    Bound(Value),
}

/// A single name-to-slot binding.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// The bound name.
    pub name: String,
    /// What the name currently holds.
    pub slot: Slot,
}

/// Position in the binding stack, taken before a call pushes its parameters.
///
/// Restoring to the mark removes exactly what was pushed after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeMark(usize);

/// The binding store used for identifier resolution.
///
/// A single global scope, extended by temporary pushes for in-flight calls.
/// Lookup scans from the most recently pushed binding, so later bindings
/// shadow earlier ones with the same name. Resolution is dynamic: a function
/// body sees whatever is bound when it is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    /// Oldest binding first; the newest is at the end.
    bindings: Vec<Binding>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub const fn new() -> Self {
        Self { bindings: Vec::new() }
    }

    /// Number of bindings, placeholders included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether there are no bindings at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over the bindings, most recently pushed first.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter().rev()
    }

    /// Pushes a new binding in front of all others. Shadowing is allowed.
    pub fn extend(&mut self, name: &str, value: Value) {
        self.bindings.push(Binding { name: name.to_string(),
                                     slot: Slot::Bound(value), });
    }

    /// Pushes a placeholder for a parameter whose value is not known yet.
    pub fn push_temporary(&mut self, name: &str) {
        self.bindings.push(Binding { name: name.to_string(),
                                     slot: Slot::Placeholder, });
    }

    /// Finds the most recent binding for `name`.
    fn find(&self, name: &str) -> Option<usize> {
        self.bindings.iter().rposition(|b| b.name == name)
    }

    /// Returns a copy of the value bound to `name`.
    ///
    /// # Errors
    /// `RuntimeError::UnboundIdentifier` if `name` is not bound, or if the
    /// most recent binding is still a placeholder.
    ///
    /// # Example
    /// ```
    /// use mint::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.extend("r", Value::Integer(15));
    /// env.extend("r", Value::Integer(16));
    ///
    /// assert_eq!(env.lookup("r", 1).unwrap(), Value::Integer(16));
    /// assert!(env.lookup("x", 1).is_err());
    /// ```
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<Value> {
        match self.find(name).map(|i| &self.bindings[i].slot) {
            Some(Slot::Bound(value)) => Ok(value.clone()),
            Some(Slot::Placeholder) | None => {
                Err(RuntimeError::UnboundIdentifier { name: name.to_string(),
                                                      line })
            },
        }
    }

    /// Replaces the value of the most recent binding for `name` in place.
    ///
    /// Returns the value back if `name` is not bound.
    pub fn update(&mut self, name: &str, value: Value) -> Result<(), Value> {
        match self.find(name) {
            Some(i) => {
                self.bindings[i].slot = Slot::Bound(value);
                Ok(())
            },
            None => Err(value),
        }
    }

    /// Takes a mark of the current stack height.
    #[must_use]
    pub fn mark(&self) -> ScopeMark {
        ScopeMark(self.bindings.len())
    }

    /// Fills the placeholder `index` positions above `mark`.
    ///
    /// # Errors
    /// `RuntimeError::InternalInvariantViolation` if no binding exists there.
    pub fn bind(&mut self, mark: ScopeMark, index: usize, value: Value) -> EvalResult<()> {
        let len = self.bindings.len();
        let binding = self.bindings
                          .get_mut(mark.0 + index)
                          .ok_or_else(|| RuntimeError::InternalInvariantViolation {
                              details: format!("no parameter slot {index} above mark {} (environment holds {len})",
                                               mark.0),
                          })?;
        binding.slot = Slot::Bound(value);
        Ok(())
    }

    /// Drops every binding pushed after `mark`.
    ///
    /// # Errors
    /// `RuntimeError::InternalInvariantViolation` if the stack is already
    /// below the mark, which means pushes and pops were not paired.
    pub fn restore(&mut self, mark: ScopeMark) -> EvalResult<()> {
        if mark.0 > self.bindings.len() {
            return Err(RuntimeError::InternalInvariantViolation {
                details: format!("cannot restore to {} bindings, only {} remain",
                                 mark.0,
                                 self.bindings.len()),
            });
        }
        self.bindings.truncate(mark.0);
        Ok(())
    }

    /// Removes a contiguous block of `count` bindings, starting at the most
    /// recent binding for `name` and continuing towards older ones.
    ///
    /// This assumes the block is the one most recently pushed for a call;
    /// [`Environment::restore`] is the mark-based equivalent.
    ///
    /// # Errors
    /// `RuntimeError::InternalInvariantViolation` if `name` is not bound, or if
    /// fewer than `count` bindings lie at or below it.
    ///
    /// # Example
    /// ```
    /// use mint::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.extend("r", Value::Integer(15));
    /// env.push_temporary("x");
    /// env.push_temporary("y");
    ///
    /// env.shrink("y", 2).unwrap();
    /// assert_eq!(env.to_string(), "[(r : (Int 15))]");
    /// ```
    pub fn shrink(&mut self, name: &str, count: usize) -> EvalResult<()> {
        let Some(top) = self.find(name) else {
            return Err(RuntimeError::InternalInvariantViolation {
                details: format!("failed to shrink environment: cannot find identifier {name}"),
            });
        };
        if count > top + 1 {
            return Err(RuntimeError::InternalInvariantViolation {
                details: format!("failed to shrink environment: {count} bindings requested from {name}, only {} available",
                                 top + 1),
            });
        }
        self.bindings.drain(top + 1 - count..=top);
        Ok(())
    }

    /// Releases every binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}

impl Display for Binding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Bound(value) => write!(f, "({} : {value})", self.name),
            Slot::Placeholder => write!(f, "({} : (ID {}))", self.name, self.name),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, binding) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{binding}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_environment_is_empty() {
        let env = Environment::new();
        assert!(env.is_empty());
        assert_eq!(env.to_string(), "[]");
    }

    #[test]
    fn newest_binding_shadows_and_renders_first() {
        let mut env = Environment::new();
        env.extend("r", Value::Integer(15));
        env.extend("circumference", Value::Float(94.2));
        env.extend("r", Value::Integer(2));

        assert_eq!(env.lookup("r", 1), Ok(Value::Integer(2)));
        assert_eq!(env.to_string(),
                   "[(r : (Int 2)), (circumference : (Float 94.200000)), (r : (Int 15))]");
    }

    #[test]
    fn update_replaces_most_recent_match_in_place() {
        let mut env = Environment::new();
        env.extend("a", Value::Integer(1));
        env.extend("b", Value::Integer(2));
        env.extend("a", Value::Integer(3));

        assert_eq!(env.update("a", Value::Integer(4)), Ok(()));
        assert_eq!(env.len(), 3);
        assert_eq!(env.to_string(), "[(a : (Int 4)), (b : (Int 2)), (a : (Int 1))]");
        assert_eq!(env.update("c", Value::Integer(5)), Err(Value::Integer(5)));
    }

    #[test]
    fn placeholder_is_not_a_value() {
        let mut env = Environment::new();
        env.extend("x", Value::Integer(1));
        env.push_temporary("x");

        assert_eq!(env.lookup("x", 4),
                   Err(RuntimeError::UnboundIdentifier { name: "x".to_string(),
                                                         line: 4, }));
        assert_eq!(env.to_string(), "[(x : (ID x)), (x : (Int 1))]");
    }

    #[test]
    fn mark_bind_restore_round_trip() {
        let mut env = Environment::new();
        env.extend("x", Value::Integer(1));
        let before = env.clone();

        let mark = env.mark();
        env.push_temporary("x");
        env.push_temporary("y");
        env.bind(mark, 0, Value::Integer(10)).unwrap();
        env.bind(mark, 1, Value::Float(0.5)).unwrap();
        assert_eq!(env.lookup("x", 1), Ok(Value::Integer(10)));
        assert_eq!(env.lookup("y", 1), Ok(Value::Float(0.5)));

        env.restore(mark).unwrap();
        assert_eq!(env, before);
        assert_eq!(env.lookup("x", 1), Ok(Value::Integer(1)));
    }

    #[test]
    fn bind_outside_pushed_block_is_invariant_violation() {
        let mut env = Environment::new();
        let mark = env.mark();
        env.push_temporary("x");

        assert!(matches!(env.bind(mark, 1, Value::Integer(1)),
                         Err(RuntimeError::InternalInvariantViolation { .. })));
    }

    #[test]
    fn restore_above_stack_is_invariant_violation() {
        let mut env = Environment::new();
        env.push_temporary("x");
        let mark = env.mark();
        env.clear();

        assert!(matches!(env.restore(mark),
                         Err(RuntimeError::InternalInvariantViolation { .. })));
    }

    #[test]
    fn shrink_removes_block_below_first_match() {
        let mut env = Environment::new();
        env.extend("x", Value::Integer(1));
        env.push_temporary("a");
        env.push_temporary("b");
        env.push_temporary("c");

        env.shrink("c", 3).unwrap();
        assert_eq!(env.to_string(), "[(x : (Int 1))]");
    }

    #[test]
    fn shrink_missing_name_is_invariant_violation() {
        let mut env = Environment::new();
        env.extend("x", Value::Integer(1));

        assert!(matches!(env.shrink("y", 1),
                         Err(RuntimeError::InternalInvariantViolation { .. })));
        assert!(matches!(env.shrink("x", 2),
                         Err(RuntimeError::InternalInvariantViolation { .. })));
        assert_eq!(env.len(), 1);
    }
}
