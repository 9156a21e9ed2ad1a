use lisp_ir::Value;

/// A function registered by `defun`.
///
/// Immutable once defined. Shared by `Rc` so a call can hold the definition
/// while the environment it lives in is being mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDefinition {
    pub params: Vec<String>,
    /// Evaluated once per call, in a fresh scope holding the parameters.
    pub body: Value,
}

impl FunctionDefinition {
    pub fn new(params: Vec<String>, body: Value) -> Self {
        FunctionDefinition { params, body }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
