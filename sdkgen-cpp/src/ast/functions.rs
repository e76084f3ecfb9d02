//! Function signature and body builder.

use super::{Parameter, Struct};

/// A generated function: a signature frozen at construction plus a body that
/// accumulates over the discovery pass.
///
/// Class-member functions are indented one level; free functions start at
/// column zero.
#[derive(Debug, Clone)]
pub struct Function {
    parameters: Vec<Parameter>,
    indent: &'static str,
    declaration: String,
    inner_body: String,
    param_struct: Option<Box<Struct>>,
}

impl Function {
    /// Create a function. The declaration string and the opening-brace body
    /// seed are built here and stay frozen; mutating the parameter list
    /// afterwards does not rewrite them.
    pub fn new(
        ty: impl Into<String>,
        name: impl Into<String>,
        parameters: Vec<Parameter>,
        is_class_member: bool,
    ) -> Self {
        let ty = ty.into();
        let name = name.into();
        let indent = if is_class_member { "\t" } else { "" };
        let declaration = format!("{}{} {}({})", indent, ty, name, Self::join(&parameters));
        Self {
            parameters,
            indent,
            declaration,
            inner_body: format!("{}{{", indent),
            param_struct: None,
        }
    }

    /// The signature built at construction time.
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut Vec<Parameter> {
        &mut self.parameters
    }

    /// Join the current parameter list, without the trailing separator.
    pub fn parameters_as_string(&self) -> String {
        Self::join(&self.parameters)
    }

    /// Append verbatim text to the accumulating body.
    pub fn add_body(&mut self, body: &str) {
        self.inner_body.push_str(body);
    }

    /// Attach the generated argument-bundle struct, taking ownership.
    pub fn set_param_struct(&mut self, params: Struct) {
        self.param_struct = Some(Box::new(params));
    }

    pub fn param_struct(&self) -> Option<&Struct> {
        self.param_struct.as_deref()
    }

    pub fn param_struct_mut(&mut self) -> Option<&mut Struct> {
        self.param_struct.as_deref_mut()
    }

    /// Render the full definition block: a blank line, the frozen
    /// declaration, the accumulated body, and a closing brace re-indented to
    /// match the opening indent.
    pub fn render(&self) -> String {
        format!(
            "\n{}\n{}{}}}\n",
            self.declaration, self.inner_body, self.indent
        )
    }

    fn join(parameters: &[Parameter]) -> String {
        if parameters.is_empty() {
            return String::new();
        }

        let mut joined = String::new();
        for parameter in parameters {
            joined.push_str(&parameter.fragment());
        }
        // Every fragment carries ", "; drop the last separator. Guarded by
        // the empty check above so the truncation cannot underflow.
        joined.truncate(joined.len() - 2);
        joined
    }
}
