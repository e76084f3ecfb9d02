//! Enumeration builder.

/// Column width for enumerator names.
const NAME_WIDTH: usize = 30;

/// A named enumeration with ordered `name = value` entries.
///
/// The declaration line and the opening brace are seeded at construction.
/// Rendering appends the accumulated entries into the body buffer, so a
/// second render of the same instance duplicates them.
#[derive(Debug, Clone)]
pub struct Enum {
    declaration: String,
    inner_body: String,
    members: Vec<String>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            declaration: format!("{}\n", name),
            inner_body: String::from("{\n"),
            members: Vec::new(),
        }
    }

    /// Create an enum with an explicit underlying type.
    pub fn with_underlying(name: impl Into<String>, ty: impl Into<String>) -> Self {
        let name = name.into();
        let ty = ty.into();
        Self {
            declaration: format!("{} : {}\n", name, ty),
            inner_body: String::from("{\n"),
            members: Vec::new(),
        }
    }

    /// Prepend a `// ` comment line above the declaration.
    ///
    /// Repeated calls stack, newest on top. This intentionally differs from
    /// [`Member::add_comment`](super::Member::add_comment), which replaces.
    pub fn add_comment(&mut self, comment: &str) {
        self.declaration = format!("// {}\n{}", comment, self.declaration);
    }

    /// Append one `name = value` entry. No uniqueness or ordering checks.
    pub fn add_member(&mut self, name: impl Into<String>, value: i64) {
        let name = name.into();
        self.members
            .push(format!("\t{:<w$} = {}", name, value, w = NAME_WIDTH));
    }

    /// Render the brace-enclosed declaration.
    pub fn render(&mut self) -> String {
        for member in &self.members {
            self.inner_body.push_str(member);
            self.inner_body.push_str(",\n");
        }
        self.inner_body.push_str("};\n\n");

        format!("{}{}", self.declaration, self.inner_body)
    }
}
