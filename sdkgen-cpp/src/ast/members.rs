//! Column-aligned member field declarations.

/// Column the `<name>;` cell starts at, measured from after the indent.
const TYPE_WIDTH: usize = 40;
/// Width of the `<name>;` cell; the comment starts after it.
const NAME_WIDTH: usize = 55;

/// A data field of a generated struct or class.
///
/// Renders to a single declaration line with the type and name padded to
/// fixed columns, so field declarations align across a whole type regardless
/// of individual name and type lengths.
#[derive(Debug, Clone)]
pub struct Member {
    ty: String,
    name: String,
    comment: String,
}

impl Member {
    /// Create a member; a non-empty comment is prefixed with `// `.
    pub fn new(ty: impl Into<String>, name: impl Into<String>, comment: impl Into<String>) -> Self {
        let comment = comment.into();
        Self {
            ty: ty.into(),
            name: name.into(),
            comment: if comment.is_empty() {
                comment
            } else {
                format!("// {}", comment)
            },
        }
    }

    /// Replace the comment. Overwrite semantics: only the last call survives.
    pub fn add_comment(&mut self, comment: &str) {
        self.comment = format!("// {}", comment);
    }

    /// Render the aligned declaration line.
    pub fn render(&self) -> String {
        format!(
            "\t{:<tw$}{:<nw$} {}\n",
            self.ty,
            format!("{};", self.name),
            self.comment,
            tw = TYPE_WIDTH,
            nw = NAME_WIDTH,
        )
    }
}
