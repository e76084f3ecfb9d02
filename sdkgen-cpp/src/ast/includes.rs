//! Include block rendering.

use sdkgen_codegen::CodeBuilder;

/// One header reference, system (`<...>`) or local (`"..."`).
#[derive(Debug, Clone)]
pub struct Include {
    pub path: String,
    pub system: bool,
}

impl Include {
    pub fn system(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            system: true,
        }
    }

    pub fn local(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            system: false,
        }
    }
}

/// An ordered `#include` block, pre-rendered at construction.
///
/// Input order is preserved and duplicates are kept; deduplication is the
/// discovery stage's job.
#[derive(Debug, Clone)]
pub struct Includes {
    declaration: String,
}

impl Includes {
    pub fn new(headers: impl IntoIterator<Item = Include>) -> Self {
        let declaration = CodeBuilder::cpp()
            .each(headers, |block, header| {
                if header.system {
                    block.line(&format!("#include <{}>", header.path))
                } else {
                    block.line(&format!("#include \"{}\"", header.path))
                }
            })
            .build();

        Self { declaration }
    }

    /// The include lines followed by one blank line. Pure getter; repeat
    /// calls return the same text.
    pub fn render(&self) -> String {
        format!("{}\n", self.declaration)
    }
}
