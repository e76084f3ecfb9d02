//! Struct and class declaration builders.

use sdkgen_codegen::CodeBuilder;

use super::{Function, Member};
use crate::predefined::PredefinedFunctions;

/// Declaration keyword for an aggregate type.
///
/// Each variant emits its own name; callers pick the keyword directly rather
/// than through a boolean discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Struct,
    Class,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Class => "class",
        }
    }
}

/// A named aggregate type with an optional base and ordered members.
///
/// The declaration header is computed at construction and fixed; members and
/// comments accumulate afterwards. Rendering appends the member lines into
/// the body buffer, so a second render duplicates them.
#[derive(Debug, Clone)]
pub struct Struct {
    cpp_name: String,
    declaration: String,
    inner_body: String,
    comments: String,
    members: Vec<Member>,
}

impl Struct {
    pub fn new(name: impl Into<String>, keyword: Keyword) -> Self {
        let name = name.into();
        let declaration = format!("{} {}\n", keyword.as_str(), name);
        Self::seeded(name, declaration)
    }

    /// Create a type deriving from `super_name`. An empty super name renders
    /// without the base clause, as [`Struct::new`] does.
    pub fn with_super(name: impl Into<String>, keyword: Keyword, super_name: &str) -> Self {
        let name = name.into();
        let declaration = if super_name.is_empty() {
            format!("{} {}\n", keyword.as_str(), name)
        } else {
            format!("{} {} : public {}\n", keyword.as_str(), name, super_name)
        };
        Self::seeded(name, declaration)
    }

    fn seeded(cpp_name: String, declaration: String) -> Self {
        Self {
            cpp_name,
            declaration,
            inner_body: String::from("{\n"),
            comments: String::new(),
            members: Vec::new(),
        }
    }

    /// The emitted C++ type name.
    pub fn cpp_name(&self) -> &str {
        &self.cpp_name
    }

    /// Append a `// ` comment line to the block above the declaration.
    pub fn add_comment(&mut self, comment: &str) {
        self.comments.push_str("// ");
        self.comments.push_str(comment);
        self.comments.push('\n');
    }

    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
    }

    pub fn add_members(&mut self, members: impl IntoIterator<Item = Member>) {
        self.members.extend(members);
    }

    /// Render the brace-enclosed declaration with its leading comment block.
    pub fn render(&mut self) -> String {
        for member in &self.members {
            self.inner_body.push_str(&member.render());
        }

        format!(
            "{}{}{}}};\n\n",
            self.comments, self.declaration, self.inner_body
        )
    }
}

/// A class: the [`Struct`] capability plus an ordered function list, a
/// synthesized static-class accessor, and predefined-function injection.
#[derive(Debug, Clone)]
pub struct Class {
    decl: Struct,
    raw_name: String,
    functions: Vec<Function>,
}

impl Class {
    /// Create a class. The raw (engine-internal) name defaults to the C++
    /// name; use [`Class::set_raw_name`] when they differ.
    pub fn new(name: impl Into<String>, keyword: Keyword) -> Self {
        let decl = Struct::new(name, keyword);
        Self {
            raw_name: decl.cpp_name.clone(),
            decl,
            functions: Vec::new(),
        }
    }

    pub fn with_super(name: impl Into<String>, keyword: Keyword, super_name: &str) -> Self {
        let decl = Struct::with_super(name, keyword, super_name);
        Self {
            raw_name: decl.cpp_name.clone(),
            decl,
            functions: Vec::new(),
        }
    }

    pub fn cpp_name(&self) -> &str {
        self.decl.cpp_name()
    }

    /// Set the undecorated name baked into the runtime class lookup.
    pub fn set_raw_name(&mut self, raw_name: impl Into<String>) {
        self.raw_name = raw_name.into();
    }

    pub fn add_comment(&mut self, comment: &str) {
        self.decl.add_comment(comment);
    }

    pub fn add_member(&mut self, member: Member) {
        self.decl.add_member(member);
    }

    pub fn add_members(&mut self, members: impl IntoIterator<Item = Member>) {
        self.decl.add_members(members);
    }

    pub fn add_function(&mut self, function: Function) {
        self.functions.push(function);
    }

    /// Render the class body: members, the static-class accessor, any
    /// predefined functions registered for this class name, then one forward
    /// declaration per attached function.
    ///
    /// The predefined table is consulted by C++ name; a class with no entry
    /// simply gets nothing injected. Bodies of attached functions are
    /// expected from a separate out-of-class pass.
    pub fn render(&mut self, predefined: &PredefinedFunctions) -> String {
        for member in &self.decl.members {
            self.decl.inner_body.push_str(&member.render());
        }

        let accessor = self.static_class_accessor();
        self.decl.inner_body.push_str(&accessor);

        if let Some(entry) = predefined.get(&self.decl.cpp_name) {
            for function in &entry.functions {
                self.decl.inner_body.push('\n');
                self.decl.inner_body.push_str(&function.declaration_h);

                // Declaration-only predefined functions are defined
                // elsewhere; bodied ones are emitted in place.
                if function.declaration_cpp.is_empty() {
                    self.decl.inner_body.push_str(&function.body);
                }

                self.decl.inner_body.push('\n');
            }
        }

        for function in &self.functions {
            self.decl.inner_body.push('\t');
            self.decl.inner_body.push_str(function.declaration());
            self.decl.inner_body.push_str(";\n");
        }

        format!(
            "{}{}{}}};\n\n",
            self.decl.comments, self.decl.declaration, self.decl.inner_body
        )
    }

    /// Accessor resolving the runtime class object once per call site and
    /// reusing it on every subsequent call.
    fn static_class_accessor(&self) -> String {
        CodeBuilder::cpp()
            .blank()
            .indent()
            .line("static class UClass* StaticClass() const")
            .line("{")
            .indent()
            .line(&format!(
                "static class UClass* Clss = UObject::FindClassFast(\"{}\");",
                self.raw_name
            ))
            .line("return Clss;")
            .dedent()
            .line("}")
            .dedent()
            .blank()
            .build()
    }
}
