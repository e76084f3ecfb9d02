//! In-memory assembly of one generated translation unit.

use crate::ast::{Class, Enum, Function, Includes, Struct};
use crate::predefined::PredefinedFunctions;

/// A struct or class block in a generated file.
#[derive(Debug)]
pub enum TypeBlock {
    Struct(Struct),
    Class(Class),
}

/// A rendered file, handed to the writer stage.
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from the output directory.
    pub path: String,
    pub content: String,
}

/// Accumulates the generated entities of one output file and renders them in
/// contract order: include block, enums, struct/class blocks, out-of-class
/// function bodies.
///
/// Rendering delegates to the entity renderers, so it inherits their
/// render-once contract.
#[derive(Debug, Default)]
pub struct SdkFile {
    path: String,
    includes: Option<Includes>,
    enums: Vec<Enum>,
    types: Vec<TypeBlock>,
    functions: Vec<Function>,
}

impl SdkFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn set_includes(&mut self, includes: Includes) {
        self.includes = Some(includes);
    }

    pub fn add_enum(&mut self, decl: Enum) {
        self.enums.push(decl);
    }

    pub fn add_struct(&mut self, decl: Struct) {
        self.types.push(TypeBlock::Struct(decl));
    }

    pub fn add_class(&mut self, decl: Class) {
        self.types.push(TypeBlock::Class(decl));
    }

    /// Add an out-of-class function body, emitted after all type blocks.
    pub fn add_function(&mut self, function: Function) {
        self.functions.push(function);
    }

    /// Render every accumulated entity into one text block.
    pub fn render(&mut self, predefined: &PredefinedFunctions) -> PreviewFile {
        let mut content = String::new();

        if let Some(includes) = &self.includes {
            content.push_str(&includes.render());
        }

        for decl in &mut self.enums {
            content.push_str(&decl.render());
        }

        for block in &mut self.types {
            match block {
                TypeBlock::Struct(decl) => content.push_str(&decl.render()),
                TypeBlock::Class(decl) => content.push_str(&decl.render(predefined)),
            }
        }

        for function in &self.functions {
            content.push_str(&function.render());
        }

        PreviewFile {
            path: self.path.clone(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Include, Keyword, Member};

    #[test]
    fn test_sections_render_in_contract_order() {
        let mut file = SdkFile::new("SDK/Engine_structs.h");
        file.set_includes(Includes::new([Include::system("cstdint")]));

        let mut state = Enum::with_underlying("enum class EState", "uint8");
        state.add_member("Idle", 0);
        file.add_enum(state);

        let mut vector = Struct::new("FVector", Keyword::Struct);
        vector.add_member(Member::new("float", "X", ""));
        file.add_struct(vector);

        file.add_class(Class::new("UObject", Keyword::Class));

        let mut free_fn = Function::new("void", "InitSdk", Vec::new(), false);
        free_fn.add_body("\n\tInitGObjects();\n");
        file.add_function(free_fn);

        let rendered = file.render(&PredefinedFunctions::new());
        assert_eq!(rendered.path, "SDK/Engine_structs.h");

        let include_at = rendered.content.find("#include <cstdint>").unwrap();
        let enum_at = rendered.content.find("enum class EState").unwrap();
        let struct_at = rendered.content.find("struct FVector").unwrap();
        let class_at = rendered.content.find("class UObject").unwrap();
        let function_at = rendered.content.find("void InitSdk()").unwrap();
        assert!(include_at < enum_at);
        assert!(enum_at < struct_at);
        assert!(struct_at < class_at);
        assert!(class_at < function_at);
    }

    #[test]
    fn test_empty_file_renders_empty_content() {
        let rendered = SdkFile::new("SDK/Empty.h").render(&PredefinedFunctions::new());
        assert_eq!(rendered.content, "");
    }
}
