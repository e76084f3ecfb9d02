//! Predefined per-class function overrides.
//!
//! The discovery stage hands the renderer a table of hand-written functions
//! keyed by C++ class name. The renderer only reads it: during
//! [`Class::render`](crate::ast::Class::render) each registered descriptor's
//! declaration is injected, and its body is inlined when no out-of-class
//! definition exists.

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

/// A hand-written function attached to one generated class.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PredefinedFunction {
    /// In-class declaration text, emitted verbatim.
    pub declaration_h: String,
    /// Out-of-class definition text. Non-empty means the body is emitted by
    /// the out-of-class pass, so the in-class injection stays declaration
    /// only.
    pub declaration_cpp: String,
    /// Body text, inlined after the declaration when `declaration_cpp` is
    /// empty.
    pub body: String,
}

/// Per-class override entry: extra member lines plus ordered functions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PredefinedEntry {
    /// Verbatim member declaration lines consumed by a different pipeline
    /// stage; rendering does not read them.
    pub members: Vec<String>,
    pub functions: Vec<PredefinedFunction>,
}

/// Registration-ordered table of per-class overrides, keyed by the generated
/// C++ class name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct PredefinedFunctions {
    entries: IndexMap<String, PredefinedEntry>,
}

impl PredefinedFunctions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from its TOML hand-off form:
    ///
    /// ```toml
    /// [UObject]
    /// functions = [
    ///     { declaration_h = "\tbool IsA(class UClass* Clss) const;", declaration_cpp = "", body = "" },
    /// ]
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self, PredefinedError> {
        Ok(toml::from_str(input)?)
    }

    pub fn insert(&mut self, class_name: impl Into<String>, entry: PredefinedEntry) {
        self.entries.insert(class_name.into(), entry);
    }

    /// Look up the overrides for a class. Absent entries are the normal
    /// case, not an error.
    pub fn get(&self, class_name: &str) -> Option<&PredefinedEntry> {
        self.entries.get(class_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PredefinedEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }
}

#[derive(Debug, Error)]
pub enum PredefinedError {
    #[error("failed to parse predefined function table")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_class_yields_none() {
        let table = PredefinedFunctions::new();
        assert!(table.get("AActor").is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn test_insert_preserves_registration_order() {
        let mut table = PredefinedFunctions::new();
        table.insert("UObject", PredefinedEntry::default());
        table.insert("AActor", PredefinedEntry::default());
        table.insert("UWorld", PredefinedEntry::default());

        let names: Vec<_> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["UObject", "AActor", "UWorld"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_from_toml_str() {
        let table = PredefinedFunctions::from_toml_str(
            r#"
            [UObject]
            functions = [
                { declaration_h = "\tbool IsA(class UClass* Clss) const", body = "\n\t{\n\t\treturn true;\n\t}" },
                { declaration_h = "\tstd::string GetName() const;", declaration_cpp = "std::string UObject::GetName() const" },
            ]

            [UWorld]
            members = ["\tclass ULevel* PersistentLevel;"]
            "#,
        )
        .unwrap();

        let object = table.get("UObject").unwrap();
        assert_eq!(object.functions.len(), 2);
        assert!(object.functions[0].declaration_cpp.is_empty());
        assert!(object.functions[1].body.is_empty());

        let world = table.get("UWorld").unwrap();
        assert!(world.functions.is_empty());
        assert_eq!(world.members.len(), 1);
    }

    #[test]
    fn test_from_toml_str_rejects_malformed_input() {
        let result = PredefinedFunctions::from_toml_str("[UObject\nfunctions = 3");
        assert!(matches!(result, Err(PredefinedError::Parse(_))));
    }
}
