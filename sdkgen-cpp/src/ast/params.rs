//! Function parameter fragments.

/// One parameter of a generated function.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub ty: String,
    pub name: String,
    /// Reserved for pointer decoration of out parameters; not consulted by
    /// rendering yet.
    pub is_out_ptr: bool,
}

impl Parameter {
    pub fn new(ty: impl Into<String>, name: impl Into<String>, is_out_ptr: bool) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            is_out_ptr,
        }
    }

    /// Inline fragment used when joining a parameter list.
    ///
    /// The trailing separator is always present; the owning
    /// [`Function`](super::Function) trims the last one.
    pub fn fragment(&self) -> String {
        format!("{} {}, ", self.ty, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_keeps_trailing_separator() {
        let param = Parameter::new("int32", "Count", false);
        assert_eq!(param.fragment(), "int32 Count, ");
    }

    #[test]
    fn test_out_ptr_flag_does_not_change_fragment() {
        let by_value = Parameter::new("FVector", "Origin", false);
        let out_ptr = Parameter::new("FVector", "Origin", true);
        assert_eq!(by_value.fragment(), out_ptr.fragment());
        assert!(out_ptr.is_out_ptr);
    }
}
