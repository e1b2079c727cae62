//! Type element definition

use std::fmt;

/// A Bril type: a named base type, or a pointer to another type
///
/// Pointers nest without bound, so `ptr<ptr<int>>` is
/// `Pointer(Pointer(Base("int")))`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Base(String),
    Pointer(Box<Type>),
}

impl Type {
    pub fn base(name: impl Into<String>) -> Self {
        Type::Base(name.into())
    }

    pub fn pointer(inner: Type) -> Self {
        Type::Pointer(Box::new(inner))
    }

    /// Number of pointer levels above the base type
    pub fn pointer_depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Type::Pointer(inner) = current {
            depth += 1;
            current = inner;
        }
        depth
    }

    /// The base type name at the bottom of any pointer chain
    pub fn base_name(&self) -> &str {
        match self {
            Type::Base(name) => name,
            Type::Pointer(inner) => inner.base_name(),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Base(name) => write!(f, "{name}"),
            Type::Pointer(inner) => write!(f, "ptr<{inner}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_base() {
        assert_eq!(Type::base("int").to_string(), "int");
    }

    #[test]
    fn test_display_nested_pointer() {
        let ty = Type::pointer(Type::pointer(Type::base("int")));
        assert_eq!(ty.to_string(), "ptr<ptr<int>>");
        assert_eq!(ty.pointer_depth(), 2);
        assert_eq!(ty.base_name(), "int");
    }
}
