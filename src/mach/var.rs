use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Cells are found by name with a linear scan. The address offset is
/// kept only so `dump` can show it.

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    address: i32,
    name: String,
    value: String,
}

impl Variable {
    pub fn address(&self) -> i32 {
        self.address
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Default)]
pub struct Var {
    vars: Vec<Variable>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    /// New cells start out holding the empty string. Reusing either a
    /// name or an address is an error.
    pub fn bind(&mut self, address: i32, name: &str) -> Result<()> {
        if self
            .vars
            .iter()
            .any(|var| var.name == name || var.address == address)
        {
            return Err(error!(DuplicateDefinition; name));
        }
        self.vars.push(Variable {
            address,
            name: name.to_string(),
            value: String::new(),
        });
        Ok(())
    }

    pub fn read(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|var| var.name == name)
            .map(|var| var.value.as_str())
    }

    /// Stores to an unknown name are silently dropped.
    pub fn write(&mut self, name: &str, value: &str) {
        if let Some(var) = self.vars.iter_mut().find(|var| var.name == name) {
            var.value = value.to_string();
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_bind_read_write() {
        let mut var = Var::new();
        var.bind(0, "x").unwrap();
        assert_eq!(var.read("x"), Some(""));
        var.write("x", "42");
        assert_eq!(var.read("x"), Some("42"));
        assert_eq!(var.read("y"), None);
    }

    #[test]
    fn test_write_unknown_is_ignored() {
        let mut var = Var::new();
        var.bind(3, "x").unwrap();
        var.write("nope", "1");
        assert_eq!(var.len(), 1);
        assert_eq!(var.read("nope"), None);
        assert_eq!(var.read("x"), Some(""));
    }

    #[test]
    fn test_redefinition_is_rejected() {
        let mut var = Var::new();
        var.bind(0, "x").unwrap();
        assert_eq!(
            var.bind(1, "x").map_err(|e| e.code()),
            Err(ErrorCode::DuplicateDefinition)
        );
        assert_eq!(
            var.bind(0, "y").map_err(|e| e.code()),
            Err(ErrorCode::DuplicateDefinition)
        );
        var.bind(1, "y").unwrap();
        let names: Vec<_> = var.iter().map(|v| (v.address(), v.name())).collect();
        assert_eq!(names, vec![(0, "x"), (1, "y")]);
    }
}
