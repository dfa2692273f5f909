use arch::builtin::Builtin;
use indexmap::IndexMap;
use serde::Serialize;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Builtin,
    Label,
    Var,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub addr: u16,
    pub kind: Kind,
}

/// Name to address. Iterates in insertion order: builtins, then labels, then variables.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct SymbolTable(IndexMap<String, Symbol>);

impl SymbolTable {
    /// Table seeded with the builtin symbols.
    pub fn new() -> Self {
        let mut table = SymbolTable(IndexMap::new());
        for b in Builtin::iter() {
            table.bind(&b.to_string(), b.addr(), Kind::Builtin);
        }
        table
    }

    /// Returns the previous binding, if any.
    pub fn bind(&mut self, name: &str, addr: u16, kind: Kind) -> Option<Symbol> {
        self.0.insert(name.to_string(), Symbol { addr, kind })
    }

    pub fn resolve(&self, name: &str) -> Option<u16> {
        self.0.get(name).map(|sym| sym.addr)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.0.iter().map(|(name, sym)| (name.as_str(), sym))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
