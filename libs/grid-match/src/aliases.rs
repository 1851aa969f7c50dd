//! Name-alias lookup collaborator.

/// Resolves a browser name to the set of names it is known under.
///
/// Injected into the engine so alias data can evolve independently of the
/// matching logic.
pub trait AliasLookup {
    /// All known names for `name`, including `name` itself when known.
    /// The engine always passes lower-case names.
    fn aliases_of(&self, name: &str) -> Vec<String>;
}

/// Alias lookup backed by the built-in `browsergrid-aliases` table.
#[cfg(feature = "builtin-aliases")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinAliases;

#[cfg(feature = "builtin-aliases")]
impl AliasLookup for BuiltinAliases {
    fn aliases_of(&self, name: &str) -> Vec<String> {
        browsergrid_aliases::names(name)
            .iter()
            .map(|alias| alias.to_string())
            .collect()
    }
}

/// Alias lookup that knows no aliases; names only match themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAliases;

impl AliasLookup for NoAliases {
    fn aliases_of(&self, _name: &str) -> Vec<String> {
        Vec::new()
    }
}
