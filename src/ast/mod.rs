/// AST module
/// The expression tree the default grammars build
///
/// Submodules:
/// - ast: `Expr` and the `ParseParams` handed to its parselets
pub mod ast;
