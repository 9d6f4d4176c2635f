use doctype_metadata::SymbolTable;
use doctype_types::{Type, TypeSystem};

pub(crate) const NS: &str = r"Hediet\Types\Test";
pub(crate) const MY_CLASS: &str = r"Hediet\Types\Test\MyClass";
pub(crate) const FOO: &str = r"Hediet\Types\Test\Foo";
pub(crate) const BAR: &str = r"Hediet\Types\Test\Bar";
pub(crate) const FOO_INTERFACE: &str = r"Hediet\Types\Test\FooInterface";
pub(crate) const INVOKER: &str = r"Hediet\Types\Test\Invoker";
pub(crate) const TYPE: &str = r"Hediet\Types\Type";
pub(crate) const ARRAY_TYPE: &str = r"Hediet\Types\ArrayType";

pub(crate) fn get_test_data_path() -> std::path::PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::env::current_dir().unwrap());
    manifest_dir.join("test_data")
}

/// Loads the shared fixture manifest.
pub(crate) fn fixture_table() -> SymbolTable {
    SymbolTable::load(&get_test_data_path().join("symbols.json")).unwrap()
}

/// Parses a fully-qualified annotation, panicking on failure.
pub(crate) fn ty(types: &TypeSystem<'_>, text: &str) -> Type {
    types
        .type_of(text, None)
        .unwrap_or_else(|e| panic!("`{text}` should parse: {e}"))
}
