mod method_include_cursor_tests;
mod selector_translator_tests;
pub(crate) mod test_utils;
