#![no_main]

use conftoml::frontend::{comments, lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Frontend alone, then the whole pipeline
        let stripped = comments::strip_block_comments(s);
        let tokens = lexer::lex(stripped.text());
        let _ = parser::parse(stripped.text(), &tokens);
        let _ = conftoml::convert_str(s);
    }
});
