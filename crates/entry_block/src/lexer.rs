// crates/entry_block/src/lexer.rs

//! Just enough lexing to tell code apart from comments and literals.
//!
//! Every byte of the input is tagged with the [`Context`] it sits in. All
//! delimiters we care about are ASCII, so working on bytes never splits a
//! multi-byte character in a way that matters.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Code,
    LineComment,
    BlockComment,
    StringLiteral,
    RuneLiteral,
    RawString,
}

/// Tags each byte of `content` with its lexical context.
///
/// Unterminated string and rune literals end at the newline; unterminated
/// block comments and raw strings run to the end of the input.
pub fn classify(content: &str) -> Vec<Context> {
    let bytes = content.as_bytes();
    let mut contexts = vec![Context::Code; bytes.len()];
    let mut state = Context::Code;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();

        match state {
            Context::Code => match (b, next) {
                (b'/', Some(b'/')) => {
                    state = Context::LineComment;
                    mark(&mut contexts, i, 2, state);
                    i += 2;
                    continue;
                }
                (b'/', Some(b'*')) => {
                    state = Context::BlockComment;
                    mark(&mut contexts, i, 2, state);
                    i += 2;
                    continue;
                }
                (b'"', _) => state = Context::StringLiteral,
                (b'\'', _) => state = Context::RuneLiteral,
                (b'`', _) => state = Context::RawString,
                _ => {}
            },
            Context::LineComment => {
                if b == b'\n' {
                    state = Context::Code;
                }
            }
            Context::BlockComment => {
                if b == b'*' && next == Some(b'/') {
                    mark(&mut contexts, i, 2, state);
                    state = Context::Code;
                    i += 2;
                    continue;
                }
            }
            Context::StringLiteral | Context::RuneLiteral => {
                let quote = if state == Context::StringLiteral { b'"' } else { b'\'' };
                match (b, next) {
                    (b'\\', Some(escaped)) if escaped != b'\n' => {
                        mark(&mut contexts, i, 2, state);
                        i += 2;
                        continue;
                    }
                    (b'\n', _) => state = Context::Code,
                    _ if b == quote => {
                        contexts[i] = state;
                        state = Context::Code;
                        i += 1;
                        continue;
                    }
                    _ => {}
                }
            }
            Context::RawString => {
                if b == b'`' {
                    contexts[i] = state;
                    state = Context::Code;
                    i += 1;
                    continue;
                }
            }
        }

        contexts[i] = state;
        i += 1;
    }

    contexts
}

fn mark(contexts: &mut [Context], start: usize, len: usize, context: Context) {
    let end = (start + len).min(contexts.len());
    for slot in &mut contexts[start..end] {
        *slot = context;
    }
}
