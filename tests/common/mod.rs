#![allow(dead_code)]

use lox_scan::{scan, ErrorLog, Token, TokenKind};

/// Scan `source`, returning the tokens together with every reported error.
pub fn scan_logged(source: &str) -> (Vec<Token>, ErrorLog) {
    let mut log = ErrorLog::new();
    let tokens = scan(source, &mut log);
    (tokens, log)
}

/// Scan input that is expected to be lexically valid.
pub fn scan_clean(source: &str) -> Vec<Token> {
    let (tokens, log) = scan_logged(source);
    assert!(
        log.is_empty(),
        "unexpected errors for {source:?}: {:?}",
        log.reports()
    );
    tokens
}

pub fn kinds(source: &str) -> Vec<TokenKind> {
    scan_clean(source).iter().map(|t| t.kind).collect()
}
