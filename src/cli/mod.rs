//! The four things `bucket` can do with a source file. Each writes its
//! results to the given output and stops at the first error.


use std::io::Write;

use bucket_common::source::SourceFile;
use bucket_frontend::ast::Prettier;
use bucket_frontend::lex::{Lexer, TokenKind};
use bucket_frontend::objects::Module;
use bucket_frontend::parse::parse;
use console::Style;
use log::debug;

/// Echo the characters of the source.
pub fn read(mut source: SourceFile, out: &mut impl Write) -> anyhow::Result<()> {
    while let Some(c) = source.current() {
        write!(out, "{c}")?;
        source.next();
    }

    Ok(())
}

/// Print every token of the source on its own line. Tokens lexed before an
/// error are still printed.
pub fn lex(source: &SourceFile, out: &mut impl Write, styled: bool) -> anyhow::Result<()> {
    let mut lexer = Lexer::new(source)?;

    while !lexer.current().is_eof() {
        let kind = &lexer.current().kind;
        let style = match kind {
            TokenKind::Keyword(_) | TokenKind::Symbol(_) => Style::new().bold(),
            TokenKind::Boolean(_) => Style::new().red(),
            _ => Style::new(),
        };

        writeln!(out, "{}", style.force_styling(styled).apply_to(kind))?;
        lexer.next()?;
    }

    Ok(())
}

/// Parse the source and print the tree back out.
pub fn parse_and_print(source: &SourceFile, out: &mut impl Write) -> anyhow::Result<()> {
    let program = parse(source)?;
    let prettier = Prettier::new();
    prettier.render(&program, out)?;
    Ok(())
}

/// Parse the source and declare everything in it. Prints nothing.
pub fn compile(source: &SourceFile) -> anyhow::Result<()> {
    let program = parse(source)?;
    let module = Module::analyze(&program)?;

    debug!("'{}' declares {} objects", source.name(), module.len());
    Ok(())
}
