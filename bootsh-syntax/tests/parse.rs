// This file is part of bootsh, a POSIX shell for scripted boot menus.
// Copyright (C) 2024 The bootsh developers

use assert_matches::assert_matches;
use bootsh_syntax::parser::{ErrorCause, Parser, SyntaxError};
use bootsh_syntax::syntax::visit::Node;
use bootsh_syntax::syntax::{AndOrList, BinopType, Command, Program, Word};
use std::collections::HashMap;

fn parse(text: &str) -> Program {
    text.parse().unwrap_or_else(|e| panic!("{text:?}: {e}"))
}

fn first_command(program: &Program) -> &Command {
    match &program.body[0].and_or_list {
        AndOrList::Pipeline(pipeline) => &pipeline.commands[0],
        AndOrList::Binop(_) => panic!("expected a pipeline"),
    }
}

mod round_trip {
    use super::*;

    /// Formatting a parsed program and reparsing the result must yield the
    /// same structure.
    fn assert_round_trips(text: &str) {
        let first = parse(text);
        let formatted = first.to_string();
        let second: Program = formatted
            .parse()
            .unwrap_or_else(|e| panic!("reparse of {formatted:?}: {e}"));
        assert_eq!(second.to_string(), formatted, "source {text:?}");
    }

    #[test]
    fn simple_commands() {
        assert_round_trips("echo hello");
        assert_round_trips("X=1 Y=2 run --fast input >out 2>&1");
        assert_round_trips("menu_entry 'Try Linux' \"$distro\"");
    }

    #[test]
    fn pipelines_and_lists() {
        assert_round_trips("! probe cdrom | head -1");
        assert_round_trips("mount /boot && load config || fallback");
        assert_round_trips("spinner & boot; cleanup");
    }

    #[test]
    fn compound_commands() {
        assert_round_trips("if test -f /vmlinuz; then boot; else rescue; fi");
        assert_round_trips("if a; then b; elif c; then d; fi");
        assert_round_trips("for e in linux memtest; do add_entry $e; done");
        assert_round_trips("while read line; do parse $line; done");
        assert_round_trips("until ready; do wait_key; done");
        assert_round_trips("case $key in (up) prev;; (down) next;; (*) beep;; esac");
        assert_round_trips("{ init; run; }");
        assert_round_trips("(probe)");
        assert_round_trips("handler() { dispatch; }");
    }

    #[test]
    fn words_with_expansions() {
        assert_round_trips("echo ${root:-/dev/sda1} $(uname -r) `date`");
        assert_round_trips("echo \"kernel $version on $(hostname)\"");
        assert_round_trips("timeout=$((5 * 60))");
    }
}

mod deep_copy {
    use super::*;

    #[test]
    fn clone_is_structurally_equal() {
        let program = parse("if a; then b | c; fi; d <<EOF &\nbody $x\nEOF\n");
        let copy = program.clone();
        assert_eq!(copy, program);
    }

    #[test]
    fn clone_of_here_document_is_independent() {
        let program = parse("cat <<EOF\nfirst\nEOF\n");
        let copy = program.clone();

        // Dropping the original must leave the copy's here-document intact.
        drop(program);

        let Command::Simple(sc) = first_command(&copy) else {
            panic!("expected a simple command");
        };
        let body = sc.io_redirects[0].here_document.as_ref().unwrap();
        assert_eq!(body.lines()[0].literal_str().unwrap(), "first");
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn pipeline_in_and_or_list() {
        let program = parse("echo hello | grep h && echo ok");
        assert_matches!(&program.body[0].and_or_list, AndOrList::Binop(binop) => {
            assert_eq!(binop.r#type, BinopType::And);
            assert_matches!(&*binop.left, AndOrList::Pipeline(left) => {
                assert_eq!(left.commands.len(), 2);
            });
            assert_matches!(&*binop.right, AndOrList::Pipeline(right) => {
                assert_eq!(right.commands.len(), 1);
            });
        });
    }

    #[test]
    fn if_clause_shape() {
        let program = parse("if true; then echo a; fi");
        assert_matches!(first_command(&program), Command::If(clause) => {
            assert_eq!(clause.condition.len(), 1);
            assert_eq!(clause.body.len(), 1);
            assert_eq!(clause.else_part, None);
        });
    }

    #[test]
    fn here_document_redirect() {
        let program = parse("cat <<EOF\nhi\nEOF\n");
        assert_matches!(first_command(&program), Command::Simple(sc) => {
            let redirect = &sc.io_redirects[0];
            assert_eq!(redirect.op, bootsh_syntax::syntax::IoRedirectOp::DLess);
            assert_eq!(redirect.name.literal_str().unwrap(), "EOF");
            let body = redirect.here_document.as_ref().unwrap();
            assert_eq!(body.lines().len(), 1);
            assert_eq!(body.lines()[0].literal_str().unwrap(), "hi");
        });
    }

    #[test]
    fn function_definition_shape() {
        let program = parse("foo() { bar; }");
        assert_matches!(first_command(&program), Command::FunctionDefinition(fd) => {
            assert_eq!(fd.name, "foo");
            assert_matches!(&*fd.body, Command::BraceGroup(bg) => {
                assert_eq!(bg.body.len(), 1);
            });
        });
    }

    #[test]
    fn missing_fi_surfaces_a_committed_error() {
        let error = "if true; then echo a".parse::<Program>().unwrap_err();
        assert_eq!(
            error.cause,
            ErrorCause::Syntax(SyntaxError::ExpectedToken("fi"))
        );
        assert_eq!(error.cause.to_string(), "expected 'fi'");
        // The position is the end of the input, where `fi` was expected.
        assert_eq!(error.position.offset, 20);
        assert!(error.position.is_valid());
    }
}

mod aliases {
    use super::*;

    #[test]
    fn mutually_recursive_aliases_terminate() {
        let mut aliases = HashMap::new();
        aliases.insert("a".to_string(), "b".to_string());
        aliases.insert("b".to_string(), "a".to_string());

        let lexer = bootsh_syntax::parser::lex::Lexer::from_memory("a");
        let mut parser = Parser::with_aliases(lexer, &aliases);
        let program = parser.parse_program().unwrap();
        assert_eq!(program.to_string(), "a");
    }

    #[test]
    fn alias_bodies_are_reparsed_as_commands() {
        let mut aliases = HashMap::new();
        aliases.insert("quiet".to_string(), "run >/dev/null".to_string());

        let lexer = bootsh_syntax::parser::lex::Lexer::from_memory("quiet now");
        let mut parser = Parser::with_aliases(lexer, &aliases);
        let program = parser.parse_program().unwrap();
        assert_eq!(program.to_string(), "run now >/dev/null");
    }
}

mod traversal {
    use super::*;

    #[test]
    fn every_simple_command_is_reachable() {
        let program = parse(
            "setup; if probe; then boot $(kernel) | log; else rescue; fi; for x in a b; do use $x; done",
        );
        let mut names = Vec::new();
        Node::Program(&program).for_each(&mut |node| {
            if let Node::Command(Command::Simple(sc)) = node {
                if let Some(name) = sc.name.as_ref().and_then(Word::literal_str) {
                    names.push(name);
                }
            }
        });
        assert_eq!(
            names,
            ["setup", "probe", "boot", "kernel", "log", "rescue", "use"]
        );
    }
}

mod interactive {
    use super::*;

    #[test]
    fn line_by_line_parsing_with_recovery() {
        let mut parser = Parser::from_memory("boot\n)))\nrescue\n");

        assert_eq!(parser.parse_line().unwrap().unwrap().to_string(), "boot");

        let error = parser.parse_line().unwrap_err();
        assert_eq!(
            error.cause,
            ErrorCause::Syntax(SyntaxError::ExpectedCompleteCommand)
        );

        assert_eq!(parser.parse_line().unwrap().unwrap().to_string(), "rescue");
        assert_eq!(parser.parse_line().unwrap(), None);
    }

    #[test]
    fn line_numbers_advance_across_lines() {
        let error = "uname\nif true; then a\n".parse::<Program>().unwrap_err();
        assert_eq!(error.position.line, 3);
    }
}
