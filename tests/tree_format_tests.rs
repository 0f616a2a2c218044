use treearbo::lexer::{tokenize_line, TokenKind};
use treearbo::{string_to_tree, tree_to_string, Error, Node};

fn s(label: &str, children: Vec<Node>) -> Node {
    Node::structure(label, children)
}

fn l(value: &str) -> Node {
    Node::leaf(value)
}

#[test]
fn test_chain_vs_block() {
    let text = "user\n\tname \\Jin\n\tage 35\n\thobby\n\t\t\\kendo\n\t\t\\dance\n\t\t\\role play\n";
    let forest = string_to_tree(text).unwrap();

    assert_eq!(forest.len(), 1);
    let user = &forest[0];
    assert_eq!(user.label(), Some("user"));
    assert_eq!(user.children().len(), 3);

    assert_eq!(user.children()[0], s("name", vec![l("Jin")]));
    assert_eq!(user.children()[1], s("age", vec![s("35", vec![])]));
    assert_eq!(
        user.children()[2],
        s("hobby", vec![l("kendo"), l("dance"), l("role play")])
    );

    assert_eq!(tree_to_string(&forest).unwrap(), text);
}

#[test]
fn test_escape_consumes_rest_of_line() {
    for text in ["\\role play", "hobby \\role play", "a b c \\role play"] {
        let line = tokenize_line(text, 1).unwrap();
        let last = line.tokens.last().unwrap();
        assert_eq!(last.kind, TokenKind::Data);
        assert_eq!(last.text, "role play");
        assert_eq!(
            line.tokens
                .iter()
                .filter(|token| token.kind == TokenKind::Data)
                .count(),
            1
        );
    }

    // Words after the marker are part of the value, not tokens
    let forest = string_to_tree("quote \\to be or not to be\n").unwrap();
    assert_eq!(forest, vec![s("quote", vec![l("to be or not to be")])]);
}

#[test]
fn test_depth_jump_is_rejected() {
    let err = string_to_tree("root\n\t\tgrandchild\n").unwrap_err();
    assert!(matches!(err, Error::Indentation { line: 2, .. }));
}

#[test]
fn test_depth_jump_after_dedent_is_rejected() {
    let err = string_to_tree("a\n\tb\n\t\tc\nd\n\t\te\n").unwrap_err();
    assert!(matches!(err, Error::Indentation { line: 5, .. }));
}

#[test]
fn test_space_indentation_is_rejected() {
    let err = string_to_tree("a\n  b\n").unwrap_err();
    assert!(matches!(err, Error::Indentation { line: 2, col: 1, .. }));
}

#[test]
fn test_child_beneath_leaf_is_rejected() {
    let err = string_to_tree("name \\Jin\n\tnick\n").unwrap_err();
    assert!(matches!(err, Error::UnterminatedChain { line: 2, .. }));
}

#[test]
fn test_wrong_separator_is_rejected() {
    let err = string_to_tree("a\n\tb  c\n").unwrap_err();
    assert!(matches!(err, Error::Separator { line: 2, col: 4, .. }));
}

#[test]
fn test_missing_line_feed_is_rejected() {
    let err = string_to_tree("a\n\tb").unwrap_err();
    assert!(matches!(err, Error::UnexpectedEof { line: 2, .. }));
}

#[test]
fn test_multiple_roots() {
    let text = "first \\1\nsecond\n\tx\n\ty\n";
    let forest = string_to_tree(text).unwrap();
    assert_eq!(
        forest,
        vec![
            s("first", vec![l("1")]),
            s("second", vec![s("x", vec![]), s("y", vec![])]),
        ]
    );
    assert_eq!(tree_to_string(&forest).unwrap(), text);
}

#[test]
fn test_empty_document() {
    assert!(string_to_tree("").unwrap().is_empty());
    assert_eq!(tree_to_string(&[]).unwrap(), "");
}

#[test]
fn test_canonical_documents_are_reproduced() {
    let documents = [
        "a\n",
        "a b c d\n",
        "\\bare leaf\n",
        "list\n\t\\one\n\t\\two\n",
        "a b\n\tc\n\td \\e\n",
        "x\n\ty\n\t\tz\n\t\tw\n\tv\nu\n",
        "path \\C:\\Users\\jin\n",
        "empty \\\n",
        "größe \\über 9000\n",
    ];

    for text in documents {
        let forest = string_to_tree(text).unwrap();
        assert_eq!(tree_to_string(&forest).unwrap(), text, "document: {:?}", text);
    }
}

#[test]
fn test_block_under_chain() {
    // A leaf ends the chain, so the block has to hang off the last word instead
    let err = string_to_tree("all numbers is string: \\35\n\t\\171\n").unwrap_err();
    assert!(matches!(err, Error::UnterminatedChain { line: 2, .. }));

    let forest = string_to_tree("all numbers is string:\n\t\\35\n\t\\171\n").unwrap();
    assert_eq!(
        forest,
        vec![s(
            "all",
            vec![s(
                "numbers",
                vec![s("is", vec![s("string:", vec![l("35"), l("171")])])]
            )]
        )]
    );
    assert_eq!(
        tree_to_string(&forest).unwrap(),
        "all numbers is string:\n\t\\35\n\t\\171\n"
    );
}

#[test]
fn test_long_chain() {
    let text = format!("{} \\end\n", vec!["a"; 100_000].join(" "));
    let forest = string_to_tree(&text).unwrap();
    assert_eq!(tree_to_string(&forest).unwrap(), text);
    drop(forest);
}

#[test]
fn test_blank_lines() {
    // Tabs on a blank line still count
    let err = string_to_tree("a\n\t\t\t\n").unwrap_err();
    assert!(matches!(err, Error::Indentation { line: 2, .. }));

    // An empty line ends every open block
    let err = string_to_tree("a\n\n\tb\n").unwrap_err();
    assert!(matches!(err, Error::Indentation { line: 3, .. }));

    let forest = string_to_tree("a\n\tb\n\t\n\tc\n\nd\n").unwrap();
    assert_eq!(
        forest,
        vec![s("a", vec![s("b", vec![]), s("c", vec![])]), s("d", vec![])]
    );
    assert_eq!(tree_to_string(&forest).unwrap(), "a\n\tb\n\tc\nd\n");
}

#[test]
fn test_duplicate_labels_keep_order() {
    let text = "hobbit\n\tname \\Frodo\n\tname \\Baggins\n\tfriend \\Sam\n";
    let forest = string_to_tree(text).unwrap();
    let labels: Vec<_> = forest[0]
        .children()
        .iter()
        .filter_map(Node::label)
        .collect();
    assert_eq!(labels, vec!["name", "name", "friend"]);
    assert_eq!(tree_to_string(&forest).unwrap(), text);
}
